//! The serialized shape of a list.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::CodecError;
use crate::list::OrderedList;

/// The `{elements, size}` record every codec reads and writes.
///
/// Encoding always writes `size == elements.len()`. Decoding goes through
/// [`ListRecord::into_list`], which rejects records where the two disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRecord<T> {
    /// The live elements, in index order
    pub elements: Vec<T>,
    /// The number of live elements
    pub size: usize,
}

impl<T> ListRecord<T> {
    /// Validates the record and turns it into a list.
    ///
    /// # Errors
    /// Returns [`CodecError::SizeMismatch`] if `size != elements.len()`.
    pub fn into_list<E: Default>(self) -> Result<OrderedList<T, E>, CodecError> {
        let actual = self.elements.len();
        if self.size != actual {
            warn!(
                declared = self.size,
                actual, "Rejecting list record with inconsistent size"
            );
            return Err(CodecError::SizeMismatch {
                declared: self.size,
                actual,
            });
        }
        Ok(OrderedList::from_vec_with_equality(
            self.elements,
            E::default(),
        ))
    }
}

impl<T: Clone, E> From<&OrderedList<T, E>> for ListRecord<T> {
    fn from(list: &OrderedList<T, E>) -> Self {
        Self {
            elements: list.to_array(),
            size: list.size(),
        }
    }
}

/// Borrowed form of [`ListRecord`] used when encoding, so a list can be
/// written without copying its elements.
#[derive(Serialize)]
pub(crate) struct ListRecordRef<'a, T> {
    elements: &'a [T],
    size: usize,
}

impl<'a, T> ListRecordRef<'a, T> {
    pub(crate) fn from_slice(elements: &'a [T]) -> Self {
        Self {
            elements,
            size: elements.len(),
        }
    }
}
