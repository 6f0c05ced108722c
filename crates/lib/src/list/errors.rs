//! Error types for list operations.
//!
//! Positional operations on [`OrderedList`](super::OrderedList) validate their
//! index arguments up front and report violations through [`ListError`].

use thiserror::Error;

/// Structured error types for list operations.
///
/// Bounds violations are programmer errors: they are surfaced immediately and
/// the list is left unchanged.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// An index argument fell outside the range accepted by the operation
    #[error("Index: {index}, Size: {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

impl ListError {
    pub(crate) fn out_of_range(index: usize, size: usize) -> Self {
        ListError::IndexOutOfRange { index, size }
    }

    /// Check if this error is a bounds violation
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ListError::IndexOutOfRange { .. })
    }

    /// Get the offending index
    pub fn index(&self) -> usize {
        match self {
            ListError::IndexOutOfRange { index, .. } => *index,
        }
    }

    /// Get the list size at the time of the failed call
    pub fn size(&self) -> usize {
        match self {
            ListError::IndexOutOfRange { size, .. } => *size,
        }
    }
}

// Conversion from ListError to the main Error type
impl From<ListError> for crate::Error {
    fn from(err: ListError) -> Self {
        crate::Error::List(err)
    }
}
