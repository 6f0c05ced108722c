//!
//! ordered-list: an index-addressable list backed by a growable array.
//!
//! ## Core Concepts
//!
//! * **OrderedList (`list::OrderedList`)**: The collection itself. Elements live contiguously at
//!   indices `0..size()`; positional inserts and removals splice the backing array and shift the
//!   tail so the list never has gaps.
//! * **Equality (`list::Equality`)**: A pluggable strategy deciding when two elements are the same
//!   value for `index_of`, `contains`, `remove` and `remove_all`. Defaults to `PartialEq`.
//! * **Codecs (`codec::Codec`)**: Byte formats for the `{elements, size}` record a list is
//!   serialized as. JSON is always available; a compact binary codec sits behind the "binary"
//!   feature.
//!
//! ## Example
//!
//! ```
//! use ordered_list::OrderedList;
//!
//! let mut list: OrderedList<i32> = (1..=10).collect();
//! list.remove_range(4, 6).unwrap();
//! assert_eq!(list.to_display_string(), "[1, 2, 3, 4, 7, 8, 9, 10]");
//!
//! let restored: OrderedList<i32> = OrderedList::from_json(&list.to_json().unwrap()).unwrap();
//! assert_eq!(restored, list);
//! ```

pub mod codec;
pub mod list;

/// Re-export the list types for easier access.
pub use list::{EqBy, Equality, ListError, NativeEq, OrderedList, by_key};

/// Result type used throughout the ordered-list library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the ordered-list library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured list errors from the list module
    #[error(transparent)]
    List(list::ListError),

    /// Structured codec errors from the codec module
    #[error(transparent)]
    Codec(codec::CodecError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::List(_) => "list",
            Error::Codec(_) => "codec",
        }
    }

    /// Check if this error is an index bounds violation.
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Error::List(list_err) => list_err.is_out_of_range(),
            _ => false,
        }
    }

    /// Check if this error came from encoding a list.
    pub fn is_encode_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_encode_error(),
            _ => false,
        }
    }

    /// Check if this error came from decoding a list.
    pub fn is_decode_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_decode_error(),
            _ => false,
        }
    }
}
