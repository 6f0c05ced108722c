//! Encoding lists to bytes and back.
//!
//! A list is always written as the named-field record
//! `{elements, size}` ([`ListRecord`]). The byte format is chosen by a
//! [`Codec`]; the list itself never depends on a particular format.
//!
//! # Codecs
//!
//! - [`JsonCodec`] - human-readable JSON via `serde_json`
//! - [`BinaryCodec`] - compact binary via `postcard` (requires the
//!   "binary" feature)
//!
//! # Usage
//!
//! ```
//! use ordered_list::{OrderedList, codec::JsonCodec};
//!
//! let list = OrderedList::from(vec![1, 2, 3]);
//! let bytes = list.serialize_with(&JsonCodec::default()).unwrap();
//! assert_eq!(bytes, br#"{"elements":[1,2,3],"size":3}"#);
//!
//! let decoded: OrderedList<i32> = OrderedList::deserialize_with(&JsonCodec::default(), &bytes).unwrap();
//! assert_eq!(decoded, list);
//! ```

use serde::{Serialize, de::DeserializeOwned};

#[cfg(feature = "binary")]
pub mod binary;
pub mod errors;
pub mod json;
pub mod record;

#[cfg(feature = "binary")]
pub use binary::BinaryCodec;
pub use errors::CodecError;
pub use json::JsonCodec;
pub use record::ListRecord;

/// A byte format that can carry any serde value.
///
/// Implementations map their format-specific failures onto
/// [`CodecError::EncodeFailed`] and [`CodecError::DecodeFailed`].
pub trait Codec {
    /// Short name used in errors and logs
    fn name(&self) -> &'static str;

    /// Encode `value` into bytes.
    fn encode<V>(&self, value: &V) -> Result<Vec<u8>, CodecError>
    where
        V: Serialize + ?Sized;

    /// Decode a value from `bytes`.
    fn decode<V>(&self, bytes: &[u8]) -> Result<V, CodecError>
    where
        V: DeserializeOwned;
}
