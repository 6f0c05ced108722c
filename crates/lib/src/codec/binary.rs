//! Compact binary codec backed by `postcard`.

use serde::{Serialize, de::DeserializeOwned};

use super::{Codec, CodecError};

const NAME: &str = "postcard";

/// Encodes values in postcard's compact, non-self-describing format.
///
/// The bytes carry no field names, so they are only readable by the same
/// record layout that wrote them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryCodec;

impl Codec for BinaryCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn encode<V>(&self, value: &V) -> Result<Vec<u8>, CodecError>
    where
        V: Serialize + ?Sized,
    {
        postcard::to_stdvec(value).map_err(|e| CodecError::EncodeFailed {
            codec: NAME,
            reason: e.to_string(),
        })
    }

    fn decode<V>(&self, bytes: &[u8]) -> Result<V, CodecError>
    where
        V: DeserializeOwned,
    {
        postcard::from_bytes(bytes).map_err(|e| CodecError::DecodeFailed {
            codec: NAME,
            reason: e.to_string(),
        })
    }
}
