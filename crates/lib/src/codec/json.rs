//! JSON codec backed by `serde_json`.

use serde::{Serialize, de::DeserializeOwned};

use super::{Codec, CodecError};

const NAME: &str = "json";

/// Encodes values as JSON.
///
/// The default output is compact; [`JsonCodec::pretty`] indents it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// A codec producing indented, multi-line JSON
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Encode `value` as a JSON string.
    ///
    /// # Errors
    /// Returns [`CodecError::EncodeFailed`] if `value` has no JSON form.
    pub fn encode_to_string<V>(&self, value: &V) -> Result<String, CodecError>
    where
        V: Serialize + ?Sized,
    {
        let result = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        result.map_err(|e| CodecError::EncodeFailed {
            codec: NAME,
            reason: e.to_string(),
        })
    }
}

impl Codec for JsonCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn encode<V>(&self, value: &V) -> Result<Vec<u8>, CodecError>
    where
        V: Serialize + ?Sized,
    {
        self.encode_to_string(value).map(String::into_bytes)
    }

    fn decode<V>(&self, bytes: &[u8]) -> Result<V, CodecError>
    where
        V: DeserializeOwned,
    {
        serde_json::from_slice(bytes).map_err(|e| CodecError::DecodeFailed {
            codec: NAME,
            reason: e.to_string(),
        })
    }
}
