//! Error types for encoding and decoding lists.

use thiserror::Error;

/// Structured error types for codec operations.
///
/// Decoding failures come in two flavours: input the codec cannot parse
/// ([`DecodeFailed`](CodecError::DecodeFailed)) and a well-formed record whose
/// `size` field disagrees with its elements
/// ([`SizeMismatch`](CodecError::SizeMismatch)). Both count as decode errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CodecError {
    /// The codec could not encode the list
    #[error("{codec} encoding failed: {reason}")]
    EncodeFailed { codec: &'static str, reason: String },

    /// The input could not be decoded into a list record
    #[error("{codec} decoding failed: {reason}")]
    DecodeFailed { codec: &'static str, reason: String },

    /// The record's size field does not match its element count
    #[error("List record declares size {declared} but holds {actual} elements")]
    SizeMismatch { declared: usize, actual: usize },
}

impl CodecError {
    /// Check if this error happened while encoding
    pub fn is_encode_error(&self) -> bool {
        matches!(self, CodecError::EncodeFailed { .. })
    }

    /// Check if this error happened while decoding
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            CodecError::DecodeFailed { .. } | CodecError::SizeMismatch { .. }
        )
    }

    /// Check if this error is a size/element-count disagreement
    pub fn is_size_mismatch(&self) -> bool {
        matches!(self, CodecError::SizeMismatch { .. })
    }

    /// Get the codec name if this error came from a codec
    pub fn codec(&self) -> Option<&'static str> {
        match self {
            CodecError::EncodeFailed { codec, .. } | CodecError::DecodeFailed { codec, .. } => {
                Some(*codec)
            }
            CodecError::SizeMismatch { .. } => None,
        }
    }
}

// Conversion from CodecError to the main Error type
impl From<CodecError> for crate::Error {
    fn from(err: CodecError) -> Self {
        crate::Error::Codec(err)
    }
}
