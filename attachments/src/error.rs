//! Error types for attachment encoding and decoding.
//!
//! Every codec operation that can fail returns a [`CodecError`]. Failures
//! are all-or-nothing: a failed decode never hands back a half-populated
//! attachment, and a failed encode never leaves bytes in the caller's buffer.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors that can occur while moving an attachment between memory, bytes,
/// and JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The byte cursor ran out before a field was fully read.
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes the field required.
        needed: usize,
        /// Bytes left in the cursor.
        remaining: usize,
    },

    /// A required JSON key (or builder field) was never provided.
    #[error("missing field `{field}`")]
    MissingField {
        /// Name of the absent field.
        field: String,
    },

    /// A field was present but its value could not be interpreted.
    #[error("invalid field `{field}`: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Bytes were left over after decoding a standalone attachment.
    #[error("{count} trailing bytes after attachment")]
    TrailingBytes {
        /// Number of unconsumed bytes.
        count: usize,
    },

    /// A fixed-length field had the wrong length.
    #[error("length mismatch for `{field}`: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Name of the fixed-length field.
        field: String,
        /// Required length.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// A field exceeds the capacity of its length prefix or a configured bound.
    #[error("`{field}` too long: {len} exceeds maximum of {max}")]
    CapacityExceeded {
        /// Name of the oversized field.
        field: String,
        /// Actual length or count.
        len: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// A fee amount cannot be expressed in integer base units.
    #[error("fee {0} is not representable in base units")]
    FeeOverflow(String),
}

impl CodecError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
