//! # Wire Constants & Validation Policy
//!
//! Every magic number in the attachment format lives here. These values are
//! part of the consensus contract: changing one is a hard fork, not a
//! refactor.

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Version assigned to freshly constructed attachments.
pub const DEFAULT_APPENDIX_VERSION: u8 = 0;

/// Size of the version tag that prefixes every versioned attachment body.
pub const VERSION_TAG_SIZE: usize = 1;

/// JSON key prefix for the version tag. The full key is
/// `version.<AppendixName>`, e.g. `version.AssetTransfer`.
pub const VERSION_KEY_PREFIX: &str = "version.";

// ---------------------------------------------------------------------------
// Field Layout
// ---------------------------------------------------------------------------

/// Length of an asset description hash. Exactly 32 bytes or nothing.
pub const DESCRIPTION_HASH_LENGTH: usize = 32;

/// Strings on the wire carry a single-byte length prefix, so 255 is the hard
/// ceiling regardless of policy.
pub const MAX_WIRE_STRING_LENGTH: usize = u8::MAX as usize;

/// Maximum transfers in one atomic multi-transfer. The count is one byte.
pub const MAX_TRANSFERS: usize = u8::MAX as usize;

/// Wire size of a single multi-transfer record: recipient, asset, quantity.
pub const TRANSFER_RECORD_SIZE: usize = 8 + 8 + 8;

// ---------------------------------------------------------------------------
// Fees
// ---------------------------------------------------------------------------

/// Decimal places of the fee currency. Fees are quoted in whole coins and
/// settled in base units of 10^-8.
pub const FEE_DECIMALS: u32 = 8;

// ---------------------------------------------------------------------------
// ValidationPolicy
// ---------------------------------------------------------------------------

/// Optional semantic limits applied on top of the wire format.
///
/// The wire format only enforces what its length prefixes can express. Nodes
/// that want stricter rules (for example a shorter description URL) load a
/// policy and call `validate` on decoded attachments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationPolicy {
    /// Maximum description URL length in bytes. `None` means only the wire
    /// ceiling of [`MAX_WIRE_STRING_LENGTH`] applies.
    pub max_description_url_length: Option<usize>,
}

impl ValidationPolicy {
    /// A policy that enforces nothing beyond the wire format.
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Parses a policy from its JSON representation.
    ///
    /// Missing keys fall back to the permissive defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| CodecError::invalid("validationPolicy", e.to_string()))
    }

    /// Checks a description URL against the configured bound.
    pub fn check_description_url(&self, url: &str) -> Result<()> {
        match self.max_description_url_length {
            Some(max) if url.len() > max => Err(CodecError::CapacityExceeded {
                field: "descriptionUrl".into(),
                len: url.len(),
                max,
            }),
            _ => Ok(()),
        }
    }
}
