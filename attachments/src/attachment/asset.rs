//! Asset attachments: issuance, issue-more, and transfer.
//!
//! Issuance has its own layout. Issue-more and transfer share
//! [`AssetFields`] (asset id + quantity).

use bytes::{Buf, BufMut};
use tracing::trace;

use super::{Attachment, FieldLayout};
use crate::appendix::Appendix;
use crate::config::{
    ValidationPolicy, DEFAULT_APPENDIX_VERSION, DESCRIPTION_HASH_LENGTH, MAX_WIRE_STRING_LENGTH,
};
use crate::error::{CodecError, Result};
use crate::io::{check_short_string, ReadExt, WriteExt};
use crate::json::{self, JsonMap};
use crate::types::TransactionType;

// ---------------------------------------------------------------------------
// AssetIssuance
// ---------------------------------------------------------------------------

/// Creates a new asset.
///
/// # Wire layout
///
/// ```text
/// url_len: u8 | url: [u8; url_len] | hash: [u8; 32] | quantity: u64 | decimals: u8 | dilutable: u8
/// ```
///
/// The wire cannot tell an absent description hash from an all-zero one, so
/// neither can this struct: 32 zero bytes means "no hash". See
/// [`AssetIssuance::hash`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetIssuance {
    /// Envelope version.
    pub version: u8,
    /// Where the asset's description document lives.
    pub description_url: String,
    /// Hash of the description document. All zeros when there is none.
    pub description_hash: [u8; DESCRIPTION_HASH_LENGTH],
    /// Units created at issuance (in the smallest unit).
    pub quantity: u64,
    /// Display precision of the asset.
    pub decimals: u8,
    /// Whether more units may be issued later.
    pub dilutable: bool,
}

impl AssetIssuance {
    /// Starts a two-phase construction. See [`AssetIssuanceBuilder`].
    pub fn builder() -> AssetIssuanceBuilder {
        AssetIssuanceBuilder::default()
    }

    /// The description hash, or `None` if it is all zeros.
    pub fn hash(&self) -> Option<&[u8; DESCRIPTION_HASH_LENGTH]> {
        if self.description_hash.iter().all(|b| *b == 0) {
            None
        } else {
            Some(&self.description_hash)
        }
    }
}

/// Checks a caller- or JSON-supplied hash against the fixed wire length.
fn hash_from_slice(hash: &[u8]) -> Result<[u8; DESCRIPTION_HASH_LENGTH]> {
    <[u8; DESCRIPTION_HASH_LENGTH]>::try_from(hash).map_err(|_| CodecError::LengthMismatch {
        field: "descriptionHash".into(),
        expected: DESCRIPTION_HASH_LENGTH,
        actual: hash.len(),
    })
}

impl Appendix for AssetIssuance {
    const NAME: &'static str = "AssetIssuance";

    fn version(&self) -> u8 {
        self.version
    }

    fn my_size(&self) -> usize {
        1 + self.description_url.len() + DESCRIPTION_HASH_LENGTH + 8 + 1 + 1
    }

    fn put_my_bytes<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        check_short_string("descriptionUrl", &self.description_url)?;

        buf.put_short_string("descriptionUrl", &self.description_url)?;
        buf.put_slice(&self.description_hash);
        buf.put_u64_le(self.quantity);
        buf.put_u8(self.decimals);
        buf.put_bool(self.dilutable);
        Ok(())
    }

    fn parse_body<B: Buf>(version: u8, buf: &mut B) -> Result<Self> {
        let description_url = buf.read_short_string("descriptionUrl")?;
        let description_hash: [u8; DESCRIPTION_HASH_LENGTH] = buf.read_array()?;
        let quantity = buf.read_u64()?;
        let decimals = buf.read_u8()?;
        let dilutable = buf.read_bool("dilutable")?;
        Ok(Self {
            version,
            description_url,
            description_hash,
            quantity,
            decimals,
            dilutable,
        })
    }

    fn put_my_json(&self, map: &mut JsonMap) {
        map.insert(
            "descriptionUrl".into(),
            self.description_url.clone().into(),
        );
        json::put_hex(map, "descriptionHash", &self.description_hash);
        json::put_unsigned(map, "quantity", self.quantity);
        map.insert("decimals".into(), self.decimals.into());
        map.insert("dilutable".into(), self.dilutable.into());
    }

    fn parse_json_body(version: u8, map: &JsonMap) -> Result<Self> {
        let description_url = json::get_str(map, "descriptionUrl")?.to_string();
        check_short_string("descriptionUrl", &description_url)?;
        let description_hash = match json::get_hex(map, "descriptionHash")? {
            None => [0u8; DESCRIPTION_HASH_LENGTH],
            Some(bytes) => hash_from_slice(&bytes)?,
        };
        Ok(Self {
            version,
            description_url,
            description_hash,
            quantity: json::get_unsigned(map, "quantity")?,
            decimals: json::get_u8(map, "decimals")?,
            dilutable: json::get_bool(map, "dilutable")?,
        })
    }
}

impl Attachment for AssetIssuance {
    const TRANSACTION_TYPE: TransactionType = TransactionType::AssetIssuance;

    fn validate(&self, policy: &ValidationPolicy) -> Result<()> {
        policy.check_description_url(&self.description_url)
    }
}

// ---------------------------------------------------------------------------
// AssetIssuanceBuilder
// ---------------------------------------------------------------------------

/// Builder for [`AssetIssuance`].
///
/// `description_url` and `quantity` are required; `build()` reports the
/// first one missing instead of inventing a default. Decimals default to 0,
/// dilutable to `false`, and the hash to absent.
#[derive(Debug, Clone, Default)]
pub struct AssetIssuanceBuilder {
    version: Option<u8>,
    description_url: Option<String>,
    description_hash: Option<Vec<u8>>,
    quantity: Option<u64>,
    decimals: u8,
    dilutable: bool,
}

impl AssetIssuanceBuilder {
    pub fn version(mut self, version: u8) -> Self {
        self.version = Some(version);
        self
    }

    pub fn description_url(mut self, url: impl Into<String>) -> Self {
        self.description_url = Some(url.into());
        self
    }

    pub fn description_hash(mut self, hash: impl Into<Vec<u8>>) -> Self {
        self.description_hash = Some(hash.into());
        self
    }

    pub fn quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn dilutable(mut self, dilutable: bool) -> Self {
        self.dilutable = dilutable;
        self
    }

    /// Finishes construction, checking every wire invariant up front.
    pub fn build(self) -> Result<AssetIssuance> {
        let description_url = self
            .description_url
            .ok_or_else(|| CodecError::missing("descriptionUrl"))?;
        let quantity = self.quantity.ok_or_else(|| CodecError::missing("quantity"))?;

        if description_url.len() > MAX_WIRE_STRING_LENGTH {
            return Err(CodecError::CapacityExceeded {
                field: "descriptionUrl".into(),
                len: description_url.len(),
                max: MAX_WIRE_STRING_LENGTH,
            });
        }

        let description_hash = match self.description_hash {
            None => [0u8; DESCRIPTION_HASH_LENGTH],
            Some(hash) => hash_from_slice(&hash)?,
        };

        let issuance = AssetIssuance {
            version: self.version.unwrap_or(DEFAULT_APPENDIX_VERSION),
            description_url,
            description_hash,
            quantity,
            decimals: self.decimals,
            dilutable: self.dilutable,
        };
        trace!(url = %issuance.description_url, quantity, "asset issuance built");
        Ok(issuance)
    }
}

// ---------------------------------------------------------------------------
// AssetFields (shared by AssetIssueMore and AssetTransfer)
// ---------------------------------------------------------------------------

/// Asset id and quantity, in that order. 16 bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetFields {
    /// Asset id (unsigned).
    pub asset: u64,
    /// Units of the asset (signed).
    pub quantity: i64,
}

impl AssetFields {
    pub fn new(asset: u64, quantity: i64) -> Self {
        Self { asset, quantity }
    }
}

impl FieldLayout for AssetFields {
    const SIZE: usize = 8 + 8;

    fn put<B: BufMut>(&self, buf: &mut B) {
        buf.put_u64_le(self.asset);
        buf.put_i64_le(self.quantity);
    }

    fn parse<B: Buf>(buf: &mut B) -> Result<Self> {
        Ok(Self {
            asset: buf.read_u64()?,
            quantity: buf.read_i64()?,
        })
    }

    fn put_json(&self, map: &mut JsonMap) {
        json::put_unsigned(map, "asset", self.asset);
        json::put_signed(map, "quantity", self.quantity);
    }

    fn parse_json(map: &JsonMap) -> Result<Self> {
        Ok(Self {
            asset: json::get_unsigned(map, "asset")?,
            quantity: json::get_signed(map, "quantity")?,
        })
    }
}

composite_attachment! {
    /// Mints more units of an existing dilutable asset.
    AssetIssueMore { fields: AssetFields } => TransactionType::AssetIssueMore
}

composite_attachment! {
    /// Moves units of an asset to the transaction's recipient.
    AssetTransfer { fields: AssetFields } => TransactionType::AssetTransfer
}
