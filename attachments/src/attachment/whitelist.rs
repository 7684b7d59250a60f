//! Whitelist attachments for permissioned assets.
//!
//! A whitelisted asset can only be held by accounts its issuer has added,
//! and only traded on markets its issuer has opened.

use bytes::{Buf, BufMut};

use super::Attachment;
use crate::appendix::Appendix;
use crate::config::DEFAULT_APPENDIX_VERSION;
use crate::error::Result;
use crate::io::ReadExt;
use crate::json::{self, JsonMap};
use crate::types::TransactionType;

// ---------------------------------------------------------------------------
// WhitelistAccountAddition
// ---------------------------------------------------------------------------

/// Lets `account` hold `asset` until `end_height`.
///
/// ```text
/// asset: u64 | account: u64 | end_height: u32
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistAccountAddition {
    /// Envelope version.
    pub version: u8,
    /// Whitelisted asset id (unsigned).
    pub asset: u64,
    /// Account being admitted (unsigned).
    pub account: u64,
    /// Height at which the permission lapses.
    pub end_height: u32,
}

impl WhitelistAccountAddition {
    pub fn new(asset: u64, account: u64, end_height: u32) -> Self {
        Self {
            version: DEFAULT_APPENDIX_VERSION,
            asset,
            account,
            end_height,
        }
    }
}

impl Appendix for WhitelistAccountAddition {
    const NAME: &'static str = "WhitelistAccountAddition";

    fn version(&self) -> u8 {
        self.version
    }

    fn my_size(&self) -> usize {
        8 + 8 + 4
    }

    fn put_my_bytes<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        buf.put_u64_le(self.asset);
        buf.put_u64_le(self.account);
        buf.put_u32_le(self.end_height);
        Ok(())
    }

    fn parse_body<B: Buf>(version: u8, buf: &mut B) -> Result<Self> {
        Ok(Self {
            version,
            asset: buf.read_u64()?,
            account: buf.read_u64()?,
            end_height: buf.read_u32()?,
        })
    }

    fn put_my_json(&self, map: &mut JsonMap) {
        json::put_unsigned(map, "asset", self.asset);
        json::put_unsigned(map, "account", self.account);
        map.insert("endHeight".into(), self.end_height.into());
    }

    fn parse_json_body(version: u8, map: &JsonMap) -> Result<Self> {
        Ok(Self {
            version,
            asset: json::get_unsigned(map, "asset")?,
            account: json::get_unsigned(map, "account")?,
            end_height: json::get_u32(map, "endHeight")?,
        })
    }
}

impl Attachment for WhitelistAccountAddition {
    const TRANSACTION_TYPE: TransactionType = TransactionType::WhitelistAccountAddition;
}

// ---------------------------------------------------------------------------
// WhitelistAccountRemoval
// ---------------------------------------------------------------------------

/// Revokes `account`'s permission to hold `asset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistAccountRemoval {
    /// Envelope version.
    pub version: u8,
    pub asset: u64,
    pub account: u64,
}

impl WhitelistAccountRemoval {
    pub fn new(asset: u64, account: u64) -> Self {
        Self {
            version: DEFAULT_APPENDIX_VERSION,
            asset,
            account,
        }
    }
}

impl Appendix for WhitelistAccountRemoval {
    const NAME: &'static str = "WhitelistAccountRemoval";

    fn version(&self) -> u8 {
        self.version
    }

    fn my_size(&self) -> usize {
        8 + 8
    }

    fn put_my_bytes<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        buf.put_u64_le(self.asset);
        buf.put_u64_le(self.account);
        Ok(())
    }

    fn parse_body<B: Buf>(version: u8, buf: &mut B) -> Result<Self> {
        Ok(Self {
            version,
            asset: buf.read_u64()?,
            account: buf.read_u64()?,
        })
    }

    fn put_my_json(&self, map: &mut JsonMap) {
        json::put_unsigned(map, "asset", self.asset);
        json::put_unsigned(map, "account", self.account);
    }

    fn parse_json_body(version: u8, map: &JsonMap) -> Result<Self> {
        Ok(Self {
            version,
            asset: json::get_unsigned(map, "asset")?,
            account: json::get_unsigned(map, "account")?,
        })
    }
}

impl Attachment for WhitelistAccountRemoval {
    const TRANSACTION_TYPE: TransactionType = TransactionType::WhitelistAccountRemoval;
}

// ---------------------------------------------------------------------------
// WhitelistMarket
// ---------------------------------------------------------------------------

/// Opens the `currency`/`asset` market for a whitelisted asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistMarket {
    /// Envelope version.
    pub version: u8,
    pub currency: u64,
    pub asset: u64,
}

impl WhitelistMarket {
    pub fn new(currency: u64, asset: u64) -> Self {
        Self {
            version: DEFAULT_APPENDIX_VERSION,
            currency,
            asset,
        }
    }
}

impl Appendix for WhitelistMarket {
    const NAME: &'static str = "WhitelistMarket";

    fn version(&self) -> u8 {
        self.version
    }

    fn my_size(&self) -> usize {
        8 + 8
    }

    fn put_my_bytes<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        buf.put_u64_le(self.currency);
        buf.put_u64_le(self.asset);
        Ok(())
    }

    fn parse_body<B: Buf>(version: u8, buf: &mut B) -> Result<Self> {
        Ok(Self {
            version,
            currency: buf.read_u64()?,
            asset: buf.read_u64()?,
        })
    }

    fn put_my_json(&self, map: &mut JsonMap) {
        json::put_unsigned(map, "currency", self.currency);
        json::put_unsigned(map, "asset", self.asset);
    }

    fn parse_json_body(version: u8, map: &JsonMap) -> Result<Self> {
        Ok(Self {
            version,
            currency: json::get_unsigned(map, "currency")?,
            asset: json::get_unsigned(map, "asset")?,
        })
    }
}

impl Attachment for WhitelistMarket {
    const TRANSACTION_TYPE: TransactionType = TransactionType::WhitelistMarket;
}
