//! Atomic multi-transfer: several asset transfers that settle together.
//!
//! # Wire layout
//!
//! ```text
//! count: u8 | count × (recipient: u64 | asset: u64 | quantity: i64)
//! ```

use bytes::{Buf, BufMut};
use serde_json::Value;

use super::Attachment;
use crate::appendix::Appendix;
use crate::config::{DEFAULT_APPENDIX_VERSION, MAX_TRANSFERS, TRANSFER_RECORD_SIZE};
use crate::error::{CodecError, Result};
use crate::io::ReadExt;
use crate::json::{self, JsonMap};
use crate::types::TransactionType;

/// One leg of a multi-transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    /// Receiving account id (unsigned).
    pub recipient: u64,
    /// Asset id (unsigned).
    pub asset: u64,
    /// Units moved (signed).
    pub quantity: i64,
}

impl Transfer {
    pub fn new(recipient: u64, asset: u64, quantity: i64) -> Self {
        Self {
            recipient,
            asset,
            quantity,
        }
    }

    fn to_json(self) -> Value {
        let mut map = JsonMap::new();
        json::put_unsigned(&mut map, "recipient", self.recipient);
        json::put_unsigned(&mut map, "asset", self.asset);
        json::put_signed(&mut map, "quantity", self.quantity);
        Value::Object(map)
    }

    fn from_json(map: &JsonMap) -> Result<Self> {
        Ok(Self {
            recipient: json::get_unsigned(map, "recipient")?,
            asset: json::get_unsigned(map, "asset")?,
            quantity: json::get_signed(map, "quantity")?,
        })
    }
}

/// Up to 255 transfers in one attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicMultiTransfer {
    /// Envelope version.
    pub version: u8,
    /// Transfers, in execution order.
    pub transfers: Vec<Transfer>,
}

impl AtomicMultiTransfer {
    pub fn new(transfers: Vec<Transfer>) -> Self {
        Self {
            version: DEFAULT_APPENDIX_VERSION,
            transfers,
        }
    }

    fn check_count(count: usize) -> Result<()> {
        if count > MAX_TRANSFERS {
            return Err(CodecError::CapacityExceeded {
                field: "transfers".into(),
                len: count,
                max: MAX_TRANSFERS,
            });
        }
        Ok(())
    }
}

impl Appendix for AtomicMultiTransfer {
    const NAME: &'static str = "AtomicMultiTransfer";

    fn version(&self) -> u8 {
        self.version
    }

    fn my_size(&self) -> usize {
        1 + TRANSFER_RECORD_SIZE * self.transfers.len()
    }

    fn put_my_bytes<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        Self::check_count(self.transfers.len())?;
        buf.put_u8(self.transfers.len() as u8);
        for t in &self.transfers {
            buf.put_u64_le(t.recipient);
            buf.put_u64_le(t.asset);
            buf.put_i64_le(t.quantity);
        }
        Ok(())
    }

    fn parse_body<B: Buf>(version: u8, buf: &mut B) -> Result<Self> {
        let count = buf.read_u8()? as usize;
        // Check the whole table up front so a lying count fails before we allocate.
        buf.ensure_remaining(count * TRANSFER_RECORD_SIZE)?;
        let mut transfers = Vec::with_capacity(count);
        for _ in 0..count {
            transfers.push(Transfer {
                recipient: buf.read_u64()?,
                asset: buf.read_u64()?,
                quantity: buf.read_i64()?,
            });
        }
        Ok(Self { version, transfers })
    }

    fn put_my_json(&self, map: &mut JsonMap) {
        let transfers = self.transfers.iter().map(|t| t.to_json()).collect();
        map.insert("transfers".into(), Value::Array(transfers));
    }

    fn parse_json_body(version: u8, map: &JsonMap) -> Result<Self> {
        let entries = json::get_array(map, "transfers")?;
        Self::check_count(entries.len())?;
        let transfers = entries
            .iter()
            .map(|entry| Transfer::from_json(json::as_object(entry, "transfers")?))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { version, transfers })
    }
}

impl Attachment for AtomicMultiTransfer {
    const TRANSACTION_TYPE: TransactionType = TransactionType::AtomicMultiTransfer;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appendix::{from_bytes, from_json, put_bytes, size, to_bytes, to_json};
    use serde_json::json;

    fn transfers(n: usize) -> Vec<Transfer> {
        (0..n)
            .map(|i| Transfer::new(u64::MAX - i as u64, i as u64, i as i64 - 100))
            .collect()
    }

    #[test]
    fn empty_list_is_two_bytes() {
        let multi = AtomicMultiTransfer::new(vec![]);
        let bytes = to_bytes(&multi).unwrap();
        assert_eq!(bytes, vec![0, 0]);
        assert_eq!(from_bytes::<AtomicMultiTransfer>(&bytes).unwrap(), multi);
        assert_eq!(from_json::<AtomicMultiTransfer>(&to_json(&multi)).unwrap(), multi);
    }

    #[test]
    fn full_list_roundtrips() {
        let multi = AtomicMultiTransfer::new(transfers(255));
        let bytes = to_bytes(&multi).unwrap();
        assert_eq!(bytes.len(), size(&multi));
        assert_eq!(bytes.len(), 1 + 1 + 24 * 255);
        assert_eq!(bytes[1], 255);
        assert_eq!(from_bytes::<AtomicMultiTransfer>(&bytes).unwrap(), multi);
        assert_eq!(from_json::<AtomicMultiTransfer>(&to_json(&multi)).unwrap(), multi);
    }

    #[test]
    fn too_many_transfers_is_rejected() {
        let multi = AtomicMultiTransfer::new(transfers(256));
        let mut out = Vec::new();
        assert!(matches!(
            put_bytes(&multi, &mut out),
            Err(CodecError::CapacityExceeded { len: 256, max: 255, .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn count_beyond_remaining_bytes_is_an_underrun() {
        // Claims three transfers but carries one.
        let mut bytes = vec![0, 3];
        bytes.extend_from_slice(&[0u8; 24]);
        assert_eq!(
            from_bytes::<AtomicMultiTransfer>(&bytes),
            Err(CodecError::UnexpectedEof {
                needed: 72,
                remaining: 24
            })
        );
    }

    #[test]
    fn json_shape() {
        let multi = AtomicMultiTransfer::new(vec![Transfer::new(u64::MAX, 1, -5)]);
        let map = to_json(&multi);
        assert_eq!(
            map["transfers"],
            json!([{ "recipient": "18446744073709551615", "asset": "1", "quantity": "-5" }])
        );
    }

    #[test]
    fn json_entry_must_be_object() {
        let map = json!({ "transfers": [1, 2] }).as_object().cloned().unwrap();
        assert!(matches!(
            from_json::<AtomicMultiTransfer>(&map),
            Err(CodecError::InvalidField { .. })
        ));
    }

    #[test]
    fn json_missing_leg_field() {
        let map = json!({ "transfers": [{ "recipient": "1", "asset": "2" }] })
            .as_object()
            .cloned()
            .unwrap();
        assert_eq!(
            from_json::<AtomicMultiTransfer>(&map),
            Err(CodecError::missing("quantity"))
        );
    }
}
