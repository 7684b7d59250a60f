//! Effective balance leasing.

use bytes::{Buf, BufMut};

use super::Attachment;
use crate::appendix::Appendix;
use crate::config::DEFAULT_APPENDIX_VERSION;
use crate::error::Result;
use crate::io::ReadExt;
use crate::json::{self, JsonMap};
use crate::types::TransactionType;

/// Leases the sender's forging balance to the recipient for `period` blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveBalanceLeasing {
    /// Envelope version.
    pub version: u8,
    /// Lease length in blocks.
    pub period: u32,
}

impl EffectiveBalanceLeasing {
    pub fn new(period: u32) -> Self {
        Self {
            version: DEFAULT_APPENDIX_VERSION,
            period,
        }
    }
}

impl Appendix for EffectiveBalanceLeasing {
    const NAME: &'static str = "EffectiveBalanceLeasing";

    fn version(&self) -> u8 {
        self.version
    }

    fn my_size(&self) -> usize {
        4
    }

    fn put_my_bytes<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        buf.put_u32_le(self.period);
        Ok(())
    }

    fn parse_body<B: Buf>(version: u8, buf: &mut B) -> Result<Self> {
        Ok(Self {
            version,
            period: buf.read_u32()?,
        })
    }

    fn put_my_json(&self, map: &mut JsonMap) {
        map.insert("period".into(), self.period.into());
    }

    fn parse_json_body(version: u8, map: &JsonMap) -> Result<Self> {
        Ok(Self {
            version,
            period: json::get_u32(map, "period")?,
        })
    }
}

impl Attachment for EffectiveBalanceLeasing {
    const TRANSACTION_TYPE: TransactionType = TransactionType::EffectiveBalanceLeasing;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appendix::{from_bytes, from_json, to_bytes, to_json};
    use serde_json::json;

    #[test]
    fn leasing_roundtrip() {
        let lease = EffectiveBalanceLeasing::new(u32::MAX);
        let bytes = to_bytes(&lease).unwrap();
        assert_eq!(bytes, vec![0, 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(from_bytes::<EffectiveBalanceLeasing>(&bytes).unwrap(), lease);

        let map = to_json(&lease);
        assert_eq!(map["period"], json!(4294967295u64));
        assert_eq!(map["version.EffectiveBalanceLeasing"], json!(0));
        assert_eq!(from_json::<EffectiveBalanceLeasing>(&map).unwrap(), lease);
    }

    #[test]
    fn period_must_be_a_number() {
        let map = json!({ "period": "1440" }).as_object().cloned().unwrap();
        assert!(from_json::<EffectiveBalanceLeasing>(&map).is_err());
    }
}
