//! Fee lookup by transaction type.
//!
//! Fees are not stored in attachments. They are looked up on demand from a
//! read-only table keyed by [`TransactionType`]. Amounts are decimal whole
//! coins; [`fee_to_base_units`] converts to the integer base units that go
//! into a transaction.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::FEE_DECIMALS;
use crate::error::{CodecError, Result};
use crate::types::TransactionType;

/// A read-only fee source.
///
/// Implementations must be safe to share across threads; the codec only
/// ever reads from them.
pub trait FeeTable: Send + Sync {
    /// Returns the fee, in whole coins, for a transaction of the given type.
    fn fee(&self, tx_type: TransactionType) -> Decimal;
}

// ---------------------------------------------------------------------------
// StandardFees
// ---------------------------------------------------------------------------

/// The network's built-in fee table.
///
/// Issuing an asset costs 1000 coins to keep the asset namespace from being
/// squatted. Everything else costs one coin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardFees;

/// Fee for creating a new asset, in whole coins.
pub const ASSET_ISSUANCE_FEE: i64 = 1_000;

/// Fee for every other transaction type, in whole coins.
pub const BASE_FEE: i64 = 1;

impl FeeTable for StandardFees {
    fn fee(&self, tx_type: TransactionType) -> Decimal {
        match tx_type {
            TransactionType::AssetIssuance => Decimal::from(ASSET_ISSUANCE_FEE),
            _ => Decimal::from(BASE_FEE),
        }
    }
}

// ---------------------------------------------------------------------------
// FeeSchedule
// ---------------------------------------------------------------------------

/// A configurable fee table: a default plus per-type overrides.
///
/// Loaded from JSON by nodes that run with non-standard fees (devnets,
/// test fixtures).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSchedule {
    /// Fee for any type without an override.
    pub default: Decimal,
    /// Per-type fees.
    #[serde(default)]
    pub overrides: BTreeMap<TransactionType, Decimal>,
}

impl FeeSchedule {
    /// Snapshots [`StandardFees`] into an editable schedule.
    pub fn standard() -> Self {
        let overrides = TransactionType::ALL
            .iter()
            .filter(|t| StandardFees.fee(**t) != Decimal::from(BASE_FEE))
            .map(|t| (*t, StandardFees.fee(*t)))
            .collect();
        Self {
            default: Decimal::from(BASE_FEE),
            overrides,
        }
    }

    /// Parses a schedule from JSON, e.g.
    /// `{"default":"0.1","overrides":{"AssetIssuance":"10"}}`.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| CodecError::invalid("feeSchedule", e.to_string()))
    }
}

impl FeeTable for FeeSchedule {
    fn fee(&self, tx_type: TransactionType) -> Decimal {
        self.overrides.get(&tx_type).copied().unwrap_or(self.default)
    }
}

/// Converts a whole-coin fee into integer base units (10^-8 coin).
///
/// Fails if the fee has more precision than the base unit or does not fit
/// in an `i64`.
pub fn fee_to_base_units(fee: Decimal) -> Result<i64> {
    let scale = Decimal::from(10i64.pow(FEE_DECIMALS));
    let scaled = fee
        .checked_mul(scale)
        .ok_or_else(|| CodecError::FeeOverflow(fee.to_string()))?;
    if !scaled.fract().is_zero() {
        return Err(CodecError::FeeOverflow(fee.to_string()));
    }
    scaled
        .to_i64()
        .ok_or_else(|| CodecError::FeeOverflow(fee.to_string()))
}
