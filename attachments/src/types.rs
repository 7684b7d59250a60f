//! Transaction-type tags.
//!
//! On the wire a transaction identifies its kind with two bytes: a `type`
//! (the family) and a `subtype` (the operation within the family). Each
//! attachment variant belongs to exactly one tag.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Type families
// ---------------------------------------------------------------------------

/// Plain value transfers.
pub const TYPE_PAYMENT: u8 = 0;
/// Arbitrary messages.
pub const TYPE_MESSAGING: u8 = 1;
/// Asset issuance, transfer, exchange orders, and whitelists.
pub const TYPE_COLORED_COINS: u8 = 2;
/// Account control (balance leasing).
pub const TYPE_ACCOUNT_CONTROL: u8 = 4;

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// Discriminant for the operation a transaction (and its attachment)
/// represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransactionType {
    /// Value transfer with no payload.
    OrdinaryPayment,
    /// Message-only transaction with no structured payload.
    ArbitraryMessage,
    /// Create a new asset.
    AssetIssuance,
    /// Move units of an asset to another account.
    AssetTransfer,
    /// Offer to sell an asset.
    AskOrderPlacement,
    /// Offer to buy an asset.
    BidOrderPlacement,
    /// Withdraw a sell offer.
    AskOrderCancellation,
    /// Withdraw a buy offer.
    BidOrderCancellation,
    /// Mint additional units of a dilutable asset.
    AssetIssueMore,
    /// Several asset transfers that settle together or not at all.
    AtomicMultiTransfer,
    /// Allow an account to hold a whitelisted asset.
    WhitelistAccountAddition,
    /// Revoke an account's permission to hold a whitelisted asset.
    WhitelistAccountRemoval,
    /// Open a currency/asset market for a whitelisted asset.
    WhitelistMarket,
    /// Lease forging balance to another account.
    EffectiveBalanceLeasing,
}

impl TransactionType {
    /// Every transaction type, in tag order.
    pub const ALL: [TransactionType; 14] = [
        Self::OrdinaryPayment,
        Self::ArbitraryMessage,
        Self::AssetIssuance,
        Self::AssetTransfer,
        Self::AskOrderPlacement,
        Self::BidOrderPlacement,
        Self::AskOrderCancellation,
        Self::BidOrderCancellation,
        Self::AssetIssueMore,
        Self::AtomicMultiTransfer,
        Self::WhitelistAccountAddition,
        Self::WhitelistAccountRemoval,
        Self::WhitelistMarket,
        Self::EffectiveBalanceLeasing,
    ];

    /// The family byte.
    pub fn type_code(&self) -> u8 {
        match self {
            Self::OrdinaryPayment => TYPE_PAYMENT,
            Self::ArbitraryMessage => TYPE_MESSAGING,
            Self::EffectiveBalanceLeasing => TYPE_ACCOUNT_CONTROL,
            _ => TYPE_COLORED_COINS,
        }
    }

    /// The operation byte within the family.
    pub fn subtype_code(&self) -> u8 {
        match self {
            Self::OrdinaryPayment
            | Self::ArbitraryMessage
            | Self::AssetIssuance
            | Self::EffectiveBalanceLeasing => 0,
            Self::AssetTransfer => 1,
            Self::AskOrderPlacement => 2,
            Self::BidOrderPlacement => 3,
            Self::AskOrderCancellation => 4,
            Self::BidOrderCancellation => 5,
            Self::AssetIssueMore => 6,
            Self::AtomicMultiTransfer => 7,
            Self::WhitelistAccountAddition => 8,
            Self::WhitelistAccountRemoval => 9,
            Self::WhitelistMarket => 10,
        }
    }

    /// Looks up a type from its wire tag. Returns `None` for unknown tags --
    /// we don't guess.
    pub fn from_codes(type_code: u8, subtype_code: u8) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.type_code() == type_code && t.subtype_code() == subtype_code)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OrdinaryPayment => "OrdinaryPayment",
            Self::ArbitraryMessage => "ArbitraryMessage",
            Self::AssetIssuance => "AssetIssuance",
            Self::AssetTransfer => "AssetTransfer",
            Self::AskOrderPlacement => "AskOrderPlacement",
            Self::BidOrderPlacement => "BidOrderPlacement",
            Self::AskOrderCancellation => "AskOrderCancellation",
            Self::BidOrderCancellation => "BidOrderCancellation",
            Self::AssetIssueMore => "AssetIssueMore",
            Self::AtomicMultiTransfer => "AtomicMultiTransfer",
            Self::WhitelistAccountAddition => "WhitelistAccountAddition",
            Self::WhitelistAccountRemoval => "WhitelistAccountRemoval",
            Self::WhitelistMarket => "WhitelistMarket",
            Self::EffectiveBalanceLeasing => "EffectiveBalanceLeasing",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tags_are_unique() {
        let tags: HashSet<(u8, u8)> = TransactionType::ALL
            .iter()
            .map(|t| (t.type_code(), t.subtype_code()))
            .collect();
        assert_eq!(tags.len(), TransactionType::ALL.len());
    }

    #[test]
    fn from_codes_inverts_tags() {
        for t in TransactionType::ALL {
            assert_eq!(
                TransactionType::from_codes(t.type_code(), t.subtype_code()),
                Some(t)
            );
        }
        assert_eq!(TransactionType::from_codes(2, 200), None);
        assert_eq!(TransactionType::from_codes(9, 0), None);
    }

    #[test]
    fn known_tags() {
        assert_eq!(TransactionType::from_codes(0, 0), Some(TransactionType::OrdinaryPayment));
        assert_eq!(TransactionType::from_codes(2, 1), Some(TransactionType::AssetTransfer));
        assert_eq!(
            TransactionType::from_codes(4, 0),
            Some(TransactionType::EffectiveBalanceLeasing)
        );
    }

    #[test]
    fn transaction_type_display() {
        assert_eq!(TransactionType::AssetIssuance.to_string(), "AssetIssuance");
        assert_eq!(TransactionType::WhitelistMarket.to_string(), "WhitelistMarket");
    }

    #[test]
    fn transaction_type_serde_roundtrip() {
        for t in TransactionType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            let recovered: TransactionType = serde_json::from_str(&json).unwrap();
            assert_eq!(t, recovered);
        }
    }
}
