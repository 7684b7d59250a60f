//! # Attachment Variants
//!
//! An attachment is an [`Appendix`] that belongs to a specific transaction
//! type and carries a fee. This module holds the 14 concrete shapes and the
//! [`AnyAttachment`] enum that dispatches between them by transaction type.
//!
//! ```text
//! empty.rs            OrdinaryPayment, ArbitraryMessage (no body, no version byte)
//! asset.rs            AssetIssuance, AssetIssueMore, AssetTransfer
//! multi_transfer.rs   AtomicMultiTransfer
//! order.rs            Ask/Bid order placement and cancellation
//! whitelist.rs        Whitelist account addition/removal, whitelist market
//! leasing.rs          EffectiveBalanceLeasing
//! ```
//!
//! Variants that share a field layout (asset operations, order placement,
//! order cancellation) embed the shared struct by value and delegate to its
//! [`FieldLayout`] impl. The layout is written once; the wrappers only add a
//! version and a transaction type.

use bytes::{Buf, BufMut};
use rust_decimal::Decimal;
use tracing::debug;

use crate::appendix::{self, Appendix};
use crate::config::ValidationPolicy;
use crate::error::Result;
use crate::fee::{FeeTable, StandardFees};
use crate::json::JsonMap;
use crate::types::TransactionType;

/// An appendix tied to a transaction type and a fee.
pub trait Attachment: Appendix {
    /// The transaction type this attachment is carried by.
    const TRANSACTION_TYPE: TransactionType;

    fn transaction_type(&self) -> TransactionType {
        Self::TRANSACTION_TYPE
    }

    /// Fee from the network's standard table.
    fn fee(&self) -> Decimal {
        self.fee_in(&StandardFees)
    }

    /// Fee from a caller-supplied table.
    fn fee_in(&self, table: &dyn FeeTable) -> Decimal {
        table.fee(self.transaction_type())
    }

    /// Applies optional semantic limits beyond the wire format.
    fn validate(&self, _policy: &ValidationPolicy) -> Result<()> {
        Ok(())
    }
}

/// A fixed-size field group shared by several attachment variants.
pub trait FieldLayout: Sized {
    /// Exact wire size of the group.
    const SIZE: usize;

    fn put<B: BufMut>(&self, buf: &mut B);

    fn parse<B: Buf>(buf: &mut B) -> Result<Self>;

    fn put_json(&self, map: &mut JsonMap);

    fn parse_json(map: &JsonMap) -> Result<Self>;
}

/// Declares a versioned attachment that is nothing but a shared
/// [`FieldLayout`] plus a transaction type.
macro_rules! composite_attachment {
    (
        $(#[$meta:meta])*
        $name:ident { $field:ident: $layout:ty } => $tx_type:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            /// Envelope version.
            pub version: u8,
            #[allow(missing_docs)]
            pub $field: $layout,
        }

        impl $name {
            /// Wraps the fields at the default version.
            pub fn new($field: $layout) -> Self {
                Self {
                    version: $crate::config::DEFAULT_APPENDIX_VERSION,
                    $field,
                }
            }
        }

        impl $crate::appendix::Appendix for $name {
            const NAME: &'static str = stringify!($name);

            fn version(&self) -> u8 {
                self.version
            }

            fn my_size(&self) -> usize {
                <$layout as $crate::attachment::FieldLayout>::SIZE
            }

            fn put_my_bytes<B: ::bytes::BufMut>(&self, buf: &mut B) -> $crate::error::Result<()> {
                $crate::attachment::FieldLayout::put(&self.$field, buf);
                Ok(())
            }

            fn parse_body<B: ::bytes::Buf>(version: u8, buf: &mut B) -> $crate::error::Result<Self> {
                Ok(Self {
                    version,
                    $field: <$layout as $crate::attachment::FieldLayout>::parse(buf)?,
                })
            }

            fn put_my_json(&self, map: &mut $crate::json::JsonMap) {
                $crate::attachment::FieldLayout::put_json(&self.$field, map);
            }

            fn parse_json_body(version: u8, map: &$crate::json::JsonMap) -> $crate::error::Result<Self> {
                Ok(Self {
                    version,
                    $field: <$layout as $crate::attachment::FieldLayout>::parse_json(map)?,
                })
            }
        }

        impl $crate::attachment::Attachment for $name {
            const TRANSACTION_TYPE: $crate::types::TransactionType = $tx_type;
        }
    };
}

pub mod asset;
pub mod empty;
pub mod leasing;
pub mod multi_transfer;
pub mod order;
pub mod whitelist;

pub use asset::{AssetFields, AssetIssuance, AssetIssuanceBuilder, AssetIssueMore, AssetTransfer};
pub use empty::{ArbitraryMessage, OrdinaryPayment};
pub use leasing::EffectiveBalanceLeasing;
pub use multi_transfer::{AtomicMultiTransfer, Transfer};
pub use order::{
    AskOrderCancellation, AskOrderPlacement, BidOrderCancellation, BidOrderPlacement,
    OrderCancellation, OrderPlacement,
};
pub use whitelist::{WhitelistAccountAddition, WhitelistAccountRemoval, WhitelistMarket};

// ---------------------------------------------------------------------------
// AnyAttachment
// ---------------------------------------------------------------------------

macro_rules! any_attachment {
    ($($variant:ident),* $(,)?) => {
        /// Any attachment, selected by transaction type.
        ///
        /// This is the decoding half of the transaction-type registry: given a
        /// tag and a cursor (or JSON object) it produces the right variant.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum AnyAttachment {
            $(
                #[allow(missing_docs)]
                $variant($variant),
            )*
        }

        impl AnyAttachment {
            /// The transaction type of the wrapped variant.
            pub fn transaction_type(&self) -> TransactionType {
                match self {
                    $(Self::$variant(a) => a.transaction_type(),)*
                }
            }

            /// The wrapped variant's appendix name.
            pub fn appendix_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(a) => a.appendix_name(),)*
                }
            }

            pub fn version(&self) -> u8 {
                match self {
                    $(Self::$variant(a) => a.version(),)*
                }
            }

            /// Total framed size in bytes.
            pub fn size(&self) -> usize {
                match self {
                    $(Self::$variant(a) => appendix::size(a),)*
                }
            }

            /// Writes the framed attachment. Nothing is written on error.
            pub fn put_bytes<B: BufMut>(&self, buf: &mut B) -> Result<()> {
                match self {
                    $(Self::$variant(a) => appendix::put_bytes(a, buf),)*
                }
            }

            pub fn to_bytes(&self) -> Result<Vec<u8>> {
                match self {
                    $(Self::$variant(a) => appendix::to_bytes(a),)*
                }
            }

            /// Writes the attachment's keys into an existing JSON object.
            pub fn put_json(&self, map: &mut JsonMap) {
                match self {
                    $(Self::$variant(a) => appendix::put_json(a, map),)*
                }
            }

            pub fn to_json(&self) -> JsonMap {
                match self {
                    $(Self::$variant(a) => appendix::to_json(a),)*
                }
            }

            pub fn fee(&self) -> Decimal {
                match self {
                    $(Self::$variant(a) => a.fee(),)*
                }
            }

            pub fn fee_in(&self, table: &dyn FeeTable) -> Decimal {
                match self {
                    $(Self::$variant(a) => a.fee_in(table),)*
                }
            }

            pub fn validate(&self, policy: &ValidationPolicy) -> Result<()> {
                match self {
                    $(Self::$variant(a) => a.validate(policy),)*
                }
            }

            fn parse_as<B: Buf>(tx_type: TransactionType, buf: &mut B) -> Result<Self> {
                match tx_type {
                    $(TransactionType::$variant => appendix::parse::<$variant, B>(buf).map(Self::$variant),)*
                }
            }

            fn from_json_as(tx_type: TransactionType, map: &JsonMap) -> Result<Self> {
                match tx_type {
                    $(TransactionType::$variant => appendix::from_json::<$variant>(map).map(Self::$variant),)*
                }
            }
        }

        $(
            impl From<$variant> for AnyAttachment {
                fn from(attachment: $variant) -> Self {
                    Self::$variant(attachment)
                }
            }
        )*
    };
}

any_attachment!(
    OrdinaryPayment,
    ArbitraryMessage,
    AssetIssuance,
    AssetTransfer,
    AskOrderPlacement,
    BidOrderPlacement,
    AskOrderCancellation,
    BidOrderCancellation,
    AssetIssueMore,
    AtomicMultiTransfer,
    WhitelistAccountAddition,
    WhitelistAccountRemoval,
    WhitelistMarket,
    EffectiveBalanceLeasing,
);

impl AnyAttachment {
    /// Decodes the attachment for `tx_type` from the cursor, leaving any
    /// trailing bytes in place.
    pub fn parse<B: Buf>(tx_type: TransactionType, buf: &mut B) -> Result<Self> {
        Self::parse_as(tx_type, buf).map_err(|e| {
            debug!(tx_type = %tx_type, error = %e, "attachment decode failed");
            e
        })
    }

    /// Decodes a standalone attachment, rejecting trailing bytes.
    pub fn from_bytes(tx_type: TransactionType, mut bytes: &[u8]) -> Result<Self> {
        let attachment = Self::parse(tx_type, &mut bytes)?;
        if !bytes.is_empty() {
            debug!(tx_type = %tx_type, trailing = bytes.len(), "attachment has trailing bytes");
            return Err(crate::error::CodecError::TrailingBytes { count: bytes.len() });
        }
        Ok(attachment)
    }

    /// Decodes the attachment for `tx_type` from its JSON object form.
    pub fn from_json(tx_type: TransactionType, map: &JsonMap) -> Result<Self> {
        Self::from_json_as(tx_type, map).map_err(|e| {
            debug!(tx_type = %tx_type, error = %e, "attachment JSON decode failed");
            e
        })
    }

    /// Decodes by wire tag. Unknown tags are rejected.
    pub fn parse_tagged<B: Buf>(type_code: u8, subtype_code: u8, buf: &mut B) -> Result<Self> {
        let tx_type = TransactionType::from_codes(type_code, subtype_code).ok_or_else(|| {
            crate::error::CodecError::invalid(
                "type",
                format!("unknown transaction type {}/{}", type_code, subtype_code),
            )
        })?;
        Self::parse(tx_type, buf)
    }
}
