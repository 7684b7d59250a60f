//! Exchange order attachments.
//!
//! Asks and bids share their layouts: [`OrderPlacement`] for placing an
//! order and [`OrderCancellation`] for withdrawing one. The side of the book
//! is carried by the transaction type, not by the payload.

use bytes::{Buf, BufMut};

use super::FieldLayout;
use crate::error::Result;
use crate::io::ReadExt;
use crate::json::{self, JsonMap};
use crate::types::TransactionType;

// ---------------------------------------------------------------------------
// OrderPlacement
// ---------------------------------------------------------------------------

/// Order terms. 36 bytes on the wire:
///
/// ```text
/// currency: u64 | asset: u64 | quantity: i64 | price: i64 | expiration: u32
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderPlacement {
    /// Currency id the asset is priced in (unsigned).
    pub currency: u64,
    /// Asset id being traded (unsigned).
    pub asset: u64,
    /// Units of the asset.
    pub quantity: i64,
    /// Price per unit, in currency units.
    pub price: i64,
    /// Height after which the order lapses.
    pub expiration: u32,
}

impl OrderPlacement {
    pub fn new(currency: u64, asset: u64, quantity: i64, price: i64, expiration: u32) -> Self {
        Self {
            currency,
            asset,
            quantity,
            price,
            expiration,
        }
    }
}

impl FieldLayout for OrderPlacement {
    const SIZE: usize = 8 + 8 + 8 + 8 + 4;

    fn put<B: BufMut>(&self, buf: &mut B) {
        buf.put_u64_le(self.currency);
        buf.put_u64_le(self.asset);
        buf.put_i64_le(self.quantity);
        buf.put_i64_le(self.price);
        buf.put_u32_le(self.expiration);
    }

    fn parse<B: Buf>(buf: &mut B) -> Result<Self> {
        Ok(Self {
            currency: buf.read_u64()?,
            asset: buf.read_u64()?,
            quantity: buf.read_i64()?,
            price: buf.read_i64()?,
            expiration: buf.read_u32()?,
        })
    }

    fn put_json(&self, map: &mut JsonMap) {
        json::put_unsigned(map, "currency", self.currency);
        json::put_unsigned(map, "asset", self.asset);
        json::put_signed(map, "quantity", self.quantity);
        json::put_signed(map, "price", self.price);
        map.insert("expiration".into(), self.expiration.into());
    }

    fn parse_json(map: &JsonMap) -> Result<Self> {
        Ok(Self {
            currency: json::get_unsigned(map, "currency")?,
            asset: json::get_unsigned(map, "asset")?,
            quantity: json::get_signed(map, "quantity")?,
            price: json::get_signed(map, "price")?,
            expiration: json::get_u32(map, "expiration")?,
        })
    }
}

// ---------------------------------------------------------------------------
// OrderCancellation
// ---------------------------------------------------------------------------

/// The order being withdrawn. 8 bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderCancellation {
    /// Id of the order (unsigned).
    pub order: u64,
}

impl OrderCancellation {
    pub fn new(order: u64) -> Self {
        Self { order }
    }
}

impl FieldLayout for OrderCancellation {
    const SIZE: usize = 8;

    fn put<B: BufMut>(&self, buf: &mut B) {
        buf.put_u64_le(self.order);
    }

    fn parse<B: Buf>(buf: &mut B) -> Result<Self> {
        Ok(Self {
            order: buf.read_u64()?,
        })
    }

    fn put_json(&self, map: &mut JsonMap) {
        json::put_unsigned(map, "order", self.order);
    }

    fn parse_json(map: &JsonMap) -> Result<Self> {
        Ok(Self {
            order: json::get_unsigned(map, "order")?,
        })
    }
}

composite_attachment! {
    /// Offer to sell `quantity` of `asset` at `price`.
    AskOrderPlacement { order: OrderPlacement } => TransactionType::AskOrderPlacement
}

composite_attachment! {
    /// Offer to buy `quantity` of `asset` at `price`.
    BidOrderPlacement { order: OrderPlacement } => TransactionType::BidOrderPlacement
}

composite_attachment! {
    /// Withdraws a resting ask.
    AskOrderCancellation { cancellation: OrderCancellation } => TransactionType::AskOrderCancellation
}

composite_attachment! {
    /// Withdraws a resting bid.
    BidOrderCancellation { cancellation: OrderCancellation } => TransactionType::BidOrderCancellation
}
