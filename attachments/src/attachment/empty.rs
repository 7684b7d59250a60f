//! Marker attachments with no body.
//!
//! Payments and messages carry everything they need in the transaction
//! itself. Their attachment has no fields and no versionable state, so it is
//! not versioned either: zero bytes on the wire, no keys in JSON.

use bytes::{Buf, BufMut};

use super::Attachment;
use crate::appendix::Appendix;
use crate::error::Result;
use crate::json::JsonMap;
use crate::types::TransactionType;

macro_rules! empty_attachment {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Appendix for $name {
            const NAME: &'static str = stringify!($name);
            const VERSIONED: bool = false;

            fn version(&self) -> u8 {
                0
            }

            fn my_size(&self) -> usize {
                0
            }

            fn put_my_bytes<B: BufMut>(&self, _buf: &mut B) -> Result<()> {
                Ok(())
            }

            fn parse_body<B: Buf>(_version: u8, _buf: &mut B) -> Result<Self> {
                Ok(Self)
            }

            fn put_my_json(&self, _map: &mut JsonMap) {}

            fn parse_json_body(_version: u8, _map: &JsonMap) -> Result<Self> {
                Ok(Self)
            }
        }

        impl Attachment for $name {
            const TRANSACTION_TYPE: TransactionType = TransactionType::$name;
        }
    };
}

empty_attachment! {
    /// Attachment of a plain value transfer.
    OrdinaryPayment
}

empty_attachment! {
    /// Attachment of a message-only transaction.
    ArbitraryMessage
}
