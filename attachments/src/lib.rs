// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # NOVA Attachments: Transaction Payload Codecs
//!
//! Every NOVA transaction carries exactly one attachment: the typed payload
//! that says *what* the transaction does (issue an asset, place an order,
//! lease a balance). This crate owns the two representations of those
//! payloads and keeps them consistent:
//!
//! - the **binary wire format**, which is what gets hashed, signed, and
//!   gossiped. A single wrong byte here forks you off the network.
//! - the **JSON form**, which is what the API speaks.
//!
//! ## Architecture
//!
//! - **appendix**: The versioned envelope. One version byte, then the body.
//! - **attachment**: The 14 concrete payload shapes and the dispatch enum.
//! - **types**: Transaction-type tags (`type`/`subtype` byte pairs).
//! - **fee**: Read-only fee table keyed by transaction type.
//! - **io**: Checked little-endian cursor reads over `bytes::Buf`.
//! - **json**: Field accessors for the JSON object form.
//! - **config**: Wire constants and the validation policy.
//!
//! ## Ground rules
//!
//! 1. 64-bit ids are unsigned. Everywhere. No sign flips, ever.
//! 2. Encoding is all-or-nothing: an invalid attachment writes zero bytes.
//! 3. `size()` is exactly what `put_bytes()` writes. Tests hold us to it.

pub mod appendix;
pub mod attachment;
pub mod config;
pub mod error;
pub mod fee;
pub mod io;
pub mod json;
pub mod types;

pub use appendix::Appendix;
pub use attachment::{AnyAttachment, Attachment};
pub use error::{CodecError, Result};
pub use fee::{FeeTable, StandardFees};
pub use types::TransactionType;
