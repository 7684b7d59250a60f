//! Checked cursor reads and writes for the attachment wire format.
//!
//! `bytes::Buf` panics when asked for more bytes than it holds. The wire
//! format is untrusted input, so every read here checks `remaining()` first
//! and turns a short buffer into [`CodecError::UnexpectedEof`].
//!
//! All integers are little-endian.

use bytes::{Buf, BufMut};

use crate::config::MAX_WIRE_STRING_LENGTH;
use crate::error::{CodecError, Result};

/// Bounds-checked reads over any [`Buf`].
pub trait ReadExt: Buf {
    /// Fails unless at least `needed` bytes remain.
    fn ensure_remaining(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(CodecError::UnexpectedEof { needed, remaining });
        }
        Ok(())
    }

    /// Reads one byte.
    fn read_u8(&mut self) -> Result<u8> {
        self.ensure_remaining(1)?;
        Ok(self.get_u8())
    }

    /// Reads a little-endian `u32`.
    fn read_u32(&mut self) -> Result<u32> {
        self.ensure_remaining(4)?;
        Ok(self.get_u32_le())
    }

    /// Reads a little-endian `u64`.
    fn read_u64(&mut self) -> Result<u64> {
        self.ensure_remaining(8)?;
        Ok(self.get_u64_le())
    }

    /// Reads a little-endian `i64`.
    fn read_i64(&mut self) -> Result<i64> {
        self.ensure_remaining(8)?;
        Ok(self.get_i64_le())
    }

    /// Reads exactly `N` raw bytes.
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.ensure_remaining(N)?;
        let mut out = [0u8; N];
        self.copy_to_slice(&mut out);
        Ok(out)
    }

    /// Reads a strict boolean byte: `0x00` or `0x01`, nothing else.
    fn read_bool(&mut self, field: &str) -> Result<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(CodecError::invalid(
                field,
                format!("expected boolean byte, got 0x{:02x}", other),
            )),
        }
    }

    /// Reads a one-byte length prefix followed by that many UTF-8 bytes.
    fn read_short_string(&mut self, field: &str) -> Result<String> {
        let len = self.read_u8()? as usize;
        self.ensure_remaining(len)?;
        let mut raw = vec![0u8; len];
        self.copy_to_slice(&mut raw);
        String::from_utf8(raw).map_err(|e| CodecError::invalid(field, e.to_string()))
    }
}

impl<B: Buf + ?Sized> ReadExt for B {}

/// Wire-format writes over any [`BufMut`].
pub trait WriteExt: BufMut {
    /// Writes a boolean as `0x00` or `0x01`.
    fn put_bool(&mut self, value: bool) {
        self.put_u8(u8::from(value));
    }

    /// Writes a one-byte length prefix and the string's UTF-8 bytes.
    ///
    /// Nothing is written if the string does not fit the prefix.
    fn put_short_string(&mut self, field: &str, value: &str) -> Result<()> {
        let len = check_short_string(field, value)?;
        self.put_u8(len);
        self.put_slice(value.as_bytes());
        Ok(())
    }
}

impl<B: BufMut + ?Sized> WriteExt for B {}

/// Returns the length prefix for `value`, or a capacity error if it does not
/// fit in one byte.
pub fn check_short_string(field: &str, value: &str) -> Result<u8> {
    u8::try_from(value.len()).map_err(|_| CodecError::CapacityExceeded {
        field: field.to_string(),
        len: value.len(),
        max: MAX_WIRE_STRING_LENGTH,
    })
}
