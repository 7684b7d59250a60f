//! # The Appendix Envelope
//!
//! Every attachment shares the same framing: a one-byte version tag, then a
//! type-specific body. In JSON the version lives under `version.<Name>`.
//!
//! Variants implement [`Appendix`] to describe only their body. The free
//! functions in this module ([`put_bytes`], [`parse`], [`to_json`],
//! [`from_json`], [`size`]) add the framing, so no variant ever writes its
//! own version byte.
//!
//! Variants with no fields (payments and messages) opt out of the version
//! byte entirely by setting [`Appendix::VERSIONED`] to `false`: they encode to
//! zero bytes and decode from zero bytes.

use bytes::{Buf, BufMut};
use tracing::trace;

use crate::config::VERSION_TAG_SIZE;
use crate::error::{CodecError, Result};
use crate::io::ReadExt;
use crate::json::{self, JsonMap};

/// The capability set every attachment body provides.
pub trait Appendix: Sized {
    /// Stable name used in JSON keys and logs, e.g. `"AssetTransfer"`.
    const NAME: &'static str;

    /// Whether the body is prefixed with a version byte.
    const VERSIONED: bool = true;

    /// Returns [`Self::NAME`].
    fn appendix_name(&self) -> &'static str {
        Self::NAME
    }

    /// The version tag. Always 0 for unversioned variants.
    fn version(&self) -> u8;

    /// Exact byte length of the body written by [`Appendix::put_my_bytes`].
    fn my_size(&self) -> usize;

    /// Writes the body. Implementations validate before writing.
    fn put_my_bytes<B: BufMut>(&self, buf: &mut B) -> Result<()>;

    /// Reads the body that follows an already-consumed version tag.
    fn parse_body<B: Buf>(version: u8, buf: &mut B) -> Result<Self>;

    /// Writes the body's JSON keys.
    fn put_my_json(&self, map: &mut JsonMap);

    /// Reads the body's JSON keys.
    fn parse_json_body(version: u8, map: &JsonMap) -> Result<Self>;
}

/// Total encoded size: version tag (if any) plus body.
pub fn size<A: Appendix>(appendix: &A) -> usize {
    let tag = if A::VERSIONED { VERSION_TAG_SIZE } else { 0 };
    tag + appendix.my_size()
}

/// Writes the framed attachment into `buf`.
///
/// The body is staged in a scratch buffer first, so a validation failure
/// leaves `buf` untouched.
pub fn put_bytes<A: Appendix, B: BufMut>(appendix: &A, buf: &mut B) -> Result<()> {
    let mut scratch = Vec::with_capacity(size(appendix));
    if A::VERSIONED {
        scratch.put_u8(appendix.version());
    }
    if let Err(e) = appendix.put_my_bytes(&mut scratch) {
        trace!(appendix = A::NAME, error = %e, "refusing to encode attachment");
        return Err(e);
    }
    debug_assert_eq!(scratch.len(), size(appendix), "size mismatch for {}", A::NAME);
    buf.put_slice(&scratch);
    Ok(())
}

/// Encodes the framed attachment into a fresh vector.
pub fn to_bytes<A: Appendix>(appendix: &A) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(size(appendix));
    put_bytes(appendix, &mut out)?;
    Ok(out)
}

/// Reads a framed attachment from the cursor, advancing it past the
/// attachment. Trailing bytes are left for the caller.
pub fn parse<A: Appendix, B: Buf>(buf: &mut B) -> Result<A> {
    let version = if A::VERSIONED { buf.read_u8()? } else { 0 };
    A::parse_body(version, buf)
}

/// Decodes a standalone attachment, rejecting trailing bytes.
pub fn from_bytes<A: Appendix>(mut bytes: &[u8]) -> Result<A> {
    let appendix = parse(&mut bytes)?;
    if !bytes.is_empty() {
        return Err(CodecError::TrailingBytes { count: bytes.len() });
    }
    Ok(appendix)
}

/// Writes the version key (for versioned variants) and the body's keys.
pub fn put_json<A: Appendix>(appendix: &A, map: &mut JsonMap) {
    if A::VERSIONED {
        json::put_version(map, A::NAME, appendix.version());
    }
    appendix.put_my_json(map);
}

/// Renders the attachment as a fresh JSON object.
pub fn to_json<A: Appendix>(appendix: &A) -> JsonMap {
    let mut map = JsonMap::new();
    put_json(appendix, &mut map);
    map
}

/// Reads an attachment from its JSON object form.
pub fn from_json<A: Appendix>(map: &JsonMap) -> Result<A> {
    let version = if A::VERSIONED {
        json::get_version(map, A::NAME)?
    } else {
        0
    };
    A::parse_json_body(version, map)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal versioned body: a single u32.
    #[derive(Debug, PartialEq)]
    struct Probe {
        version: u8,
        value: u32,
    }

    impl Appendix for Probe {
        const NAME: &'static str = "Probe";

        fn version(&self) -> u8 {
            self.version
        }

        fn my_size(&self) -> usize {
            4
        }

        fn put_my_bytes<B: BufMut>(&self, buf: &mut B) -> Result<()> {
            if self.value == u32::MAX {
                return Err(CodecError::invalid("value", "reserved"));
            }
            buf.put_u32_le(self.value);
            Ok(())
        }

        fn parse_body<B: Buf>(version: u8, buf: &mut B) -> Result<Self> {
            Ok(Self {
                version,
                value: buf.read_u32()?,
            })
        }

        fn put_my_json(&self, map: &mut JsonMap) {
            map.insert("value".into(), self.value.into());
        }

        fn parse_json_body(version: u8, map: &JsonMap) -> Result<Self> {
            Ok(Self {
                version,
                value: json::get_u32(map, "value")?,
            })
        }
    }

    #[test]
    fn version_byte_comes_first() {
        let probe = Probe {
            version: 3,
            value: 1,
        };
        assert_eq!(size(&probe), 5);
        assert_eq!(to_bytes(&probe).unwrap(), vec![3, 1, 0, 0, 0]);
        assert_eq!(from_bytes::<Probe>(&[3, 1, 0, 0, 0]).unwrap(), probe);
    }

    #[test]
    fn empty_input_is_an_underrun() {
        assert_eq!(
            from_bytes::<Probe>(&[]),
            Err(CodecError::UnexpectedEof {
                needed: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn parse_leaves_trailing_bytes_for_caller() {
        let mut cursor: &[u8] = &[0, 9, 0, 0, 0, 0xaa];
        let probe: Probe = parse(&mut cursor).unwrap();
        assert_eq!(probe.value, 9);
        assert_eq!(cursor, &[0xaa]);

        assert_eq!(
            from_bytes::<Probe>(&[0, 9, 0, 0, 0, 0xaa]),
            Err(CodecError::TrailingBytes { count: 1 })
        );
    }

    #[test]
    fn failed_encode_writes_nothing() {
        let probe = Probe {
            version: 0,
            value: u32::MAX,
        };
        let mut out = vec![0xee];
        assert!(put_bytes(&probe, &mut out).is_err());
        assert_eq!(out, vec![0xee]);
    }

    #[test]
    fn json_framing_uses_namespaced_version_key() {
        let probe = Probe {
            version: 2,
            value: 7,
        };
        let map = to_json(&probe);
        assert_eq!(map["version.Probe"], 2);
        assert_eq!(map["value"], 7);
        assert_eq!(from_json::<Probe>(&map).unwrap(), probe);
    }
}
