//! Length-prefixed binary encoding

use crate::error::{ParseError, Result};
use crate::parser;
use crate::types::EmailAddress;
use bytes::{Buf, BufMut, Bytes, BytesMut};

/// Width of the big-endian length prefix
const LEN_PREFIX: usize = 4;

impl EmailAddress {
    /// Encode as a `u32` big-endian length prefix followed by exactly that
    /// many canonical text bytes, with no trailing NUL
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn to_wire(&self) -> Bytes {
        let text = self.to_text();
        let mut buf = BytesMut::with_capacity(LEN_PREFIX + text.len());
        // Parts are capped at 256 bytes each, so the length fits a u32.
        buf.put_u32(text.len() as u32);
        buf.put_slice(text);
        buf.freeze()
    }

    /// Decode a length-prefixed buffer produced by [`to_wire`](Self::to_wire)
    ///
    /// Rejects a buffer too short for the prefix and a declared length that
    /// does not match the bytes actually present. The payload then goes
    /// through the full parse; a buffer that decodes always yields a valid
    /// canonical value.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_wire(raw: &[u8]) -> Result<Self> {
        let mut buf = raw;
        if buf.remaining() < LEN_PREFIX {
            return Err(ParseError::TruncatedBinaryPayload {
                declared: LEN_PREFIX,
                available: buf.remaining(),
            });
        }
        let declared = buf.get_u32() as usize;
        let available = buf.remaining();
        if declared != available {
            return Err(ParseError::TruncatedBinaryPayload {
                declared,
                available,
            });
        }
        parser::parse_address(buf)
    }
}
