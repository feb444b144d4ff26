// Path: crates/binary-codec/src/serdes/parser.rs

//! A bounds-checked read cursor over encoded bytes.

use crate::definitions::FieldId;
use xrpl_types::error::CodecError;
use xrpl_types::prelude::FixedBytes;
use xrpl_types::MAX_VL_LENGTH;

/// Reads wire primitives from a byte slice, tracking the absolute offset so
/// that every failure can say where it happened.
#[derive(Debug, Clone)]
pub struct BinaryParser<'a> {
    data: &'a [u8],
    position: usize,
    max_vl_length: usize,
}

impl<'a> BinaryParser<'a> {
    /// A cursor at the start of `data` accepting payloads up to the format ceiling.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_max_vl_length(data, MAX_VL_LENGTH)
    }

    /// A cursor that rejects length prefixes above `max_vl_length`.
    pub fn with_max_vl_length(data: &'a [u8], max_vl_length: usize) -> Self {
        Self {
            data,
            position: 0,
            max_vl_length: max_vl_length.min(MAX_VL_LENGTH),
        }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Whether every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The next byte, without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    /// Consumes exactly `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let end = self.position.checked_add(n);
        let slice = end.and_then(|end| self.data.get(self.position..end));
        match slice {
            Some(bytes) => {
                self.position += n;
                Ok(bytes)
            }
            None => Err(CodecError::Truncated {
                offset: self.position,
                needed: n,
                available: self.remaining(),
            }),
        }
    }

    /// Consumes exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        self.read_bytes(N)?.to_fixed("fixed-width value")
    }

    /// Consumes one byte.
    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    /// Consumes a big-endian `u16`.
    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Consumes a big-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Consumes a big-endian `u64`.
    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }

    /// Consumes a length prefix and returns the payload length it announces.
    pub fn read_vl_length(&mut self) -> Result<usize, CodecError> {
        let offset = self.position;
        let first = self.read_u8()?;
        let length = match first {
            0..=192 => usize::from(first),
            193..=240 => {
                let second = self.read_u8()?;
                193 + (usize::from(first) - 193) * 256 + usize::from(second)
            }
            241..=254 => {
                let [second, third] = self.read_array::<2>()?;
                12_481
                    + (usize::from(first) - 241) * 65_536
                    + usize::from(second) * 256
                    + usize::from(third)
            }
            255 => {
                return Err(CodecError::InvalidValue {
                    field: "length prefix".into(),
                    reason: format!("byte 0xFF at offset {offset} does not start a prefix"),
                })
            }
        };
        if length > self.max_vl_length {
            return Err(CodecError::LengthPrefixTooLong {
                length,
                max: self.max_vl_length,
            });
        }
        Ok(length)
    }

    /// Consumes a length prefix and the payload that follows it.
    pub fn read_vl(&mut self) -> Result<&'a [u8], CodecError> {
        let length = self.read_vl_length()?;
        self.read_bytes(length)
    }

    /// Consumes a field header.
    pub fn read_field_id(&mut self) -> Result<FieldId, CodecError> {
        let offset = self.position;
        let first = self.read_u8()?;
        let (high, low) = (u16::from(first >> 4), u16::from(first & 0x0F));
        let type_code = if high == 0 {
            self.read_extension(offset, "type")?
        } else {
            high
        };
        let field_code = if low == 0 {
            self.read_extension(offset, "field")?
        } else {
            low
        };
        Ok(FieldId::new(type_code, field_code))
    }

    fn read_extension(&mut self, header_offset: usize, what: &str) -> Result<u16, CodecError> {
        let code = self.read_u8()?;
        if code < 16 {
            return Err(CodecError::InvalidFieldHeader {
                offset: header_offset,
                reason: format!("{what} code {code} in an extension byte must be at least 16"),
            });
        }
        Ok(u16::from(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_integers() {
        let bytes = [0x01, 0x02, 0x00, 0x00, 0x01, 0x00, 0xAA];
        let mut parser = BinaryParser::new(&bytes);
        assert_eq!(parser.read_u16().unwrap(), 0x0102);
        assert_eq!(parser.read_u32().unwrap(), 0x100);
        assert_eq!(parser.peek(), Some(0xAA));
        assert_eq!(parser.read_u8().unwrap(), 0xAA);
        assert!(parser.is_empty());
        assert_eq!(parser.peek(), None);
    }

    #[test]
    fn truncation_reports_offset_and_shortfall() {
        let bytes = [0u8; 5];
        let mut parser = BinaryParser::new(&bytes);
        parser.read_u32().unwrap();
        assert_eq!(
            parser.read_u64(),
            Err(CodecError::Truncated {
                offset: 4,
                needed: 8,
                available: 1
            })
        );
        // A failed read consumes nothing.
        assert_eq!(parser.position(), 4);
    }

    #[test]
    fn reads_a_length_prefixed_payload() {
        let bytes = [0x03, 0xAA, 0xBB, 0xCC, 0xDD];
        let mut parser = BinaryParser::new(&bytes);
        assert_eq!(parser.read_vl().unwrap(), &[0xAA, 0xBB, 0xCC]);
        assert_eq!(parser.remaining(), 1);
    }

    #[test]
    fn enforces_the_configured_vl_limit() {
        let bytes = [0x05, 0, 0, 0, 0, 0];
        let mut parser = BinaryParser::with_max_vl_length(&bytes, 4);
        assert_eq!(
            parser.read_vl(),
            Err(CodecError::LengthPrefixTooLong { length: 5, max: 4 })
        );
    }

    #[test]
    fn reports_payload_shorter_than_its_prefix() {
        let bytes = [0x04, 0xAA];
        let mut parser = BinaryParser::new(&bytes);
        assert_eq!(
            parser.read_vl(),
            Err(CodecError::Truncated {
                offset: 1,
                needed: 4,
                available: 1
            })
        );
    }
}
