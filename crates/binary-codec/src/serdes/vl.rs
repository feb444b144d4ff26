// Path: crates/binary-codec/src/serdes/vl.rs

//! Variable-length prefixes.
//!
//! A payload of `L` bytes is preceded by one, two or three bytes:
//!
//! | `L`                | prefix                                          |
//! |--------------------|-------------------------------------------------|
//! | `0..=192`          | `L`                                             |
//! | `193..=12480`      | `193 + (L-193)/256`, `(L-193) % 256`            |
//! | `12481..=918744`   | `241 + (L-12481)/65536`, then two bytes, big-endian |

use super::parser::BinaryParser;
use xrpl_types::error::CodecError;
use xrpl_types::MAX_VL_LENGTH;

/// Longest payload described by a single-byte prefix.
pub const MAX_SINGLE_BYTE_LENGTH: usize = 192;
/// Longest payload described by a two-byte prefix.
pub const MAX_DOUBLE_BYTE_LENGTH: usize = 12_480;

/// Encodes the length prefix for a payload of `length` bytes.
pub fn encode_vl_length(length: usize) -> Result<Vec<u8>, CodecError> {
    if length <= MAX_SINGLE_BYTE_LENGTH {
        return Ok(vec![length as u8]);
    }
    if length <= MAX_DOUBLE_BYTE_LENGTH {
        let rest = length - (MAX_SINGLE_BYTE_LENGTH + 1);
        return Ok(vec![(193 + (rest >> 8)) as u8, (rest & 0xFF) as u8]);
    }
    if length <= MAX_VL_LENGTH {
        let rest = length - (MAX_DOUBLE_BYTE_LENGTH + 1);
        return Ok(vec![
            (241 + (rest >> 16)) as u8,
            ((rest >> 8) & 0xFF) as u8,
            (rest & 0xFF) as u8,
        ]);
    }
    Err(CodecError::LengthPrefixTooLong {
        length,
        max: MAX_VL_LENGTH,
    })
}

/// Decodes a length prefix at the start of `bytes`.
///
/// Returns the payload length and the number of prefix bytes consumed.
pub fn decode_vl_length(bytes: &[u8]) -> Result<(usize, usize), CodecError> {
    let mut parser = BinaryParser::new(bytes);
    let length = parser.read_vl_length()?;
    Ok((length, parser.position()))
}
