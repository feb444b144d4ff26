// Path: crates/binary-codec/src/quality.rs

//! Order book qualities.
//!
//! A quality is eight bytes: `exponent + 100` in the top byte and an
//! unnormalized 56-bit mantissa below it. Book directory indexes end with one.

use crate::types::amount::{plain_decimal, Decimal};
use xrpl_types::error::CodecError;
use xrpl_types::prelude::FixedBytes;

const QUALITY_LENGTH: usize = 8;
const EXPONENT_OFFSET: i64 = 100;
const MANTISSA_MASK: u64 = (1 << 56) - 1;
const MAX_PRECISION: usize = 16;
const MIN_EXPONENT: i64 = -96;
const MAX_EXPONENT: i64 = 80;

/// The encoding of a zero quality.
pub const ZERO_QUALITY: &str = "5500000000000000";

fn invalid(reason: impl Into<String>) -> CodecError {
    CodecError::InvalidValue {
        field: "quality".into(),
        reason: reason.into(),
    }
}

/// Encodes a decimal quality as 16 upper-case hex digits.
///
/// The sign is ignored: qualities are magnitudes.
pub fn encode_quality(quality: &str) -> Result<String, CodecError> {
    if quality.is_empty() {
        return Err(invalid("empty input"));
    }
    let decimal = Decimal::parse(quality).map_err(|e| invalid(e.to_string()))?;
    if decimal.digits.is_empty() {
        return Ok(ZERO_QUALITY.to_string());
    }
    if decimal.digits.len() > MAX_PRECISION {
        return Err(invalid(format!(
            "'{quality}' has more than {MAX_PRECISION} significant digits"
        )));
    }
    if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&decimal.exponent) {
        return Err(invalid(format!(
            "exponent {} is outside {MIN_EXPONENT}..={MAX_EXPONENT}",
            decimal.exponent
        )));
    }
    let mantissa: u64 = decimal.digits.parse().map_err(|_| invalid(quality))?;
    let exponent = (decimal.exponent + EXPONENT_OFFSET) as u64;
    Ok(format!("{:016X}", exponent << 56 | mantissa))
}

/// Decodes a quality from hex. Longer input, such as a book directory
/// index, is accepted and its last eight bytes are used.
pub fn decode_quality(quality: &str) -> Result<String, CodecError> {
    let bytes = hex::decode(quality).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
    let tail = bytes
        .len()
        .checked_sub(QUALITY_LENGTH)
        .and_then(|start| bytes.get(start..))
        .ok_or(CodecError::InvalidLength {
            what: "quality",
            expected: QUALITY_LENGTH,
            found: bytes.len(),
        })?;
    let bits = u64::from_be_bytes(tail.to_fixed("quality")?);
    let mantissa = bits & MANTISSA_MASK;
    if mantissa == 0 {
        return Ok("0".to_string());
    }
    let exponent = (bits >> 56) as i32 - EXPONENT_OFFSET as i32;
    Ok(plain_decimal(mantissa, exponent))
}
