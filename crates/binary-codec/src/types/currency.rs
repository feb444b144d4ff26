// Path: crates/binary-codec/src/types/currency.rs

//! 160-bit currency codes.

use core::fmt;
use core::str::FromStr;
use xrpl_types::error::CodecError;
use xrpl_types::prelude::FixedBytes;

/// Width of a currency code on the wire.
pub const CURRENCY_LENGTH: usize = 20;

const STANDARD_CODE_OFFSET: usize = 12;
const STANDARD_CODE_LENGTH: usize = 3;
const STANDARD_CODE_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789<>(){}[]|?!@#$%^&*";

/// A currency code: the native asset (all zeros), a three-character standard
/// code, or any other 160-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Currency([u8; CURRENCY_LENGTH]);

impl Currency {
    /// The native asset.
    pub const XRP: Currency = Currency([0; CURRENCY_LENGTH]);

    /// Wraps raw bytes without interpretation.
    pub const fn from_bytes(bytes: [u8; CURRENCY_LENGTH]) -> Self {
        Currency(bytes)
    }

    /// Wraps a 20-byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(Currency(bytes.to_fixed("currency")?))
    }

    /// The raw 20 bytes.
    pub fn as_bytes(&self) -> &[u8; CURRENCY_LENGTH] {
        &self.0
    }

    /// Whether this is the native asset.
    pub fn is_xrp(&self) -> bool {
        self.0 == [0; CURRENCY_LENGTH]
    }

    /// The three-character code, when the bytes are in standard form.
    pub fn standard_code(&self) -> Option<&str> {
        let (head, rest) = self.0.split_at(STANDARD_CODE_OFFSET);
        let (code, tail) = rest.split_at(STANDARD_CODE_LENGTH);
        if head.iter().chain(tail).any(|&b| b != 0) {
            return None;
        }
        let code = core::str::from_utf8(code).ok()?;
        (is_standard_code(code) && code != "XRP").then_some(code)
    }

    fn standard(code: &str) -> Self {
        let mut bytes = [0u8; CURRENCY_LENGTH];
        for (dst, src) in bytes.iter_mut().skip(STANDARD_CODE_OFFSET).zip(code.bytes()) {
            *dst = src;
        }
        Currency(bytes)
    }
}

fn is_standard_code(code: &str) -> bool {
    code.len() == STANDARD_CODE_LENGTH && code.chars().all(|c| STANDARD_CODE_CHARSET.contains(c))
}

impl FromStr for Currency {
    type Err = CodecError;

    /// Accepts `"XRP"`, a three-character standard code, or 40 hex digits.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        if code == "XRP" {
            return Ok(Currency::XRP);
        }
        if is_standard_code(code) {
            return Ok(Currency::standard(code));
        }
        if code.len() == CURRENCY_LENGTH * 2 {
            let bytes = hex::decode(code)
                .map_err(|e| CodecError::InvalidCurrency(format!("'{code}': {e}")))?;
            return Currency::from_slice(&bytes);
        }
        Err(CodecError::InvalidCurrency(format!(
            "'{code}' is neither a three-character code nor 40 hex digits"
        )))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_xrp() {
            return f.write_str("XRP");
        }
        match self.standard_code() {
            Some(code) => f.write_str(code),
            None => f.write_str(&hex::encode_upper(self.0)),
        }
    }
}

impl From<[u8; CURRENCY_LENGTH]> for Currency {
    fn from(bytes: [u8; CURRENCY_LENGTH]) -> Self {
        Currency(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_codes_sit_at_bytes_twelve_to_fifteen() {
        let usd: Currency = "USD".parse().unwrap();
        let mut expected = [0u8; 20];
        expected[12..15].copy_from_slice(b"USD");
        assert_eq!(usd.as_bytes(), &expected);
        assert_eq!(usd.standard_code(), Some("USD"));
        assert_eq!(usd.to_string(), "USD");
        assert!(!usd.is_xrp());
    }

    #[test]
    fn xrp_is_all_zeros() {
        let xrp: Currency = "XRP".parse().unwrap();
        assert!(xrp.is_xrp());
        assert_eq!(xrp, Currency::XRP);
        assert_eq!(xrp.to_string(), "XRP");
        assert_eq!(xrp.standard_code(), None);
    }

    #[test]
    fn nonstandard_codes_display_as_hex() {
        let hex = "0158415500000000C1F76FF6ECB0BAC600000000";
        let c: Currency = hex.parse().unwrap();
        assert_eq!(c.standard_code(), None);
        assert_eq!(c.to_string(), hex);
    }

    #[test]
    fn rejects_malformed_codes() {
        for bad in ["US", "USDX", "U D", "zz0158415500000000C1F76FF6ECB0BAC6000000"] {
            assert!(
                matches!(bad.parse::<Currency>(), Err(CodecError::InvalidCurrency(_))),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn literal_xrp_bytes_are_not_a_standard_code() {
        let mut bytes = [0u8; 20];
        bytes[12..15].copy_from_slice(b"XRP");
        let c = Currency::from_bytes(bytes);
        assert_eq!(c.standard_code(), None);
        assert!(!c.is_xrp());
        assert_eq!(c.to_string(), hex::encode_upper(bytes));
    }
}
