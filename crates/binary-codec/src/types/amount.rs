// Path: crates/binary-codec/src/types/amount.rs

//! Amounts: native drops, issued-currency values and multi-purpose tokens.
//!
//! All three share the first eight bytes' top bits as a discriminator:
//!
//! * bit 63 set: issued currency, followed by a 20-byte currency and a 20-byte issuer;
//! * bit 63 clear, bit 61 set: MPT, a marker byte, a `u64` and a 24-byte issuance id;
//! * otherwise: native drops, with bit 62 as the positive-sign bit.

use super::currency::Currency;
use crate::serdes::{BinaryParser, BinarySerializer};
use core::fmt;
use core::str::FromStr;
use xrpl_types::error::CodecError;
use xrpl_types::AccountId;

/// The largest native amount: 100 billion XRP, in drops.
pub const MAX_DROPS: u64 = 100_000_000_000 * 1_000_000;
/// The largest MPT quantity.
pub const MAX_MPT_VALUE: u64 = (1 << 62) - 1;
/// Width of an MPT issuance id.
pub const MPT_ISSUANCE_ID_LENGTH: usize = 24;

const ISSUED_BIT: u64 = 0x8000_0000_0000_0000;
const POSITIVE_BIT: u64 = 0x4000_0000_0000_0000;
const MPT_BIT: u64 = 0x2000_0000_0000_0000;
const NATIVE_VALUE_MASK: u64 = 0x3FFF_FFFF_FFFF_FFFF;
const MANTISSA_MASK: u64 = (1 << 54) - 1;
const EXPONENT_BIAS: i32 = 97;
const MPT_MARKER: u8 = 0x60;

/// A signed decimal held as a normalized mantissa and exponent.
///
/// Nonzero values always have a mantissa in `10^15..10^16` and an exponent in
/// `-96..=80`. Zero has a single representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssuedValue {
    negative: bool,
    mantissa: u64,
    exponent: i32,
}

impl IssuedValue {
    /// Smallest normalized mantissa.
    pub const MIN_MANTISSA: u64 = 1_000_000_000_000_000;
    /// Largest normalized mantissa.
    pub const MAX_MANTISSA: u64 = 9_999_999_999_999_999;
    /// Smallest exponent.
    pub const MIN_EXPONENT: i32 = -96;
    /// Largest exponent.
    pub const MAX_EXPONENT: i32 = 80;
    /// Most significant digits a value can carry.
    pub const MAX_PRECISION: usize = 16;

    /// Canonical zero.
    pub const ZERO: IssuedValue = IssuedValue {
        negative: false,
        mantissa: 0,
        exponent: 0,
    };

    /// Normalizes `mantissa * 10^exponent`, negated when `negative`.
    ///
    /// Fails when normalizing would drop a nonzero digit or the exponent ends
    /// up out of range.
    pub fn new(negative: bool, mantissa: u64, exponent: i32) -> Result<Self, CodecError> {
        if mantissa == 0 {
            return Ok(Self::ZERO);
        }
        let (mut mantissa, mut exponent) = (mantissa, exponent);
        while mantissa < Self::MIN_MANTISSA {
            mantissa *= 10;
            exponent = exponent.saturating_sub(1);
        }
        while mantissa > Self::MAX_MANTISSA {
            if mantissa % 10 != 0 {
                return Err(CodecError::InvalidAmount(format!(
                    "{mantissa} has more than {} significant digits",
                    Self::MAX_PRECISION
                )));
            }
            mantissa /= 10;
            exponent = exponent.saturating_add(1);
        }
        if !(Self::MIN_EXPONENT..=Self::MAX_EXPONENT).contains(&exponent) {
            return Err(CodecError::InvalidAmount(format!(
                "exponent {exponent} is outside {}..={}",
                Self::MIN_EXPONENT,
                Self::MAX_EXPONENT
            )));
        }
        Ok(Self {
            negative,
            mantissa,
            exponent,
        })
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    /// Whether the value is below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The normalized mantissa; zero for zero.
    pub fn mantissa(&self) -> u64 {
        self.mantissa
    }

    /// The exponent; zero for zero.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The eight-byte value header.
    pub fn to_bits(&self) -> u64 {
        if self.is_zero() {
            return ISSUED_BIT;
        }
        let sign = if self.negative { 0 } else { POSITIVE_BIT };
        let biased = (self.exponent + EXPONENT_BIAS) as u64;
        ISSUED_BIT | sign | (biased << 54) | self.mantissa
    }

    /// Reads an eight-byte value header, rejecting anything not in normal form.
    pub fn from_bits(bits: u64) -> Result<Self, CodecError> {
        if bits & ISSUED_BIT == 0 {
            return Err(CodecError::InvalidAmount(
                "value header does not have the issued-currency bit set".into(),
            ));
        }
        if bits == ISSUED_BIT {
            return Ok(Self::ZERO);
        }
        let mantissa = bits & MANTISSA_MASK;
        if mantissa == 0 {
            return Err(CodecError::InvalidAmount(format!(
                "non-canonical zero {bits:016X}"
            )));
        }
        if !(Self::MIN_MANTISSA..=Self::MAX_MANTISSA).contains(&mantissa) {
            return Err(CodecError::InvalidAmount(format!(
                "mantissa {mantissa} is not normalized"
            )));
        }
        let exponent = ((bits >> 54) & 0xFF) as i32 - EXPONENT_BIAS;
        if !(Self::MIN_EXPONENT..=Self::MAX_EXPONENT).contains(&exponent) {
            return Err(CodecError::InvalidAmount(format!(
                "exponent {exponent} is outside {}..={}",
                Self::MIN_EXPONENT,
                Self::MAX_EXPONENT
            )));
        }
        Ok(Self {
            negative: bits & POSITIVE_BIT == 0,
            mantissa,
            exponent,
        })
    }
}

impl Default for IssuedValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for IssuedValue {
    type Err = CodecError;

    /// Parses `[+-]digits[.digits][(e|E)[+-]digits]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::parse(s)?;
        if decimal.digits.is_empty() {
            return Ok(Self::ZERO);
        }
        if decimal.digits.len() > Self::MAX_PRECISION {
            return Err(CodecError::InvalidAmount(format!(
                "'{s}' has more than {} significant digits",
                Self::MAX_PRECISION
            )));
        }
        let mantissa = decimal
            .digits
            .parse::<u64>()
            .map_err(|e| CodecError::InvalidAmount(format!("'{s}': {e}")))?;
        let exponent = i32::try_from(decimal.exponent).map_err(|_| {
            CodecError::InvalidAmount(format!("exponent of '{s}' is out of range"))
        })?;
        Self::new(decimal.negative, mantissa, exponent)
    }
}

impl fmt::Display for IssuedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.negative {
            f.write_str("-")?;
        }
        let exponent = self.exponent;
        if exponent != 0 && !(-25..=-5).contains(&exponent) {
            let (mut mantissa, mut exponent) = (self.mantissa, exponent);
            while mantissa % 10 == 0 {
                mantissa /= 10;
                exponent += 1;
            }
            if exponent == 0 {
                return write!(f, "{mantissa}");
            }
            return write!(f, "{mantissa}e{exponent}");
        }
        f.write_str(&plain_decimal(self.mantissa, exponent))
    }
}

/// Renders `mantissa * 10^exponent` positionally, without trailing fractional zeros.
pub(crate) fn plain_decimal(mantissa: u64, exponent: i32) -> String {
    let digits = mantissa.to_string();
    if exponent >= 0 {
        return format!("{digits}{}", "0".repeat(exponent.unsigned_abs() as usize));
    }
    let scale = exponent.unsigned_abs() as usize;
    let (int_part, frac_part) = if scale >= digits.len() {
        (
            "0".to_string(),
            format!("{}{digits}", "0".repeat(scale - digits.len())),
        )
    } else {
        let (i, f) = digits.split_at(digits.len() - scale);
        (i.to_string(), f.to_string())
    };
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part
    } else {
        format!("{int_part}.{frac_part}")
    }
}

/// A decimal string broken into sign, significant digits and exponent, with
/// leading and trailing zeros stripped from the digits.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Decimal {
    pub(crate) negative: bool,
    pub(crate) digits: String,
    pub(crate) exponent: i64,
}

impl Decimal {
    pub(crate) fn parse(s: &str) -> Result<Self, CodecError> {
        let invalid = || CodecError::InvalidAmount(format!("'{s}' is not a decimal number"));
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (number, exp) = match body.find(['e', 'E']) {
            Some(at) => {
                let (n, e) = body.split_at(at);
                let e = e.get(1..).ok_or_else(invalid)?;
                (n, Some(e))
            }
            None => (body, None),
        };
        let (int_part, frac_part) = match number.split_once('.') {
            Some((i, f)) => (i, f),
            None => (number, ""),
        };
        let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(invalid());
        }
        let mut exponent: i64 = match exp {
            Some(e) => {
                let unsigned = e.strip_prefix(['+', '-']).unwrap_or(e);
                if unsigned.is_empty() || !all_digits(unsigned) {
                    return Err(invalid());
                }
                e.parse().map_err(|_| invalid())?
            }
            None => 0,
        };
        exponent = exponent.saturating_sub(frac_part.len() as i64);

        let joined = format!("{int_part}{frac_part}");
        let significant = joined.trim_start_matches('0');
        let trimmed = significant.trim_end_matches('0');
        exponent = exponent.saturating_add((significant.len() - trimmed.len()) as i64);
        let digits = trimmed.to_string();
        if digits.is_empty() {
            exponent = 0;
        }
        Ok(Self {
            negative: negative && !digits.is_empty(),
            digits,
            exponent,
        })
    }
}

/// An issued-currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssuedAmount {
    /// The quantity.
    pub value: IssuedValue,
    /// The currency; never the native asset.
    pub currency: Currency,
    /// The issuing account.
    pub issuer: AccountId,
}

/// A multi-purpose token amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MptAmount {
    /// The quantity, at most [`MAX_MPT_VALUE`].
    pub value: u64,
    /// The token issuance.
    pub issuance_id: [u8; MPT_ISSUANCE_ID_LENGTH],
}

/// Any of the three amount kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Amount {
    /// Native drops, at most [`MAX_DROPS`].
    Native(u64),
    /// An issued-currency amount.
    Issued(IssuedAmount),
    /// A multi-purpose token amount.
    Mpt(MptAmount),
}

impl Amount {
    /// A native amount.
    pub fn drops(drops: u64) -> Self {
        Amount::Native(drops)
    }

    /// An issued amount from its decimal value, currency code and issuer.
    pub fn issued(value: &str, currency: &str, issuer: AccountId) -> Result<Self, CodecError> {
        Ok(Amount::Issued(IssuedAmount {
            value: value.parse()?,
            currency: currency.parse()?,
            issuer,
        }))
    }

    /// An issued amount whose issuer is given as a classic address.
    pub fn issued_by(value: &str, currency: &str, issuer: &str) -> Result<Self, CodecError> {
        Self::issued(value, currency, xrpl_address_codec::decode_classic_address(issuer)?)
    }

    /// An MPT amount.
    pub fn mpt(value: u64, issuance_id: [u8; MPT_ISSUANCE_ID_LENGTH]) -> Self {
        Amount::Mpt(MptAmount { value, issuance_id })
    }

    /// Whether this is a native amount.
    pub fn is_native(&self) -> bool {
        matches!(self, Amount::Native(_))
    }

    /// Appends the wire form.
    pub fn write(&self, sink: &mut BinarySerializer) -> Result<(), CodecError> {
        match self {
            Amount::Native(drops) => {
                if *drops > MAX_DROPS {
                    return Err(CodecError::InvalidAmount(format!(
                        "{drops} drops exceeds the maximum of {MAX_DROPS}"
                    )));
                }
                sink.write_u64(POSITIVE_BIT | drops);
            }
            Amount::Issued(issued) => {
                if issued.currency.is_xrp() {
                    return Err(CodecError::InvalidAmount(
                        "an issued amount cannot use the native currency code".into(),
                    ));
                }
                sink.write_u64(issued.value.to_bits());
                sink.write_bytes(issued.currency.as_bytes());
                sink.write_bytes(issued.issuer.as_bytes());
            }
            Amount::Mpt(mpt) => {
                if mpt.value > MAX_MPT_VALUE {
                    return Err(CodecError::InvalidAmount(format!(
                        "MPT value {} exceeds the maximum of {MAX_MPT_VALUE}",
                        mpt.value
                    )));
                }
                sink.write_u8(MPT_MARKER);
                sink.write_u64(mpt.value);
                sink.write_bytes(&mpt.issuance_id);
            }
        }
        Ok(())
    }

    /// Reads an amount, choosing the kind from its leading bits.
    pub fn read(parser: &mut BinaryParser<'_>) -> Result<Self, CodecError> {
        let offset = parser.position();
        let lead = parser.peek().unwrap_or(0);
        if (u64::from(lead) << 56) & ISSUED_BIT != 0 {
            let value = IssuedValue::from_bits(parser.read_u64()?)?;
            let currency = Currency::from_bytes(parser.read_array()?);
            if currency.is_xrp() {
                return Err(CodecError::InvalidAmount(format!(
                    "issued amount at offset {offset} uses the native currency code"
                )));
            }
            let issuer = AccountId(parser.read_array()?);
            return Ok(Amount::Issued(IssuedAmount {
                value,
                currency,
                issuer,
            }));
        }
        if (u64::from(lead) << 56) & MPT_BIT != 0 {
            let marker = parser.read_u8()?;
            if marker != MPT_MARKER {
                return Err(CodecError::InvalidAmount(format!(
                    "MPT marker byte {marker:#04x} at offset {offset}, expected {MPT_MARKER:#04x}"
                )));
            }
            let value = parser.read_u64()?;
            if value > MAX_MPT_VALUE {
                return Err(CodecError::InvalidAmount(format!(
                    "MPT value {value} exceeds the maximum of {MAX_MPT_VALUE}"
                )));
            }
            let issuance_id = parser.read_array()?;
            return Ok(Amount::Mpt(MptAmount { value, issuance_id }));
        }
        let bits = parser.read_u64()?;
        if bits & POSITIVE_BIT == 0 {
            return Err(CodecError::InvalidAmount(format!(
                "negative native amount at offset {offset}"
            )));
        }
        let drops = bits & NATIVE_VALUE_MASK;
        if drops > MAX_DROPS {
            return Err(CodecError::InvalidAmount(format!(
                "{drops} drops exceeds the maximum of {MAX_DROPS}"
            )));
        }
        Ok(Amount::Native(drops))
    }
}

impl From<u64> for Amount {
    fn from(drops: u64) -> Self {
        Amount::Native(drops)
    }
}

impl From<IssuedAmount> for Amount {
    fn from(issued: IssuedAmount) -> Self {
        Amount::Issued(issued)
    }
}

impl From<MptAmount> for Amount {
    fn from(mpt: MptAmount) -> Self {
        Amount::Mpt(mpt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(amount: &Amount) -> Result<String, CodecError> {
        let mut sink = BinarySerializer::new();
        amount.write(&mut sink)?;
        Ok(hex::encode_upper(sink.into_bytes()))
    }

    fn decode(hex_str: &str) -> Result<Amount, CodecError> {
        let bytes = hex::decode(hex_str).unwrap();
        let mut parser = BinaryParser::new(&bytes);
        let amount = Amount::read(&mut parser)?;
        assert!(parser.is_empty());
        Ok(amount)
    }

    fn value(s: &str) -> IssuedValue {
        s.parse().unwrap()
    }

    #[test]
    fn native_amounts() {
        assert_eq!(encode(&Amount::drops(0)).unwrap(), "4000000000000000");
        assert_eq!(encode(&Amount::drops(10)).unwrap(), "400000000000000A");
        assert_eq!(encode(&Amount::drops(1_000_000)).unwrap(), "40000000000F4240");
        assert_eq!(decode("40000000000F4240").unwrap(), Amount::drops(1_000_000));
        assert_eq!(decode("4000000000000000").unwrap(), Amount::drops(0));
    }

    #[test]
    fn native_range_is_enforced() {
        assert!(encode(&Amount::drops(MAX_DROPS)).is_ok());
        assert!(matches!(
            encode(&Amount::drops(MAX_DROPS + 1)),
            Err(CodecError::InvalidAmount(_))
        ));
        // Sign bit clear.
        assert!(matches!(
            decode("000000000000000A"),
            Err(CodecError::InvalidAmount(_))
        ));
    }

    #[test]
    fn issued_value_headers() {
        assert_eq!(value("1").to_bits(), 0xD483_8D7E_A4C6_8000);
        assert_eq!(value("-1").to_bits(), 0x9483_8D7E_A4C6_8000);
        assert_eq!(value("0").to_bits(), 0x8000_0000_0000_0000);
        assert_eq!(value("-0.00").to_bits(), 0x8000_0000_0000_0000);
        assert_eq!(IssuedValue::from_bits(0xD483_8D7E_A4C6_8000).unwrap(), value("1"));
    }

    #[test]
    fn issued_amount_wire_form() {
        let issuer = AccountId([0x11; 20]);
        let amount = Amount::issued("1", "USD", issuer).unwrap();
        let encoded = encode(&amount).unwrap();
        assert_eq!(
            encoded,
            format!(
                "D4838D7EA4C68000{}{}",
                "0000000000000000000000005553440000000000",
                "11".repeat(20)
            )
        );
        assert_eq!(decode(&encoded).unwrap(), amount);
    }

    #[test]
    fn issuer_can_be_a_classic_address() {
        let by_address = Amount::issued_by("2.5", "EUR", "rrrrrrrrrrrrrrrrrrrrBZbvji").unwrap();
        assert_eq!(by_address, Amount::issued("2.5", "EUR", AccountId::ONE).unwrap());
        assert!(matches!(
            Amount::issued_by("1", "EUR", "not-an-address"),
            Err(CodecError::Address(_))
        ));
    }

    #[test]
    fn issued_zero_is_canonical() {
        let amount = Amount::issued("0", "USD", AccountId::ONE).unwrap();
        let encoded = encode(&amount).unwrap();
        assert!(encoded.starts_with("8000000000000000"));
        assert_eq!(decode(&encoded).unwrap(), amount);

        // Sign bit set on a zero mantissa.
        let mut bad = encoded.clone();
        bad.replace_range(0..16, "C000000000000000");
        assert!(matches!(decode(&bad), Err(CodecError::InvalidAmount(_))));
    }

    #[test]
    fn unnormalized_mantissa_is_rejected_on_decode() {
        let issuer = "11".repeat(20);
        let usd = "0000000000000000000000005553440000000000";
        // mantissa 1, exponent 0
        let bad = format!("D840000000000001{usd}{issuer}");
        assert!(matches!(decode(&bad), Err(CodecError::InvalidAmount(_))));
    }

    #[test]
    fn issued_amount_cannot_use_the_native_code() {
        let amount = Amount::Issued(IssuedAmount {
            value: value("1"),
            currency: Currency::XRP,
            issuer: AccountId::ONE,
        });
        assert!(matches!(encode(&amount), Err(CodecError::InvalidAmount(_))));
    }

    #[test]
    fn normalization() {
        let v = value("1.5");
        assert_eq!((v.mantissa(), v.exponent()), (1_500_000_000_000_000, -15));
        let v = value("1234567890123456e3");
        assert_eq!((v.mantissa(), v.exponent()), (1_234_567_890_123_456, 3));
        let v = IssuedValue::new(false, 12_345_678_901_234_560, 0).unwrap();
        assert_eq!((v.mantissa(), v.exponent()), (1_234_567_890_123_456, 1));
    }

    #[test]
    fn precision_loss_is_an_error() {
        assert!(matches!(
            "1.2345678901234567".parse::<IssuedValue>(),
            Err(CodecError::InvalidAmount(_))
        ));
        assert!(matches!(
            IssuedValue::new(false, 12_345_678_901_234_567, 0),
            Err(CodecError::InvalidAmount(_))
        ));
        // Trailing zeros do not count as significant.
        assert!("1234567890123456000000".parse::<IssuedValue>().is_ok());
    }

    #[test]
    fn exponent_range_is_enforced() {
        assert!("9999999999999999e80".parse::<IssuedValue>().is_ok());
        assert!("1e96".parse::<IssuedValue>().is_err());
        assert!("1e-81".parse::<IssuedValue>().is_ok());
        assert!("1e-82".parse::<IssuedValue>().is_err());
    }

    #[test]
    fn rejects_malformed_decimals() {
        for bad in ["", "-", ".", "1.2.3", "1e", "e5", "abc", "1,5", "--1", "1e+"] {
            assert!(bad.parse::<IssuedValue>().is_err(), "{:?}", bad);
        }
    }

    #[test]
    fn displays_like_the_ledger() {
        let cases = [
            ("1", "1"),
            ("-1.5", "-1.5"),
            ("0.000001", "0.000001"),
            ("123.456", "123.456"),
            ("1000000", "1000000"),
            ("1e20", "1e20"),
            ("1.5e-30", "15e-31"),
            ("0", "0"),
            ("1111111111111111", "1111111111111111"),
            ("123456789012", "123456789012"),
            ("1e11", "1e11"),
        ];
        for (input, shown) in cases {
            assert_eq!(value(input).to_string(), shown, "{}", input);
        }
    }

    #[test]
    fn display_parses_back_to_the_same_value() {
        for input in ["1", "-1.5", "0.000001", "1e20", "1.5e-30", "9999999999999999e80", "1e-81"] {
            let v = value(input);
            assert_eq!(value(&v.to_string()), v, "{}", input);
        }
    }

    #[test]
    fn mpt_amounts() {
        let id = [0xAB; 24];
        let amount = Amount::mpt(100, id);
        let encoded = encode(&amount).unwrap();
        assert_eq!(encoded, format!("600000000000000064{}", "AB".repeat(24)));
        assert_eq!(decode(&encoded).unwrap(), amount);
        assert!(encode(&Amount::mpt(MAX_MPT_VALUE + 1, id)).is_err());
        // Negative MPT: marker without the positive bit.
        let bad = format!("200000000000000064{}", "AB".repeat(24));
        assert!(matches!(decode(&bad), Err(CodecError::InvalidAmount(_))));
    }

    #[test]
    fn truncated_amounts_report_offsets() {
        assert!(matches!(
            decode("D4838D7EA4C68000000000"),
            Err(CodecError::Truncated { offset: 8, needed: 20, .. })
        ));
    }
}
