// Path: crates/binary-codec/src/types/mod.rs

//! Typed field values and the per-type wire codecs.
//!
//! A [`FieldMap`] is the in-memory form of an object: field names mapped to
//! [`FieldValue`]s. The map is unordered; canonical order is imposed by the
//! encoder, never by insertion.

use crate::definitions::{FieldDefinition, NamedEnum, TypeTag};
use crate::serdes::{BinaryParser, BinarySerializer};
use std::collections::hash_map;
use std::collections::HashMap;
use xrpl_types::config::CodecConfig;
use xrpl_types::error::CodecError;
use xrpl_types::prelude::FixedBytes;
use xrpl_types::AccountId;

pub mod amount;
pub mod currency;
pub mod issue;
pub mod path_set;
pub(crate) mod st_array;
pub(crate) mod st_object;

pub use amount::{Amount, IssuedAmount, IssuedValue, MptAmount};
pub use currency::Currency;
pub use issue::{Issue, XChainBridge};
pub use path_set::{Path, PathSet, PathStep, PathStepFlags};

/// Width of one Vector256 entry.
pub const HASH256_LENGTH: usize = 32;

/// A field's value, one variant per wire type.
///
/// Enumerated integer fields (`TransactionType`, `LedgerEntryType`,
/// `TransactionResult`, `PermissionValue`) hold [`FieldValue::Named`] for every
/// code that has a name, and the plain integer only for codes that do not.
/// Decoding follows the same rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// 8-bit unsigned integer.
    UInt8(u8),
    /// 16-bit unsigned integer.
    UInt16(u16),
    /// 32-bit unsigned integer.
    UInt32(u32),
    /// 64-bit unsigned integer.
    UInt64(u64),
    /// 128-bit hash.
    Hash128([u8; 16]),
    /// 160-bit hash.
    Hash160([u8; 20]),
    /// 192-bit hash.
    Hash192([u8; 24]),
    /// 256-bit hash.
    Hash256([u8; 32]),
    /// Arbitrary bytes.
    Blob(Vec<u8>),
    /// An account.
    AccountId(AccountId),
    /// An amount of any kind.
    Amount(Amount),
    /// A nested object.
    Object(FieldMap),
    /// An array; each element maps one wrapper field name to an object.
    Array(Vec<FieldMap>),
    /// Payment paths.
    PathSet(PathSet),
    /// A list of 256-bit hashes.
    Vector256(Vec<[u8; HASH256_LENGTH]>),
    /// An asset identifier.
    Issue(Issue),
    /// A cross-chain bridge.
    XChainBridge(XChainBridge),
    /// A bare currency code.
    Currency(Currency),
    /// The symbolic name of an enumerated integer.
    Named(String),
}

impl FieldValue {
    /// The variant's name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::UInt8(_) => "UInt8",
            FieldValue::UInt16(_) => "UInt16",
            FieldValue::UInt32(_) => "UInt32",
            FieldValue::UInt64(_) => "UInt64",
            FieldValue::Hash128(_) => "Hash128",
            FieldValue::Hash160(_) => "Hash160",
            FieldValue::Hash192(_) => "Hash192",
            FieldValue::Hash256(_) => "Hash256",
            FieldValue::Blob(_) => "Blob",
            FieldValue::AccountId(_) => "AccountID",
            FieldValue::Amount(_) => "Amount",
            FieldValue::Object(_) => "STObject",
            FieldValue::Array(_) => "STArray",
            FieldValue::PathSet(_) => "PathSet",
            FieldValue::Vector256(_) => "Vector256",
            FieldValue::Issue(_) => "Issue",
            FieldValue::XChainBridge(_) => "XChainBridge",
            FieldValue::Currency(_) => "Currency",
            FieldValue::Named(_) => "Named",
        }
    }

    /// An account, from its classic address.
    pub fn account(address: &str) -> Result<Self, CodecError> {
        Ok(FieldValue::AccountId(xrpl_address_codec::decode_classic_address(address)?))
    }

    /// A symbolic enumeration value.
    pub fn named(name: impl Into<String>) -> Self {
        FieldValue::Named(name.into())
    }

    /// The nested object, if this is one.
    pub fn as_object(&self) -> Option<&FieldMap> {
        match self {
            FieldValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// The array elements, if this is an array.
    pub fn as_array(&self) -> Option<&[FieldMap]> {
        match self {
            FieldValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The account, if this is one.
    pub fn as_account_id(&self) -> Option<&AccountId> {
        match self {
            FieldValue::AccountId(id) => Some(id),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                FieldValue::$variant(value)
            }
        })*
    };
}

impl_from! {
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    [u8; 16] => Hash128,
    [u8; 20] => Hash160,
    [u8; 24] => Hash192,
    [u8; 32] => Hash256,
    Vec<u8> => Blob,
    AccountId => AccountId,
    Amount => Amount,
    FieldMap => Object,
    Vec<FieldMap> => Array,
    PathSet => PathSet,
    Vec<[u8; 32]> => Vector256,
    Issue => Issue,
    XChainBridge => XChainBridge,
    Currency => Currency,
}

/// An unordered map from field names to values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldMap(HashMap<String, FieldValue>);

impl FieldMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field, returning any previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Looks a field up.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Removes a field.
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.0.remove(name)
    }

    /// Whether the field is present.
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates fields in no particular order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, FieldValue> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FieldMap(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, FieldValue);
    type IntoIter = hash_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = hash_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One level deeper, or `DepthLimitExceeded`.
pub(crate) fn descend(depth: usize, config: &CodecConfig) -> Result<usize, CodecError> {
    let next = depth + 1;
    if next > config.max_depth {
        return Err(CodecError::DepthLimitExceeded {
            limit: config.max_depth,
        });
    }
    Ok(next)
}

/// Resolves an integer field's value to its numeric code.
fn integer_code(def: &FieldDefinition, value: &FieldValue) -> Result<Option<u64>, CodecError> {
    let code = match (def.declared_type, value) {
        (TypeTag::UInt8, FieldValue::UInt8(v)) => u64::from(*v),
        (TypeTag::UInt16, FieldValue::UInt16(v)) => u64::from(*v),
        (TypeTag::UInt32, FieldValue::UInt32(v)) => u64::from(*v),
        (TypeTag::UInt64, FieldValue::UInt64(v)) => *v,
        (_, FieldValue::Named(name)) => {
            let Some(table) = NamedEnum::for_field(def.name) else {
                return Ok(None);
            };
            let code = table.code_of(name).ok_or_else(|| CodecError::InvalidValue {
                field: def.name.into(),
                reason: format!("unknown name '{name}'"),
            })?;
            u64::from(code)
        }
        _ => return Ok(None),
    };
    if !matches!(value, FieldValue::Named(_)) {
        reject_named_code(def, code)?;
    }
    Ok(Some(code))
}

/// Codes with a symbolic name must be written as that name, since decoding
/// always produces the name.
fn reject_named_code(def: &FieldDefinition, code: u64) -> Result<(), CodecError> {
    let name = NamedEnum::for_field(def.name)
        .and_then(|table| u32::try_from(code).ok().and_then(|c| table.name_of(c)));
    match name {
        Some(name) => Err(CodecError::InvalidValue {
            field: def.name.into(),
            reason: format!("code {code} must be given by its name '{name}'"),
        }),
        None => Ok(()),
    }
}

fn narrow<T: TryFrom<u64>>(def: &FieldDefinition, code: u64) -> Result<T, CodecError> {
    T::try_from(code).map_err(|_| CodecError::InvalidValue {
        field: def.name.into(),
        reason: format!("{code} does not fit a {}", def.declared_type),
    })
}

/// Appends the body of one field (everything after its header).
pub(crate) fn write_value(
    sink: &mut BinarySerializer,
    def: &FieldDefinition,
    value: &FieldValue,
    depth: usize,
    config: &CodecConfig,
) -> Result<(), CodecError> {
    let mismatch = || CodecError::TypeMismatch {
        field: def.name.into(),
        expected: def.declared_type.name(),
        found: value.type_name(),
    };
    if matches!(
        def.declared_type,
        TypeTag::UInt8 | TypeTag::UInt16 | TypeTag::UInt32 | TypeTag::UInt64
    ) {
        let code = integer_code(def, value)?.ok_or_else(mismatch)?;
        match def.declared_type {
            TypeTag::UInt8 => sink.write_u8(narrow(def, code)?),
            TypeTag::UInt16 => sink.write_u16(narrow(def, code)?),
            TypeTag::UInt32 => sink.write_u32(narrow(def, code)?),
            _ => sink.write_u64(code),
        }
        return Ok(());
    }
    match (def.declared_type, value) {
        (TypeTag::Hash128, FieldValue::Hash128(h)) => sink.write_bytes(h),
        (TypeTag::Hash160, FieldValue::Hash160(h)) => sink.write_bytes(h),
        (TypeTag::Hash192, FieldValue::Hash192(h)) => sink.write_bytes(h),
        (TypeTag::Hash256, FieldValue::Hash256(h)) => sink.write_bytes(h),
        (TypeTag::Blob, FieldValue::Blob(bytes)) => sink.write_vl(bytes)?,
        (TypeTag::AccountId, FieldValue::AccountId(id)) => sink.write_vl(id.as_bytes())?,
        (TypeTag::Amount, FieldValue::Amount(amount)) => amount.write(sink)?,
        (TypeTag::Currency, FieldValue::Currency(currency)) => {
            sink.write_bytes(currency.as_bytes())
        }
        (TypeTag::Issue, FieldValue::Issue(issue)) => issue.write(sink)?,
        (TypeTag::XChainBridge, FieldValue::XChainBridge(bridge)) => bridge.write(sink)?,
        (TypeTag::PathSet, FieldValue::PathSet(paths)) => paths.write(sink),
        (TypeTag::Vector256, FieldValue::Vector256(hashes)) => {
            let body: Vec<u8> = hashes.iter().flatten().copied().collect();
            sink.write_vl(&body)?;
        }
        (TypeTag::StObject, FieldValue::Object(map)) => {
            let depth = descend(depth, config)?;
            st_object::write_object(sink, map, st_object::ObjectScope::Nested, depth, config)?;
        }
        (TypeTag::StArray, FieldValue::Array(items)) => {
            let depth = descend(depth, config)?;
            st_array::write_array(sink, items, depth, config)?;
        }
        _ => return Err(mismatch()),
    }
    Ok(())
}

fn integer_value(def: &FieldDefinition, code: u64, raw: FieldValue) -> FieldValue {
    NamedEnum::for_field(def.name)
        .and_then(|table| u32::try_from(code).ok().and_then(|c| table.name_of(c)))
        .map(FieldValue::named)
        .unwrap_or(raw)
}

/// Reads the body of one field whose header has already been consumed.
pub(crate) fn read_value(
    parser: &mut BinaryParser<'_>,
    def: &FieldDefinition,
    depth: usize,
    config: &CodecConfig,
) -> Result<FieldValue, CodecError> {
    let value = match def.declared_type {
        TypeTag::UInt8 => {
            let v = parser.read_u8()?;
            integer_value(def, u64::from(v), FieldValue::UInt8(v))
        }
        TypeTag::UInt16 => {
            let v = parser.read_u16()?;
            integer_value(def, u64::from(v), FieldValue::UInt16(v))
        }
        TypeTag::UInt32 => {
            let v = parser.read_u32()?;
            integer_value(def, u64::from(v), FieldValue::UInt32(v))
        }
        TypeTag::UInt64 => FieldValue::UInt64(parser.read_u64()?),
        TypeTag::Hash128 => FieldValue::Hash128(parser.read_array()?),
        TypeTag::Hash160 => FieldValue::Hash160(parser.read_array()?),
        TypeTag::Hash192 => FieldValue::Hash192(parser.read_array()?),
        TypeTag::Hash256 => FieldValue::Hash256(parser.read_array()?),
        TypeTag::Blob => FieldValue::Blob(parser.read_vl()?.to_vec()),
        TypeTag::AccountId => FieldValue::AccountId(AccountId::from_slice(parser.read_vl()?)?),
        TypeTag::Amount => FieldValue::Amount(Amount::read(parser)?),
        TypeTag::Currency => FieldValue::Currency(Currency::from_bytes(parser.read_array()?)),
        TypeTag::Issue => FieldValue::Issue(Issue::read(parser)?),
        TypeTag::XChainBridge => FieldValue::XChainBridge(XChainBridge::read(parser)?),
        TypeTag::PathSet => FieldValue::PathSet(PathSet::read(parser)?),
        TypeTag::Vector256 => {
            let body = parser.read_vl()?;
            if body.len() % HASH256_LENGTH != 0 {
                return Err(CodecError::InvalidLength {
                    what: "Vector256",
                    expected: body.len() / HASH256_LENGTH * HASH256_LENGTH,
                    found: body.len(),
                });
            }
            FieldValue::Vector256(
                body.chunks_exact(HASH256_LENGTH)
                    .map(|chunk| chunk.to_fixed("Vector256 entry"))
                    .collect::<Result<_, _>>()?,
            )
        }
        TypeTag::StObject => {
            let depth = descend(depth, config)?;
            FieldValue::Object(st_object::read_object(
                parser,
                st_object::ObjectScope::Nested,
                depth,
                config,
            )?)
        }
        TypeTag::StArray => {
            let depth = descend(depth, config)?;
            FieldValue::Array(st_array::read_array(parser, depth, config)?)
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::definitions;

    fn def(name: &str) -> &'static FieldDefinition {
        definitions().field_by_name(name).unwrap()
    }

    fn body(name: &str, value: &FieldValue) -> Result<Vec<u8>, CodecError> {
        let mut sink = BinarySerializer::new();
        write_value(&mut sink, def(name), value, 0, &CodecConfig::default())?;
        Ok(sink.into_bytes())
    }

    fn read(name: &str, bytes: &[u8]) -> Result<FieldValue, CodecError> {
        let mut parser = BinaryParser::new(bytes);
        let value = read_value(&mut parser, def(name), 0, &CodecConfig::default())?;
        assert!(parser.is_empty());
        Ok(value)
    }

    #[test]
    fn integers_are_big_endian_at_their_declared_width() {
        assert_eq!(body("TickSize", &FieldValue::UInt8(5)).unwrap(), vec![5]);
        assert_eq!(body("SignerWeight", &FieldValue::UInt16(0x0102)).unwrap(), vec![1, 2]);
        assert_eq!(body("Sequence", &FieldValue::UInt32(1)).unwrap(), vec![0, 0, 0, 1]);
        assert_eq!(
            body("OwnerNode", &FieldValue::UInt64(0x0102)).unwrap(),
            vec![0, 0, 0, 0, 0, 0, 1, 2]
        );
    }

    #[test]
    fn mismatched_variants_name_both_types() {
        assert_eq!(
            body("Sequence", &FieldValue::UInt16(1)),
            Err(CodecError::TypeMismatch {
                field: "Sequence".into(),
                expected: "UInt32",
                found: "UInt16"
            })
        );
        assert!(matches!(
            body("Account", &FieldValue::Blob(vec![0; 20])),
            Err(CodecError::TypeMismatch { .. })
        ));
        assert!(matches!(
            body("Sequence", &FieldValue::named("Payment")),
            Err(CodecError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn enumerated_fields_accept_and_produce_names() {
        let encoded = body("TransactionType", &FieldValue::named("Payment")).unwrap();
        assert_eq!(encoded, vec![0, 0]);
        assert_eq!(read("TransactionType", &encoded).unwrap(), FieldValue::named("Payment"));

        // Unknown codes come back as integers and are written as integers.
        assert_eq!(
            read("TransactionType", &[0xFF, 0xF0]).unwrap(),
            FieldValue::UInt16(0xFFF0)
        );
        assert_eq!(
            body("TransactionType", &FieldValue::UInt16(0xFFF0)).unwrap(),
            vec![0xFF, 0xF0]
        );
        assert_eq!(
            read("TransactionResult", &[0]).unwrap(),
            FieldValue::named("tesSUCCESS")
        );
        assert!(matches!(
            body("TransactionType", &FieldValue::named("NotATransaction")),
            Err(CodecError::InvalidValue { .. })
        ));
    }

    #[test]
    fn named_codes_must_be_written_by_name() {
        // Decoding would turn these into names, so the integer form cannot round trip.
        for (field, value) in [
            ("TransactionType", FieldValue::UInt16(0)),
            ("LedgerEntryType", FieldValue::UInt16(0x61)),
            ("TransactionResult", FieldValue::UInt8(0)),
        ] {
            assert!(
                matches!(body(field, &value), Err(CodecError::InvalidValue { .. })),
                "{field}"
            );
        }
        // Fields without a name table take any integer.
        assert_eq!(body("Flags", &FieldValue::UInt32(0)).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn account_ids_carry_a_length_prefix() {
        let id = AccountId([0xAA; 20]);
        let encoded = body("Account", &FieldValue::AccountId(id)).unwrap();
        assert_eq!(encoded.len(), 21);
        assert_eq!(encoded[0], 0x14);
        assert_eq!(read("Account", &encoded).unwrap(), FieldValue::AccountId(id));

        let mut short = vec![0x13];
        short.extend_from_slice(&[0xAA; 19]);
        assert!(matches!(
            read("Account", &short),
            Err(CodecError::InvalidLength { expected: 20, found: 19, .. })
        ));
    }

    #[test]
    fn vector256_is_a_prefixed_concatenation() {
        let hashes = vec![[1u8; 32], [2u8; 32]];
        let encoded = body("Amendments", &FieldValue::Vector256(hashes.clone())).unwrap();
        assert_eq!(encoded[0], 64);
        assert_eq!(encoded.len(), 65);
        assert_eq!(read("Amendments", &encoded).unwrap(), FieldValue::Vector256(hashes));

        let mut ragged = vec![33];
        ragged.extend_from_slice(&[0; 33]);
        assert!(matches!(
            read("Amendments", &ragged),
            Err(CodecError::InvalidLength { what: "Vector256", .. })
        ));
    }

    #[test]
    fn blobs_and_hashes() {
        let encoded = body("SigningPubKey", &FieldValue::Blob(vec![])).unwrap();
        assert_eq!(encoded, vec![0]);
        let encoded = body("EmailHash", &FieldValue::Hash128([9; 16])).unwrap();
        assert_eq!(encoded, vec![9; 16]);
        assert!(matches!(
            read("LedgerHash", &[0; 31]),
            Err(CodecError::Truncated { needed: 32, .. })
        ));
    }

    #[test]
    fn accounts_from_classic_addresses() {
        let value = FieldValue::account("rrrrrrrrrrrrrrrrrrrrBZbvji").unwrap();
        assert_eq!(value, FieldValue::AccountId(AccountId::ONE));
        assert!(matches!(
            FieldValue::account("rrrrrrrrrrrrrrrrrrrrBZbvjj"),
            Err(CodecError::Address(_))
        ));
    }

    #[test]
    fn field_map_is_order_independent() {
        let a = FieldMap::new().with("Sequence", 1u32).with("Flags", 0u32);
        let b = FieldMap::new().with("Flags", 0u32).with("Sequence", 1u32);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        let collected: FieldMap = [("Sequence", 1u32), ("Flags", 0u32)].into_iter().collect();
        assert_eq!(collected, a);
    }
}
