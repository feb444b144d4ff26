// Path: crates/binary-codec/src/definitions/mod.rs

//! The field definition registry.
//!
//! Every field the codec knows is listed once in [`fields`], keyed by its
//! `(type_code, field_code)` pair. The registry is built on first use and is
//! immutable afterwards, so lookups from any number of threads need no locking.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use xrpl_types::error::CodecError;
use xrpl_types::prelude::OptionExt;

pub mod enums;
pub mod fields;

pub use enums::NamedEnum;

/// The wire types a field can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeTag {
    /// 16-bit unsigned integer.
    UInt16,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit unsigned integer.
    UInt64,
    /// 128-bit hash.
    Hash128,
    /// 256-bit hash.
    Hash256,
    /// Native, issued or MPT amount.
    Amount,
    /// Variable-length byte string.
    Blob,
    /// 20-byte account id.
    #[serde(rename = "AccountID")]
    AccountId,
    /// Nested object.
    #[serde(rename = "STObject")]
    StObject,
    /// Array of single-field objects.
    #[serde(rename = "STArray")]
    StArray,
    /// 8-bit unsigned integer.
    UInt8,
    /// 160-bit hash.
    Hash160,
    /// Payment paths.
    PathSet,
    /// List of 256-bit hashes.
    Vector256,
    /// 192-bit hash.
    Hash192,
    /// Asset identifier: a currency with issuer, or XRP.
    Issue,
    /// Cross-chain bridge descriptor.
    XChainBridge,
    /// Bare 160-bit currency code.
    Currency,
}

impl TypeTag {
    /// Every tag, in type-code order.
    pub const ALL: [TypeTag; 18] = [
        TypeTag::UInt16,
        TypeTag::UInt32,
        TypeTag::UInt64,
        TypeTag::Hash128,
        TypeTag::Hash256,
        TypeTag::Amount,
        TypeTag::Blob,
        TypeTag::AccountId,
        TypeTag::StObject,
        TypeTag::StArray,
        TypeTag::UInt8,
        TypeTag::Hash160,
        TypeTag::PathSet,
        TypeTag::Vector256,
        TypeTag::Hash192,
        TypeTag::Issue,
        TypeTag::XChainBridge,
        TypeTag::Currency,
    ];

    /// The type code written in field headers.
    pub const fn code(self) -> u16 {
        match self {
            TypeTag::UInt16 => 1,
            TypeTag::UInt32 => 2,
            TypeTag::UInt64 => 3,
            TypeTag::Hash128 => 4,
            TypeTag::Hash256 => 5,
            TypeTag::Amount => 6,
            TypeTag::Blob => 7,
            TypeTag::AccountId => 8,
            TypeTag::StObject => 14,
            TypeTag::StArray => 15,
            TypeTag::UInt8 => 16,
            TypeTag::Hash160 => 17,
            TypeTag::PathSet => 18,
            TypeTag::Vector256 => 19,
            TypeTag::Hash192 => 21,
            TypeTag::Issue => 24,
            TypeTag::XChainBridge => 25,
            TypeTag::Currency => 26,
        }
    }

    /// Resolves a type code.
    pub fn from_code(code: u16) -> Option<TypeTag> {
        TypeTag::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// The name the ledger's published definitions use for this type.
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::UInt16 => "UInt16",
            TypeTag::UInt32 => "UInt32",
            TypeTag::UInt64 => "UInt64",
            TypeTag::Hash128 => "Hash128",
            TypeTag::Hash256 => "Hash256",
            TypeTag::Amount => "Amount",
            TypeTag::Blob => "Blob",
            TypeTag::AccountId => "AccountID",
            TypeTag::StObject => "STObject",
            TypeTag::StArray => "STArray",
            TypeTag::UInt8 => "UInt8",
            TypeTag::Hash160 => "Hash160",
            TypeTag::PathSet => "PathSet",
            TypeTag::Vector256 => "Vector256",
            TypeTag::Hash192 => "Hash192",
            TypeTag::Issue => "Issue",
            TypeTag::XChainBridge => "XChainBridge",
            TypeTag::Currency => "Currency",
        }
    }

    /// Whether fields of this type carry a length prefix after their header.
    pub const fn is_vl_encoded(self) -> bool {
        matches!(self, TypeTag::Blob | TypeTag::AccountId | TypeTag::Vector256)
    }
}

impl core::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies a field on the wire and fixes its place in canonical order.
///
/// The derived ordering compares `type_code` first, then `field_code`, which is
/// exactly the canonical serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId {
    /// The declared type's code.
    pub type_code: u16,
    /// The field's ordinal within its type.
    pub field_code: u16,
}

impl FieldId {
    /// Builds a field id.
    pub const fn new(type_code: u16, field_code: u16) -> Self {
        Self {
            type_code,
            field_code,
        }
    }
}

/// Header of the marker that closes a nested object.
pub const OBJECT_END_MARKER: FieldId = FieldId::new(14, 1);
/// Header of the marker that closes an array.
pub const ARRAY_END_MARKER: FieldId = FieldId::new(15, 1);

/// Everything the codec needs to know about one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// The field's name.
    pub name: &'static str,
    /// Its wire id.
    pub field_id: FieldId,
    /// Its declared type.
    pub declared_type: TypeTag,
    /// Whether a length prefix follows the header.
    pub is_vl_encoded: bool,
    /// Whether the field appears in binary form at all.
    pub is_serialized: bool,
    /// Whether the field is covered by a signature.
    pub is_signing_field: bool,
}

impl FieldDefinition {
    /// Whether this is one of the reserved end markers rather than a data field.
    pub fn is_marker(&self) -> bool {
        self.field_id == OBJECT_END_MARKER || self.field_id == ARRAY_END_MARKER
    }
}

/// The registry: field definitions indexed by name and by wire id.
#[derive(Debug)]
pub struct Definitions {
    fields: Vec<FieldDefinition>,
    by_name: HashMap<&'static str, usize>,
    by_id: HashMap<FieldId, usize>,
}

static DEFINITIONS: Lazy<Definitions> = Lazy::new(Definitions::build);

/// Returns the process-wide registry.
pub fn definitions() -> &'static Definitions {
    &DEFINITIONS
}

impl Definitions {
    fn build() -> Self {
        let fields: Vec<FieldDefinition> = fields::FIELDS
            .iter()
            .map(|&(name, declared_type, field_code)| FieldDefinition {
                name,
                field_id: FieldId::new(declared_type.code(), field_code),
                declared_type,
                is_vl_encoded: declared_type.is_vl_encoded(),
                is_serialized: field_code <= u8::MAX as u16,
                is_signing_field: field_code <= u8::MAX as u16
                    && !fields::NON_SIGNING_FIELDS.contains(&name),
            })
            .collect();

        let mut by_name = HashMap::with_capacity(fields.len());
        let mut by_id = HashMap::with_capacity(fields.len());
        for (i, def) in fields.iter().enumerate() {
            by_name.insert(def.name, i);
            by_id.insert(def.field_id, i);
        }
        log::debug!(
            target: "binary_codec",
            "field registry built with {} definitions",
            fields.len()
        );
        Self {
            fields,
            by_name,
            by_id,
        }
    }

    /// Looks a field up by name.
    pub fn lookup_by_name(&self, name: &str) -> Option<&FieldDefinition> {
        self.by_name.get(name).and_then(|&i| self.fields.get(i))
    }

    /// Looks a field up by wire id.
    pub fn lookup_by_id(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.by_id.get(&id).and_then(|&i| self.fields.get(i))
    }

    /// Like [`Definitions::lookup_by_name`], failing with `UnknownField`.
    pub fn field_by_name(&self, name: &str) -> Result<&FieldDefinition, CodecError> {
        self.lookup_by_name(name).required(CodecError::UnknownField {
            name: name.to_string(),
        })
    }

    /// Like [`Definitions::lookup_by_id`], failing with `UnknownFieldId`.
    pub fn field_by_id(&self, id: FieldId) -> Result<&FieldDefinition, CodecError> {
        self.lookup_by_id(id).required(CodecError::UnknownFieldId {
            type_code: id.type_code,
            field_code: id.field_code,
        })
    }

    /// Iterates every definition in table order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter()
    }

    /// Number of known fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the registry is empty. It never is once built.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_and_ids_are_unique() {
        let defs = definitions();
        let names: HashSet<_> = defs.iter().map(|d| d.name).collect();
        let ids: HashSet<_> = defs.iter().map(|d| d.field_id).collect();
        assert_eq!(names.len(), defs.len());
        assert_eq!(ids.len(), defs.len());
    }

    #[test]
    fn resolves_common_fields() {
        let defs = definitions();
        let account = defs.field_by_name("Account").unwrap();
        assert_eq!(account.field_id, FieldId::new(8, 1));
        assert!(account.is_vl_encoded);
        assert!(account.is_signing_field);

        let fee = defs.field_by_id(FieldId::new(6, 8)).unwrap();
        assert_eq!(fee.name, "Fee");
        assert_eq!(fee.declared_type, TypeTag::Amount);
        assert!(!fee.is_vl_encoded);
    }

    #[test]
    fn signature_fields_are_not_signed() {
        let defs = definitions();
        for name in ["TxnSignature", "Signers", "MasterSignature", "Signature"] {
            let def = defs.field_by_name(name).unwrap();
            assert!(def.is_serialized, "{}", name);
            assert!(!def.is_signing_field, "{}", name);
        }
        assert!(defs.field_by_name("SigningPubKey").unwrap().is_signing_field);
    }

    #[test]
    fn bookkeeping_fields_are_not_serialized() {
        let defs = definitions();
        for name in ["hash", "index", "taker_gets_funded", "taker_pays_funded"] {
            assert!(!defs.field_by_name(name).unwrap().is_serialized, "{}", name);
        }
    }

    #[test]
    fn unknown_lookups_report_the_offending_key() {
        let defs = definitions();
        assert_eq!(
            defs.field_by_name("NotAField"),
            Err(CodecError::UnknownField {
                name: "NotAField".into()
            })
        );
        assert_eq!(
            defs.field_by_id(FieldId::new(2, 200)),
            Err(CodecError::UnknownFieldId {
                type_code: 2,
                field_code: 200
            })
        );
    }

    #[test]
    fn type_codes_round_trip() {
        for tag in TypeTag::ALL {
            assert_eq!(TypeTag::from_code(tag.code()), Some(tag));
        }
        assert_eq!(TypeTag::from_code(9), None);
    }

    #[test]
    fn markers_are_registered() {
        let defs = definitions();
        assert!(defs.field_by_id(OBJECT_END_MARKER).unwrap().is_marker());
        assert!(defs.field_by_id(ARRAY_END_MARKER).unwrap().is_marker());
    }
}
