// Path: crates/binary-codec/src/ordering.rs

//! Canonical field order.
//!
//! Fields are written sorted by `(type_code, field_code)`. Fields the registry
//! marks as not serialized are dropped here, before any bytes are produced.

use crate::definitions::{definitions, FieldDefinition};
use crate::types::{FieldMap, FieldValue};
use xrpl_types::error::CodecError;

/// Which fields of an object to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFilter {
    /// Every serialized field.
    All,
    /// Only fields covered by a signature.
    SigningOnly,
}

impl FieldFilter {
    fn keeps(self, def: &FieldDefinition) -> bool {
        match self {
            FieldFilter::All => def.is_serialized,
            FieldFilter::SigningOnly => def.is_signing_field,
        }
    }
}

/// Resolves every key of `map` and returns the kept fields in canonical order.
///
/// Fails on the first name the registry does not know, or on a reserved end
/// marker used as a data field.
pub fn canonical_fields<'m>(
    map: &'m FieldMap,
    filter: FieldFilter,
) -> Result<Vec<(&'static FieldDefinition, &'m FieldValue)>, CodecError> {
    let registry = definitions();
    let mut fields = Vec::with_capacity(map.len());
    for (name, value) in map {
        let def = registry.field_by_name(name)?;
        if def.is_marker() {
            return Err(CodecError::InvalidValue {
                field: name.clone(),
                reason: "end markers are written by the encoder, not supplied as fields".into(),
            });
        }
        if !filter.keeps(def) {
            log::debug!(target: "binary_codec", "skipping field '{}' ({:?})", name, filter);
            continue;
        }
        fields.push((def, value));
    }
    fields.sort_unstable_by_key(|(def, _)| def.field_id);
    Ok(fields)
}
