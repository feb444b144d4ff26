// Path: crates/binary-codec/src/types/st_array.rs

//! Arrays: a run of wrapper-field objects closed by `0xF1`.
//!
//! Each element is a single-entry map whose key names an object-typed field
//! (`Memo`, `Signer`, ...) and whose value is that object.

use super::{read_value, write_value, FieldMap, FieldValue};
use crate::definitions::{definitions, TypeTag, ARRAY_END_MARKER, OBJECT_END_MARKER};
use crate::serdes::{BinaryParser, BinarySerializer};
use xrpl_types::config::CodecConfig;
use xrpl_types::error::CodecError;

/// Appends each element and the array end marker.
pub(crate) fn write_array(
    sink: &mut BinarySerializer,
    items: &[FieldMap],
    depth: usize,
    config: &CodecConfig,
) -> Result<(), CodecError> {
    let registry = definitions();
    for (index, item) in items.iter().enumerate() {
        let mut entries = item.iter();
        let (name, value) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(CodecError::InvalidValue {
                    field: format!("[{index}]"),
                    reason: format!("array elements hold exactly one field, found {}", item.len()),
                })
            }
        };
        let def = registry.field_by_name(name)?;
        if def.declared_type != TypeTag::StObject || def.is_marker() {
            return Err(CodecError::InvalidValue {
                field: name.clone(),
                reason: "array elements must be object-typed fields".into(),
            });
        }
        if !matches!(value, FieldValue::Object(_)) {
            return Err(CodecError::TypeMismatch {
                field: name.clone(),
                expected: TypeTag::StObject.name(),
                found: value.type_name(),
            }
            .in_field(format!("[{index}]")));
        }
        sink.write_field_id(def.field_id)
            .and_then(|()| write_value(sink, def, value, depth, config))
            .map_err(|e| e.in_field(format!("[{index}]")))?;
    }
    sink.write_field_id(ARRAY_END_MARKER)
}

/// Reads elements until the array end marker.
pub(crate) fn read_array(
    parser: &mut BinaryParser<'_>,
    depth: usize,
    config: &CodecConfig,
) -> Result<Vec<FieldMap>, CodecError> {
    let registry = definitions();
    let mut items = Vec::new();
    loop {
        let offset = parser.position();
        let id = parser.read_field_id()?;
        if id == ARRAY_END_MARKER {
            return Ok(items);
        }
        if id == OBJECT_END_MARKER {
            return Err(CodecError::InvalidFieldHeader {
                offset,
                reason: "object end marker where an array element was expected".into(),
            });
        }
        let def = registry.field_by_id(id).map_err(|e| {
            e.at_field(format!("#{}:{}", id.type_code, id.field_code), offset)
        })?;
        if def.declared_type != TypeTag::StObject {
            return Err(CodecError::InvalidFieldHeader {
                offset,
                reason: format!("array element '{}' is not an object", def.name),
            });
        }
        let value =
            read_value(parser, def, depth, config).map_err(|e| e.at_field(def.name, offset))?;
        items.push(FieldMap::new().with(def.name, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memo(data: &[u8]) -> FieldMap {
        FieldMap::new().with("Memo", FieldMap::new().with("MemoData", data.to_vec()))
    }

    fn encode(items: &[FieldMap]) -> Result<Vec<u8>, CodecError> {
        let mut sink = BinarySerializer::new();
        write_array(&mut sink, items, 1, &CodecConfig::default())?;
        Ok(sink.into_bytes())
    }

    #[test]
    fn elements_are_wrapped_and_terminated() {
        let items = vec![memo(&[1]), memo(&[2, 3])];
        let bytes = encode(&items).unwrap();
        assert_eq!(
            bytes,
            vec![0xEA, 0x7D, 0x01, 0x01, 0xE1, 0xEA, 0x7D, 0x02, 0x02, 0x03, 0xE1, 0xF1]
        );
        let mut parser = BinaryParser::new(&bytes);
        assert_eq!(read_array(&mut parser, 1, &CodecConfig::default()).unwrap(), items);
        assert!(parser.is_empty());
    }

    #[test]
    fn an_empty_array_is_just_the_marker() {
        assert_eq!(encode(&[]).unwrap(), vec![0xF1]);
    }

    #[test]
    fn elements_must_be_single_object_fields() {
        let two = memo(&[1]).with("Signer", FieldMap::new());
        assert!(matches!(encode(&[two]), Err(CodecError::InvalidValue { .. })));

        let not_object_field = FieldMap::new().with("Sequence", 1u32);
        assert!(matches!(encode(&[not_object_field]), Err(CodecError::InvalidValue { .. })));

        let wrong_value = FieldMap::new().with("Memo", 1u32);
        let err = encode(&[wrong_value]).unwrap_err();
        assert!(matches!(err.root_cause(), CodecError::TypeMismatch { .. }));
    }

    #[test]
    fn decode_rejects_non_object_elements() {
        // Sequence header inside an array.
        let bytes = [0x24, 0, 0, 0, 1, 0xF1];
        let mut parser = BinaryParser::new(&bytes);
        assert!(matches!(
            read_array(&mut parser, 1, &CodecConfig::default()),
            Err(CodecError::InvalidFieldHeader { offset: 0, .. })
        ));
    }
}
