// Path: crates/binary-codec/src/types/st_object.rs

//! Objects: fields in canonical order, closed by `0xE1` when nested.

use super::{read_value, write_value, FieldMap};
use crate::definitions::{definitions, ARRAY_END_MARKER, OBJECT_END_MARKER};
use crate::ordering::{canonical_fields, FieldFilter};
use crate::serdes::{BinaryParser, BinarySerializer};
use xrpl_types::config::CodecConfig;
use xrpl_types::error::CodecError;

/// Where an object sits, which decides its terminator and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ObjectScope {
    /// The outermost object: no end marker, ends with the input.
    TopLevel(FieldFilter),
    /// An object inside another: closed by the object end marker.
    Nested,
}

/// Appends every kept field of `map` in canonical order.
pub(crate) fn write_object(
    sink: &mut BinarySerializer,
    map: &FieldMap,
    scope: ObjectScope,
    depth: usize,
    config: &CodecConfig,
) -> Result<(), CodecError> {
    let filter = match scope {
        ObjectScope::TopLevel(filter) => filter,
        ObjectScope::Nested => FieldFilter::All,
    };
    for (def, value) in canonical_fields(map, filter)? {
        sink.write_field_id(def.field_id)
            .and_then(|()| write_value(sink, def, value, depth, config))
            .map_err(|e| e.in_field(def.name))?;
    }
    if scope == ObjectScope::Nested {
        sink.write_field_id(OBJECT_END_MARKER)?;
    }
    Ok(())
}

/// Reads fields until the end marker (nested) or the end of input (top level).
pub(crate) fn read_object(
    parser: &mut BinaryParser<'_>,
    scope: ObjectScope,
    depth: usize,
    config: &CodecConfig,
) -> Result<FieldMap, CodecError> {
    let nested = scope == ObjectScope::Nested;
    let registry = definitions();
    let mut map = FieldMap::new();
    loop {
        if !nested && parser.is_empty() {
            return Ok(map);
        }
        let offset = parser.position();
        let id = parser.read_field_id()?;
        if id == OBJECT_END_MARKER {
            if nested {
                return Ok(map);
            }
            return Err(CodecError::InvalidFieldHeader {
                offset,
                reason: "object end marker outside a nested object".into(),
            });
        }
        if id == ARRAY_END_MARKER {
            return Err(CodecError::InvalidFieldHeader {
                offset,
                reason: "array end marker outside an array".into(),
            });
        }
        let def = registry.field_by_id(id).map_err(|e| {
            e.at_field(format!("#{}:{}", id.type_code, id.field_code), offset)
        })?;
        let value =
            read_value(parser, def, depth, config).map_err(|e| e.at_field(def.name, offset))?;
        if map.insert(def.name, value).is_some() {
            return Err(CodecError::NonCanonical {
                offset,
                reason: format!("field '{}' appears twice", def.name),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;

    fn nested(map: &FieldMap) -> Vec<u8> {
        let mut sink = BinarySerializer::new();
        write_object(&mut sink, map, ObjectScope::Nested, 1, &CodecConfig::default()).unwrap();
        sink.into_bytes()
    }

    #[test]
    fn nested_objects_end_with_the_marker() {
        let map = FieldMap::new().with("MemoType", vec![0xAB]);
        let bytes = nested(&map);
        assert_eq!(bytes, vec![0x7C, 0x01, 0xAB, 0xE1]);
        let mut parser = BinaryParser::new(&bytes);
        let decoded =
            read_object(&mut parser, ObjectScope::Nested, 1, &CodecConfig::default()).unwrap();
        assert_eq!(decoded, map);
        assert!(parser.is_empty());
    }

    #[test]
    fn a_missing_end_marker_is_truncation() {
        let bytes = [0x7C, 0x01, 0xAB];
        let mut parser = BinaryParser::new(&bytes);
        assert!(matches!(
            read_object(&mut parser, ObjectScope::Nested, 1, &CodecConfig::default()),
            Err(CodecError::Truncated { offset: 3, .. })
        ));
    }

    #[test]
    fn stray_markers_at_top_level_are_rejected() {
        for bytes in [[0xE1], [0xF1]] {
            let mut parser = BinaryParser::new(&bytes);
            assert!(matches!(
                read_object(
                    &mut parser,
                    ObjectScope::TopLevel(FieldFilter::All),
                    0,
                    &CodecConfig::default()
                ),
                Err(CodecError::InvalidFieldHeader { offset: 0, .. })
            ));
        }
    }

    #[test]
    fn duplicate_fields_are_rejected() {
        let bytes = [0x24, 0, 0, 0, 1, 0x24, 0, 0, 0, 2];
        let mut parser = BinaryParser::new(&bytes);
        assert!(matches!(
            read_object(
                &mut parser,
                ObjectScope::TopLevel(FieldFilter::All),
                0,
                &CodecConfig::default()
            ),
            Err(CodecError::NonCanonical { offset: 5, .. })
        ));
    }

    #[test]
    fn encode_errors_name_the_field() {
        let map = FieldMap::new().with("Sequence", FieldValue::UInt8(1));
        let mut sink = BinarySerializer::new();
        let err = write_object(
            &mut sink,
            &map,
            ObjectScope::TopLevel(FieldFilter::All),
            0,
            &CodecConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.field_path(), vec!["Sequence"]);
        assert!(matches!(err.root_cause(), CodecError::TypeMismatch { .. }));
    }
}
