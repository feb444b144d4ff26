// Path: crates/binary-codec/src/serdes/field_id.rs

//! Field headers.
//!
//! Type and field codes below 16 share a single byte as nibbles. A code of
//! 16 or more moves to its own extension byte and leaves a zero nibble behind.

use super::parser::BinaryParser;
use crate::definitions::FieldId;
use xrpl_types::error::CodecError;

const NIBBLE_LIMIT: u16 = 16;

/// Encodes the one-to-three byte header for `id`.
///
/// Both codes must lie in `1..=255`.
pub fn encode_field_id(id: FieldId) -> Result<Vec<u8>, CodecError> {
    let FieldId {
        type_code,
        field_code,
    } = id;
    for (what, code) in [("type code", type_code), ("field code", field_code)] {
        if code == 0 || code > u16::from(u8::MAX) {
            return Err(CodecError::InvalidValue {
                field: "field id".into(),
                reason: format!("{what} {code} is outside 1..=255"),
            });
        }
    }
    let (t, f) = (type_code as u8, field_code as u8);
    let header = match (type_code < NIBBLE_LIMIT, field_code < NIBBLE_LIMIT) {
        (true, true) => vec![(t << 4) | f],
        (true, false) => vec![t << 4, f],
        (false, true) => vec![f, t],
        (false, false) => vec![0, t, f],
    };
    Ok(header)
}

/// Decodes the header at the start of `bytes`, returning the id and the
/// number of bytes it occupied.
pub fn decode_field_id(bytes: &[u8]) -> Result<(FieldId, usize), CodecError> {
    let mut parser = BinaryParser::new(bytes);
    let id = parser.read_field_id()?;
    Ok((id, parser.position()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reference_headers() {
        let cases: [(u16, u16, &[u8]); 9] = [
            (2, 4, &[36]),   // Sequence
            (2, 2, &[34]),   // Flags
            (2, 14, &[46]),  // DestinationTag
            (18, 1, &[1, 18]), // Paths
            (16, 1, &[1, 16]), // CloseResolution
            (2, 33, &[32, 33]), // SetFlag
            (5, 18, &[80, 18]), // Nickname
            (16, 16, &[0, 16, 16]), // TickSize
            (16, 17, &[0, 16, 17]), // UNLModifyDisabling
        ];
        for (type_code, field_code, bytes) in cases {
            let id = FieldId::new(type_code, field_code);
            assert_eq!(encode_field_id(id).unwrap(), bytes, "{:?}", id);
            assert_eq!(decode_field_id(bytes).unwrap(), (id, bytes.len()));
        }
    }

    #[test]
    fn splits_a_packed_byte_into_nibbles() {
        assert_eq!(decode_field_id(&[155]).unwrap(), (FieldId::new(9, 11), 1));
    }

    #[test]
    fn rejects_codes_that_do_not_fit_a_byte() {
        assert!(encode_field_id(FieldId::new(0, 1)).is_err());
        assert!(encode_field_id(FieldId::new(1, 0)).is_err());
        assert!(encode_field_id(FieldId::new(1, 256)).is_err());
        assert!(encode_field_id(FieldId::new(300, 1)).is_err());
    }

    #[test]
    fn rejects_extension_bytes_below_sixteen() {
        let cases: [&[u8]; 5] = [
            &[0x10, 0x00],
            &[0x10, 0x0F],
            &[0x01, 0x02],
            &[0x00, 0x05, 0x20],
            &[0x00, 0x20, 0x00],
        ];
        for bytes in cases {
            assert!(
                matches!(decode_field_id(bytes), Err(CodecError::InvalidFieldHeader { .. })),
                "{:?}",
                bytes
            );
        }
    }

    #[test]
    fn reports_a_truncated_header() {
        assert!(matches!(
            decode_field_id(&[0x00, 0x10]),
            Err(CodecError::Truncated { offset: 2, .. })
        ));
        assert!(matches!(
            decode_field_id(&[]),
            Err(CodecError::Truncated { offset: 0, .. })
        ));
    }
}
