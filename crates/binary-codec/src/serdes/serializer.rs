// Path: crates/binary-codec/src/serdes/serializer.rs

//! The append-only sink encoders write into.

use super::field_id::encode_field_id;
use super::vl::encode_vl_length;
use crate::definitions::FieldId;
use xrpl_types::error::CodecError;
use xrpl_types::MAX_VL_LENGTH;

/// Accumulates encoded bytes.
#[derive(Debug, Clone, Default)]
pub struct BinarySerializer {
    buffer: Vec<u8>,
    max_vl_length: Option<usize>,
}

impl BinarySerializer {
    /// An empty sink accepting payloads up to the format ceiling.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty sink that rejects length-prefixed payloads above `max_vl_length`.
    pub fn with_max_vl_length(max_vl_length: usize) -> Self {
        Self {
            buffer: Vec::new(),
            max_vl_length: Some(max_vl_length.min(MAX_VL_LENGTH)),
        }
    }

    /// Appends raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Appends one byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    /// Appends a big-endian `u16`.
    pub fn write_u16(&mut self, value: u16) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Appends a big-endian `u32`.
    pub fn write_u32(&mut self, value: u32) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Appends a big-endian `u64`.
    pub fn write_u64(&mut self, value: u64) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Appends a length prefix followed by `payload`.
    pub fn write_vl(&mut self, payload: &[u8]) -> Result<(), CodecError> {
        if let Some(max) = self.max_vl_length {
            if payload.len() > max {
                return Err(CodecError::LengthPrefixTooLong {
                    length: payload.len(),
                    max,
                });
            }
        }
        let prefix = encode_vl_length(payload.len())?;
        self.write_bytes(&prefix);
        self.write_bytes(payload);
        Ok(())
    }

    /// Appends a field header.
    pub fn write_field_id(&mut self, id: FieldId) -> Result<(), CodecError> {
        let header = encode_field_id(id)?;
        self.write_bytes(&header);
        Ok(())
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Borrows the bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the sink, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}
