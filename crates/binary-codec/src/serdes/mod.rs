// Path: crates/binary-codec/src/serdes/mod.rs

//! Low-level wire primitives: field headers, length prefixes, and the
//! cursor and sink the type codecs read from and write to.

pub mod field_id;
pub mod parser;
pub mod serializer;
pub mod vl;

pub use field_id::{decode_field_id, encode_field_id};
pub use parser::BinaryParser;
pub use serializer::BinarySerializer;
pub use vl::{decode_vl_length, encode_vl_length};
