// Path: crates/binary-codec/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::indexing_slicing
    )
)]
//! # XRPL Binary Codec
//!
//! Canonical binary serialization of transactions and ledger objects.
//!
//! An object is a [`FieldMap`] of field names to typed [`FieldValue`]s. Encoding
//! resolves every name through the static field registry, writes fields in
//! ascending `(type_code, field_code)` order and drops the fields the registry
//! marks as not serialized. The output is therefore a function of the map's
//! content alone, which is what signatures and transaction ids are computed
//! over. Decoding reads the same format back, reporting the byte offset and
//! field path of any failure.
//!
//! The free functions use [`CodecConfig::default`]; build a [`Codec`] to apply
//! other limits.

pub mod definitions;
pub mod ledger_data;
pub mod ordering;
pub mod quality;
pub mod serdes;
pub mod signing;
pub mod types;

pub use definitions::{definitions, FieldDefinition, FieldId, TypeTag};
pub use ledger_data::{decode_ledger_data, LedgerData};
pub use quality::{decode_quality, encode_quality};
pub use signing::transaction_id;
pub use types::{
    Amount, Currency, FieldMap, FieldValue, Issue, IssuedAmount, IssuedValue, MptAmount, Path,
    PathSet, PathStep, XChainBridge,
};
pub use xrpl_types::config::CodecConfig;
pub use xrpl_types::error::CodecError;

use ordering::FieldFilter;
use serdes::{BinaryParser, BinarySerializer};
use types::st_object::{read_object, write_object, ObjectScope};

/// An encoder/decoder bound to a set of limits.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// A codec applying `config`.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The limits in force.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn serializer(&self) -> BinarySerializer {
        BinarySerializer::with_max_vl_length(self.config.effective_max_blob_length())
    }

    fn write_top_level(
        &self,
        sink: &mut BinarySerializer,
        map: &FieldMap,
        filter: FieldFilter,
    ) -> Result<(), CodecError> {
        write_object(sink, map, ObjectScope::TopLevel(filter), 0, &self.config)
    }

    /// Encodes a top-level object.
    pub fn encode(&self, map: &FieldMap) -> Result<Vec<u8>, CodecError> {
        let mut sink = self.serializer();
        self.write_top_level(&mut sink, map, FieldFilter::All)?;
        log::trace!(
            target: "binary_codec",
            "encoded {} fields into {} bytes",
            map.len(),
            sink.len()
        );
        Ok(sink.into_bytes())
    }

    /// Decodes a top-level object, consuming all of `bytes`.
    pub fn decode(&self, bytes: &[u8]) -> Result<FieldMap, CodecError> {
        let mut parser =
            BinaryParser::with_max_vl_length(bytes, self.config.effective_max_blob_length());
        let map = read_object(
            &mut parser,
            ObjectScope::TopLevel(FieldFilter::All),
            0,
            &self.config,
        )?;
        log::trace!(
            target: "binary_codec",
            "decoded {} bytes into {} fields",
            bytes.len(),
            map.len()
        );
        Ok(map)
    }

    /// Encodes a top-level object as upper-case hex.
    pub fn encode_hex(&self, map: &FieldMap) -> Result<String, CodecError> {
        self.encode(map).map(hex::encode_upper)
    }

    /// Decodes a top-level object from hex of either case.
    pub fn decode_hex(&self, hex_str: &str) -> Result<FieldMap, CodecError> {
        let bytes = hex::decode(hex_str).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
        self.decode(&bytes)
    }
}

/// Encodes `map` with the default limits.
pub fn encode(map: &FieldMap) -> Result<Vec<u8>, CodecError> {
    Codec::default().encode(map)
}

/// Decodes `bytes` with the default limits.
pub fn decode(bytes: &[u8]) -> Result<FieldMap, CodecError> {
    Codec::default().decode(bytes)
}

/// Encodes `map` as upper-case hex with the default limits.
pub fn encode_hex(map: &FieldMap) -> Result<String, CodecError> {
    Codec::default().encode_hex(map)
}

/// Decodes hex with the default limits.
pub fn decode_hex(hex_str: &str) -> Result<FieldMap, CodecError> {
    Codec::default().decode_hex(hex_str)
}

/// The single-signature signing payload of `map`.
pub fn encode_for_signing(map: &FieldMap) -> Result<Vec<u8>, CodecError> {
    Codec::default().encode_for_signing(map)
}

/// The multisignature signing payload of `map` for `signer`.
pub fn encode_for_multisigning(
    map: &FieldMap,
    signer: &xrpl_types::AccountId,
) -> Result<Vec<u8>, CodecError> {
    Codec::default().encode_for_multisigning(map, signer)
}

/// The payment channel claim payload.
pub fn encode_for_signing_claim(channel: &[u8; 32], drops: u64) -> Vec<u8> {
    Codec::default().encode_for_signing_claim(channel, drops)
}

/// The id of a signed transaction given as hex.
pub fn hash_tx_blob(blob_hex: &str) -> Result<String, CodecError> {
    Codec::default().hash_tx_blob(blob_hex)
}

/// Merges individually multisigned copies of a transaction.
pub fn multisign(blobs: &[&str]) -> Result<String, CodecError> {
    Codec::default().multisign(blobs)
}
