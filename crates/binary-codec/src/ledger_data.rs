// Path: crates/binary-codec/src/ledger_data.rs

//! Ledger headers.

use crate::serdes::BinaryParser;
use serde::{Deserialize, Serialize};
use xrpl_types::error::CodecError;

/// The fixed-layout header of a closed ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerData {
    /// Sequence number of the ledger.
    pub ledger_index: u32,
    /// Drops in existence.
    pub total_coins: u64,
    /// Hash of the previous ledger.
    pub parent_hash: String,
    /// Root of the transaction tree.
    pub transaction_hash: String,
    /// Root of the state tree.
    pub account_hash: String,
    /// Close time of the previous ledger, in seconds since the network epoch.
    pub parent_close_time: u32,
    /// Close time of this ledger.
    pub close_time: u32,
    /// Rounding applied to close times, in seconds.
    pub close_time_resolution: u8,
    /// Close flags.
    pub close_flags: u8,
}

impl LedgerData {
    /// Reads a header from the front of `bytes`. Anything after it is ignored.
    pub fn read(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut parser = BinaryParser::new(bytes);
        let hash = |p: &mut BinaryParser<'_>| p.read_array::<32>().map(hex::encode_upper);
        Ok(Self {
            ledger_index: parser.read_u32()?,
            total_coins: parser.read_u64()?,
            parent_hash: hash(&mut parser)?,
            transaction_hash: hash(&mut parser)?,
            account_hash: hash(&mut parser)?,
            parent_close_time: parser.read_u32()?,
            close_time: parser.read_u32()?,
            close_time_resolution: parser.read_u8()?,
            close_flags: parser.read_u8()?,
        })
    }
}

/// Decodes a hex-encoded ledger header.
pub fn decode_ledger_data(hex_str: &str) -> Result<LedgerData, CodecError> {
    let bytes = hex::decode(hex_str).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
    LedgerData::read(&bytes)
}
