// Path: crates/address-codec/src/codec.rs
//! Prefix + payload + checksum framing over ledger base58.

use crate::base58::{decode_base58, encode_base58};
use crate::CHECKSUM_LENGTH;
use xrpl_crypto::address_checksum;
use xrpl_types::error::AddressCodecError;

/// Encodes `payload` behind a single version byte.
///
/// Fails with `InvalidLength` when the payload is not `expected_length` bytes.
pub fn encode(
    payload: &[u8],
    version: u8,
    expected_length: usize,
) -> Result<String, AddressCodecError> {
    encode_with_prefix(payload, &[version], expected_length)
}

/// Decodes a string produced by [`encode`] and returns the payload.
pub fn decode(
    encoded: &str,
    expected_version: u8,
    expected_length: usize,
) -> Result<Vec<u8>, AddressCodecError> {
    decode_with_prefix(encoded, &[expected_version], expected_length)
}

/// Encodes `payload` behind a version prefix of any length.
pub fn encode_with_prefix(
    payload: &[u8],
    prefix: &[u8],
    expected_length: usize,
) -> Result<String, AddressCodecError> {
    if payload.len() != expected_length {
        return Err(AddressCodecError::InvalidLength {
            what: "payload",
            expected: expected_length,
            found: payload.len(),
        });
    }
    Ok(frame(prefix, payload))
}

/// Appends the checksum to `prefix ‖ payload` and base58-encodes the result.
pub(crate) fn frame(prefix: &[u8], payload: &[u8]) -> String {
    let mut body = Vec::with_capacity(prefix.len() + payload.len() + CHECKSUM_LENGTH);
    body.extend_from_slice(prefix);
    body.extend_from_slice(payload);
    let checksum = address_checksum(&body);
    body.extend_from_slice(&checksum);
    encode_base58(&body)
}

/// Decodes a string produced by [`encode_with_prefix`].
///
/// Checks run in a fixed order so callers can tell failures apart: base58
/// validity, then the checksum, then the version prefix, then the payload
/// length. A corrupted string therefore reports `ChecksumMismatch`, while a
/// valid string of another kind reports `UnexpectedVersion`.
pub fn decode_with_prefix(
    encoded: &str,
    expected_prefix: &[u8],
    expected_length: usize,
) -> Result<Vec<u8>, AddressCodecError> {
    let body = decode_checked(encoded)?;
    let found_prefix = body.get(..expected_prefix.len()).unwrap_or(&body);
    if found_prefix != expected_prefix {
        return Err(AddressCodecError::UnexpectedVersion {
            expected: expected_prefix.to_vec(),
            found: found_prefix.to_vec(),
        });
    }
    let payload = body.get(expected_prefix.len()..).unwrap_or_default();
    if payload.len() != expected_length {
        return Err(AddressCodecError::InvalidLength {
            what: "payload",
            expected: expected_length,
            found: payload.len(),
        });
    }
    Ok(payload.to_vec())
}

/// Decodes base58 and verifies the trailing checksum. Returns prefix + payload.
pub(crate) fn decode_checked(encoded: &str) -> Result<Vec<u8>, AddressCodecError> {
    let mut raw = decode_base58(encoded)?;
    if raw.len() <= CHECKSUM_LENGTH {
        return Err(AddressCodecError::TooShort { length: raw.len() });
    }
    let checksum = raw.split_off(raw.len() - CHECKSUM_LENGTH);
    if address_checksum(&raw).as_slice() != checksum.as_slice() {
        log::trace!(target: "address_codec", "checksum mismatch decoding {}", encoded);
        return Err(AddressCodecError::ChecksumMismatch);
    }
    Ok(raw)
}
