// Path: crates/address-codec/src/address.rs
//! Classic `r...` addresses and the public-key encodings.

use crate::codec::{decode, encode, frame};
use crate::{
    ACCOUNT_ADDRESS_LENGTH, ACCOUNT_ADDRESS_PREFIX, ACCOUNT_PUBLIC_KEY_PREFIX,
    NODE_PUBLIC_KEY_PREFIX, PUBLIC_KEY_LENGTH,
};
use xrpl_crypto::account_id_from_public_key;
use xrpl_types::error::AddressCodecError;
use xrpl_types::AccountId;

/// Encodes an account id as a classic address.
pub fn encode_classic_address(account: &AccountId) -> String {
    frame(&[ACCOUNT_ADDRESS_PREFIX], account.as_ref())
}

/// Decodes a classic address into its account id.
pub fn decode_classic_address(address: &str) -> Result<AccountId, AddressCodecError> {
    let payload = decode(address, ACCOUNT_ADDRESS_PREFIX, ACCOUNT_ADDRESS_LENGTH)?;
    let id: [u8; ACCOUNT_ADDRESS_LENGTH] = payload.as_slice().try_into().map_err(|_| {
        AddressCodecError::InvalidLength {
            what: "account id",
            expected: ACCOUNT_ADDRESS_LENGTH,
            found: payload.len(),
        }
    })?;
    Ok(AccountId(id))
}

/// Returns true when `address` decodes as a classic address.
pub fn is_valid_classic_address(address: &str) -> bool {
    decode_classic_address(address).is_ok()
}

/// Derives the classic address of a public key.
///
/// Accepts a 33-byte key or a bare 32-byte Ed25519 key.
pub fn classic_address_from_public_key(public_key: &[u8]) -> Result<String, AddressCodecError> {
    let account = account_id_from_public_key(public_key)?;
    Ok(encode_classic_address(&account))
}

/// Hex-input form of [`classic_address_from_public_key`].
pub fn classic_address_from_public_key_hex(public_key: &str) -> Result<String, AddressCodecError> {
    let bytes = hex::decode(public_key)
        .map_err(|e| AddressCodecError::InvalidKey(format!("invalid hex: {}", e)))?;
    classic_address_from_public_key(&bytes)
}

/// Encodes a 33-byte node (validator) public key, `n...`.
pub fn encode_node_public_key(key: &[u8]) -> Result<String, AddressCodecError> {
    encode(key, NODE_PUBLIC_KEY_PREFIX, PUBLIC_KEY_LENGTH)
}

/// Decodes a node public key.
pub fn decode_node_public_key(encoded: &str) -> Result<Vec<u8>, AddressCodecError> {
    decode(encoded, NODE_PUBLIC_KEY_PREFIX, PUBLIC_KEY_LENGTH)
}

/// Encodes a 33-byte account public key, `a...`.
pub fn encode_account_public_key(key: &[u8]) -> Result<String, AddressCodecError> {
    encode(key, ACCOUNT_PUBLIC_KEY_PREFIX, PUBLIC_KEY_LENGTH)
}

/// Decodes an account public key.
pub fn decode_account_public_key(encoded: &str) -> Result<Vec<u8>, AddressCodecError> {
    decode(encoded, ACCOUNT_PUBLIC_KEY_PREFIX, PUBLIC_KEY_LENGTH)
}
