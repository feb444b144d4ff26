// Path: crates/address-codec/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::indexing_slicing
    )
)]
//! # XRPL Address Codec
//!
//! Base58 encoding with the ledger's own alphabet, a version prefix naming the
//! kind of payload, and a 4-byte double SHA-256 checksum.
//!
//! The generic [`encode`]/[`decode`] pair carries a single version byte; the
//! `_with_prefix` forms accept multi-byte prefixes (Ed25519 seeds use three).
//! The kind-specific helpers (classic addresses, seeds, public keys) fix the
//! prefix and payload length for their kind.

pub mod address;
pub mod base58;
pub mod codec;
pub mod seed;

pub use address::{
    classic_address_from_public_key, classic_address_from_public_key_hex,
    decode_account_public_key, decode_classic_address, decode_node_public_key,
    encode_account_public_key, encode_classic_address, encode_node_public_key,
    is_valid_classic_address,
};
pub use codec::{decode, decode_with_prefix, encode, encode_with_prefix};
pub use seed::{decode_seed, encode_seed, SeedType};
pub use xrpl_types::error::AddressCodecError;

/// Version byte of a classic account address.
pub const ACCOUNT_ADDRESS_PREFIX: u8 = 0x00;
/// Version byte of an account public key.
pub const ACCOUNT_PUBLIC_KEY_PREFIX: u8 = 0x23;
/// Version byte of a node (validator) public key.
pub const NODE_PUBLIC_KEY_PREFIX: u8 = 0x1C;
/// Version byte of a secp256k1 family seed.
pub const SECP256K1_SEED_PREFIX: u8 = 0x21;
/// Version prefix of an Ed25519 seed; encodes to a leading `sEd`.
pub const ED25519_SEED_PREFIX: [u8; 3] = [0x01, 0xE1, 0x4B];

/// Account id length in bytes.
pub const ACCOUNT_ADDRESS_LENGTH: usize = 20;
/// Public key length in bytes, for both account and node keys.
pub const PUBLIC_KEY_LENGTH: usize = 33;
/// Seed entropy length in bytes.
pub const SEED_LENGTH: usize = 16;
/// Checksum length in bytes.
pub const CHECKSUM_LENGTH: usize = 4;
