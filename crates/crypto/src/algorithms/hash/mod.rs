// Path: crates/crypto/src/algorithms/hash/mod.rs
//! Cryptographic hash functions using the RustCrypto digests

use crate::error::CryptoError;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};
use xrpl_types::AccountId;

/// Length of a compressed secp256k1 or prefixed Ed25519 public key.
pub const PUBLIC_KEY_LENGTH: usize = 33;
/// Leading byte that marks an Ed25519 public key.
pub const ED25519_PREFIX: u8 = 0xED;

/// Hash function trait
pub trait HashFunction {
    /// Hash a message and return the digest
    fn hash(&self, message: &[u8]) -> Vec<u8>;

    /// Get the digest size in bytes
    fn digest_size(&self) -> usize;

    /// Get the name of the hash function
    fn name(&self) -> &str;
}

/// SHA-256 hash function implementation
#[derive(Default, Clone)]
pub struct Sha256Hash;

impl HashFunction for Sha256Hash {
    fn hash(&self, message: &[u8]) -> Vec<u8> {
        Sha256::digest(message).to_vec()
    }

    fn digest_size(&self) -> usize {
        32
    }

    fn name(&self) -> &str {
        "SHA-256"
    }
}

/// Generic hasher that can use any hash function
pub struct GenericHasher<H: HashFunction> {
    /// Hash function implementation
    hash_function: H,
}

impl<H: HashFunction> GenericHasher<H> {
    /// Create a new hasher with the given hash function
    pub fn new(hash_function: H) -> Self {
        Self { hash_function }
    }

    /// Hash a message
    pub fn hash(&self, message: &[u8]) -> Vec<u8> {
        self.hash_function.hash(message)
    }

    /// Hash a message, then hash the digest again with the same function
    pub fn hash_twice(&self, message: &[u8]) -> Vec<u8> {
        self.hash_function.hash(&self.hash_function.hash(message))
    }

    /// Get the digest size in bytes
    pub fn digest_size(&self) -> usize {
        self.hash_function.digest_size()
    }

    /// Get the name of the hash function
    pub fn name(&self) -> &str {
        self.hash_function.name()
    }
}

/// SHA-256 of any byte-like value.
pub fn sha256<T: AsRef<[u8]>>(data: T) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(data.as_ref()));
    out
}

/// SHA-512 of any byte-like value.
pub fn sha512<T: AsRef<[u8]>>(data: T) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Sha512::digest(data.as_ref()));
    out
}

/// The first 32 bytes of SHA-512. The ledger uses this for transaction ids and
/// object keys.
pub fn sha512_half<T: AsRef<[u8]>>(data: T) -> [u8; 32] {
    let digest = Sha512::digest(data.as_ref());
    let mut out = [0u8; 32];
    for (dst, src) in out.iter_mut().zip(digest.iter()) {
        *dst = *src;
    }
    out
}

/// RIPEMD-160 of any byte-like value.
pub fn ripemd160<T: AsRef<[u8]>>(data: T) -> [u8; 20] {
    let mut out = [0u8; 20];
    out.copy_from_slice(&Ripemd160::digest(data.as_ref()));
    out
}

/// The 4-byte checksum appended to base58 payloads: the leading bytes of
/// SHA-256(SHA-256(data)).
pub fn address_checksum<T: AsRef<[u8]>>(data: T) -> [u8; 4] {
    let digest = GenericHasher::new(Sha256Hash).hash_twice(data.as_ref());
    let mut out = [0u8; 4];
    for (dst, src) in out.iter_mut().zip(digest.iter()) {
        *dst = *src;
    }
    out
}

/// Derives an account id as RIPEMD-160(SHA-256(public_key)).
///
/// A bare 32-byte Ed25519 key is accepted and gets the `0xED` marker first.
/// Any other key must be 33 bytes and start with `0x02`, `0x03` (compressed
/// secp256k1) or `0xED`.
pub fn account_id_from_public_key(public_key: &[u8]) -> Result<AccountId, CryptoError> {
    let mut key = Vec::with_capacity(PUBLIC_KEY_LENGTH);
    if public_key.len() == PUBLIC_KEY_LENGTH - 1 {
        key.push(ED25519_PREFIX);
    } else if public_key.len() != PUBLIC_KEY_LENGTH {
        return Err(CryptoError::InvalidKeyLength {
            expected: PUBLIC_KEY_LENGTH,
            got: public_key.len(),
        });
    }
    key.extend_from_slice(public_key);

    match key.first().copied() {
        Some(0x02) | Some(0x03) | Some(ED25519_PREFIX) => {}
        Some(other) => {
            return Err(CryptoError::InvalidKey(format!(
                "unrecognised key type byte 0x{:02X}",
                other
            )))
        }
        None => return Err(CryptoError::InvalidKey("empty key".into())),
    }

    let id = ripemd160(sha256(&key));
    log::trace!(target: "crypto", "derived account id {}", AccountId(id));
    Ok(AccountId(id))
}
