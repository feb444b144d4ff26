// Path: crates/address-codec/src/seed.rs
//! Family seeds (`s...`).

use crate::codec::{decode_checked, encode_with_prefix};
use crate::{ED25519_SEED_PREFIX, SECP256K1_SEED_PREFIX, SEED_LENGTH};
use xrpl_types::error::AddressCodecError;

/// The signing algorithm a seed is meant for. The seed's prefix records it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedType {
    /// secp256k1 seed, prefix `0x21`.
    Secp256k1,
    /// Ed25519 seed, prefix `01 E1 4B`.
    Ed25519,
}

impl SeedType {
    fn prefix(self) -> &'static [u8] {
        match self {
            SeedType::Secp256k1 => &[SECP256K1_SEED_PREFIX],
            SeedType::Ed25519 => &ED25519_SEED_PREFIX,
        }
    }
}

/// Encodes 16 bytes of seed entropy.
pub fn encode_seed(entropy: &[u8], seed_type: SeedType) -> Result<String, AddressCodecError> {
    encode_with_prefix(entropy, seed_type.prefix(), SEED_LENGTH)
}

/// Decodes a seed into its entropy and type.
pub fn decode_seed(seed: &str) -> Result<([u8; SEED_LENGTH], SeedType), AddressCodecError> {
    let body = decode_checked(seed)?;
    for seed_type in [SeedType::Ed25519, SeedType::Secp256k1] {
        let prefix = seed_type.prefix();
        if body.len() == prefix.len() + SEED_LENGTH && body.starts_with(prefix) {
            let mut entropy = [0u8; SEED_LENGTH];
            for (dst, src) in entropy.iter_mut().zip(body.iter().skip(prefix.len())) {
                *dst = *src;
            }
            return Ok((entropy, seed_type));
        }
    }
    Err(AddressCodecError::UnknownSeedType)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTROPY: &[u8; 16] = b"yurtyurtyurtyurt";

    #[test]
    fn encodes_known_seeds() {
        assert_eq!(
            encode_seed(ENTROPY, SeedType::Ed25519).unwrap(),
            "sEdTzRkEgPoxDG1mJ6WkSucHWnMkm1H"
        );
        assert_eq!(
            encode_seed(ENTROPY, SeedType::Secp256k1).unwrap(),
            "shPSkLzQNWfyXjZ7bbwgCky6twagA"
        );
    }

    #[test]
    fn decodes_both_seed_types() {
        let (entropy, kind) = decode_seed("sEdTzRkEgPoxDG1mJ6WkSucHWnMkm1H").unwrap();
        assert_eq!(&entropy, ENTROPY);
        assert_eq!(kind, SeedType::Ed25519);

        let (entropy, kind) = decode_seed("shPSkLzQNWfyXjZ7bbwgCky6twagA").unwrap();
        assert_eq!(&entropy, ENTROPY);
        assert_eq!(kind, SeedType::Secp256k1);
    }

    #[test]
    fn rejects_short_entropy() {
        assert!(matches!(
            encode_seed(&[0u8; 15], SeedType::Ed25519),
            Err(AddressCodecError::InvalidLength { expected: 16, found: 15, .. })
        ));
    }

    #[test]
    fn classic_address_is_not_a_seed() {
        assert_eq!(
            decode_seed("r3e7qTG44Mg8pHXgxPtyRx286Re5Urtx2p"),
            Err(AddressCodecError::UnknownSeedType)
        );
    }
}
