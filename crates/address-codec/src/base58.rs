// Path: crates/address-codec/src/base58.rs
//! Raw base58 over the ledger alphabet. No prefix or checksum handling.

use bs58::Alphabet;
use xrpl_types::error::AddressCodecError;

/// The ledger's base58 alphabet. Same characters as Bitcoin's, different order.
pub const ALPHABET: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

fn alphabet() -> &'static Alphabet {
    Alphabet::RIPPLE
}

/// Encodes bytes with the ledger alphabet.
pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).with_alphabet(alphabet()).into_string()
}

/// Decodes a ledger-alphabet base58 string.
pub fn decode_base58(s: &str) -> Result<Vec<u8>, AddressCodecError> {
    bs58::decode(s)
        .with_alphabet(alphabet())
        .into_vec()
        .map_err(|e| map_decode_error(s, e))
}

fn map_decode_error(input: &str, err: bs58::decode::Error) -> AddressCodecError {
    let char_at = |byte_index: usize| {
        input
            .get(byte_index..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    };
    match err {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            AddressCodecError::InvalidBase58 { character, index }
        }
        bs58::decode::Error::NonAsciiCharacter { index } => AddressCodecError::InvalidBase58 {
            character: char_at(index),
            index,
        },
        _ => AddressCodecError::InvalidBase58 {
            character: char_at(0),
            index: 0,
        },
    }
}
