// Path: crates/binary-codec/src/signing.rs

//! Signing payloads, transaction identifiers and multisignature assembly.
//!
//! Each payload starts with a four-byte hash prefix naming what is signed or
//! hashed, so that bytes valid in one context cannot be replayed in another.

use crate::ordering::FieldFilter;
use crate::serdes::BinarySerializer;
use crate::types::{FieldMap, FieldValue};
use crate::Codec;
use xrpl_crypto::sha512_half;
use xrpl_types::error::CodecError;
use xrpl_types::AccountId;

/// Prefix of a single-signature signing payload (`STX\0`).
pub const TRANSACTION_SIGN_PREFIX: [u8; 4] = [0x53, 0x54, 0x58, 0x00];
/// Prefix of a multisignature signing payload (`SMT\0`).
pub const TRANSACTION_MULTISIGN_PREFIX: [u8; 4] = [0x53, 0x4D, 0x54, 0x00];
/// Prefix of a payment channel claim (`CLM\0`).
pub const PAYMENT_CHANNEL_CLAIM_PREFIX: [u8; 4] = [0x43, 0x4C, 0x4D, 0x00];
/// Prefix hashed with a signed transaction to form its id (`TXN\0`).
pub const TRANSACTION_ID_PREFIX: [u8; 4] = [0x54, 0x58, 0x4E, 0x00];

const SIGNATURE_FIELDS: [&str; 3] = ["TxnSignature", "Signers", "SigningPubKey"];

/// SHA-512-half of `TXN\0` followed by the signed transaction's bytes.
pub fn transaction_id(signed: &[u8]) -> [u8; 32] {
    let mut payload = Vec::with_capacity(TRANSACTION_ID_PREFIX.len() + signed.len());
    payload.extend_from_slice(&TRANSACTION_ID_PREFIX);
    payload.extend_from_slice(signed);
    sha512_half(&payload)
}

fn signer_account(signer: &FieldMap) -> Option<AccountId> {
    signer
        .get("Signer")?
        .as_object()?
        .get("Account")?
        .as_account_id()
        .copied()
}

impl Codec {
    /// The bytes a single signer signs: `STX\0` and the signing fields.
    pub fn encode_for_signing(&self, map: &FieldMap) -> Result<Vec<u8>, CodecError> {
        let mut sink = self.serializer();
        sink.write_bytes(&TRANSACTION_SIGN_PREFIX);
        self.write_top_level(&mut sink, map, FieldFilter::SigningOnly)?;
        Ok(sink.into_bytes())
    }

    /// The bytes `signer` signs when contributing to a multisignature.
    ///
    /// `SigningPubKey` is always written empty, and the signer's account id is
    /// appended after the fields.
    pub fn encode_for_multisigning(
        &self,
        map: &FieldMap,
        signer: &AccountId,
    ) -> Result<Vec<u8>, CodecError> {
        let mut map = map.clone();
        map.insert("SigningPubKey", Vec::<u8>::new());
        let mut sink = self.serializer();
        sink.write_bytes(&TRANSACTION_MULTISIGN_PREFIX);
        self.write_top_level(&mut sink, &map, FieldFilter::SigningOnly)?;
        sink.write_bytes(signer.as_bytes());
        Ok(sink.into_bytes())
    }

    /// The bytes signed to authorize a payment channel claim.
    pub fn encode_for_signing_claim(&self, channel: &[u8; 32], drops: u64) -> Vec<u8> {
        let mut sink = BinarySerializer::new();
        sink.write_bytes(&PAYMENT_CHANNEL_CLAIM_PREFIX);
        sink.write_bytes(channel);
        sink.write_u64(drops);
        sink.into_bytes()
    }

    /// The upper-case hex id of a signed transaction given as hex.
    ///
    /// The transaction must carry a signature or signing key; an unsigned
    /// transaction has no id yet.
    pub fn hash_tx_blob(&self, blob_hex: &str) -> Result<String, CodecError> {
        let bytes = hex::decode(blob_hex).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
        let map = self.decode(&bytes)?;
        if !SIGNATURE_FIELDS.iter().any(|name| map.contains_key(name)) {
            return Err(CodecError::InvalidValue {
                field: "transaction".into(),
                reason: "not signed: no TxnSignature, Signers or SigningPubKey".into(),
            });
        }
        Ok(hex::encode_upper(transaction_id(&bytes)))
    }

    /// Combines individually multisigned copies of one transaction.
    ///
    /// The result is the first blob's transaction with a `Signers` array holding
    /// every signer entry, sorted by ascending account id.
    pub fn multisign(&self, blobs: &[&str]) -> Result<String, CodecError> {
        let mut decoded = blobs
            .iter()
            .map(|blob| self.decode_hex(blob))
            .collect::<Result<Vec<_>, _>>()?;
        let mut signers: Vec<(AccountId, FieldMap)> = Vec::new();
        for (index, tx) in decoded.iter().enumerate() {
            let entries = tx
                .get("Signers")
                .and_then(FieldValue::as_array)
                .ok_or_else(|| CodecError::InvalidValue {
                    field: "Signers".into(),
                    reason: format!("blob {index} carries no Signers array"),
                })?;
            for entry in entries {
                let account = signer_account(entry).ok_or_else(|| CodecError::InvalidValue {
                    field: "Signers".into(),
                    reason: format!("blob {index} has a signer entry without Signer.Account"),
                })?;
                signers.push((account, entry.clone()));
            }
        }
        if decoded.is_empty() {
            return Err(CodecError::InvalidValue {
                field: "Signers".into(),
                reason: "no transactions to combine".into(),
            });
        }
        let mut tx = decoded.swap_remove(0);
        signers.sort_by(|(a, _), (b, _)| a.cmp(b));
        log::trace!(target: "binary_codec", "combining {} signer entries", signers.len());
        tx.insert(
            "Signers",
            signers.into_iter().map(|(_, entry)| entry).collect::<Vec<_>>(),
        );
        self.encode_hex(&tx)
    }
}
