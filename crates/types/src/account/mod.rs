// Path: crates/types/src/account/mod.rs

//! Defines the canonical `AccountId`.
//!
//! An account id is the 20-byte RIPEMD-160 of the SHA-256 of an account's public
//! key. Derivation lives in `xrpl-crypto`; the textual `r...` form lives in
//! `xrpl-address-codec`. This type only carries the raw bytes.

use crate::error::CodecError;
use crate::prelude::FixedBytes;
use serde::{Deserialize, Serialize};

/// Length of an account id in bytes.
pub const ACCOUNT_ID_LENGTH: usize = 20;

/// A unique identifier for a ledger account.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
#[serde(transparent)]
pub struct AccountId(pub [u8; ACCOUNT_ID_LENGTH]);

impl AccountId {
    /// The all-zero account id, `rrrrrrrrrrrrrrrrrrrrrhoLvTp`.
    pub const ZERO: AccountId = AccountId([0u8; ACCOUNT_ID_LENGTH]);

    /// The account id whose last byte is one, `rrrrrrrrrrrrrrrrrrrrBZbvji`.
    /// Used as a placeholder issuer by the ledger.
    pub const ONE: AccountId = AccountId([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    ]);

    /// Builds an account id from a slice that must be exactly 20 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(Self(bytes.to_fixed("AccountID")?))
    }

    /// Parses an account id from 40 hex characters (either case).
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let bytes = hex::decode(s).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Returns the upper-case hex form of the id.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LENGTH] {
        &self.0
    }
}

impl AsRef<[u8]> for AccountId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ACCOUNT_ID_LENGTH]> for AccountId {
    fn from(bytes: [u8; ACCOUNT_ID_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<AccountId> for [u8; ACCOUNT_ID_LENGTH] {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl TryFrom<&[u8]> for AccountId {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
