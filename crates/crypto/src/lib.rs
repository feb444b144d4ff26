// Path: crates/crypto/src/lib.rs
//! # XRPL Crypto Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::indexing_slicing
    )
)]
//! # XRPL Hashing
//!
//! The digests the ledger's codecs are built on: SHA-256 for address
//! checksums, SHA-512-half for transaction and object identifiers, and
//! RIPEMD-160 over SHA-256 for account ids.

pub mod algorithms;
pub mod error;

pub use algorithms::hash::{
    account_id_from_public_key, address_checksum, ripemd160, sha256, sha512, sha512_half,
};
