// Path: crates/crypto/src/error.rs
//! Local error types for the `xrpl-crypto` crate.

// Re-export the canonical error type from the types crate.
pub use xrpl_types::error::CryptoError;
