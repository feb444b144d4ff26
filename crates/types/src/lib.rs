// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # XRPL Codec Types
//!
//! This crate is the foundational library for the XRPL client codecs, containing
//! the shared identifiers, error types, and configuration objects.
//!
//! ## Architectural Role
//!
//! As the base crate, `xrpl-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. This structure prevents
//! circular dependencies between the hashing layer, the address codec, and the
//! binary codec, and gives them a single definition of `AccountId` and of the
//! error enums they report.

/// The largest payload that can be described by a variable-length prefix.
pub const MAX_VL_LENGTH: usize = 918_744;

/// The 20-byte `AccountId` identifying a ledger account.
pub mod account;
/// Shared configuration structures for the codecs.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// A prelude containing useful extension traits like `OptionExt`.
pub mod prelude;

pub use account::AccountId;
