// Path: crates/crypto/src/algorithms/mod.rs
//! Hash algorithm implementations.

pub mod hash;
