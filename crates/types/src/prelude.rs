// Path: crates/types/src/prelude.rs

//! Extension traits shared by the codec crates.

use crate::error::CodecError;

/// An extension trait for `Option` that provides a convenient `required` method
/// to convert an `Option` to a `Result` with a specific error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, E>`, returning the provided
    /// error if the option is `None`.
    fn required<E>(self, err: E) -> Result<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    fn required<E>(self, err: E) -> Result<T, E> {
        self.ok_or(err)
    }
}

/// Checked conversion of a byte slice into a fixed-size array.
pub trait FixedBytes {
    /// Copies the slice into `[u8; N]`, failing with `CodecError::InvalidLength`
    /// naming `what` when the slice is not exactly `N` bytes long.
    fn to_fixed<const N: usize>(&self, what: &'static str) -> Result<[u8; N], CodecError>;
}

impl FixedBytes for [u8] {
    fn to_fixed<const N: usize>(&self, what: &'static str) -> Result<[u8; N], CodecError> {
        self.try_into().map_err(|_| CodecError::InvalidLength {
            what,
            expected: N,
            found: self.len(),
        })
    }
}
