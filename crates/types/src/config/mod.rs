// Path: crates/types/src/config/mod.rs

//! Shared configuration structures for the codecs.
use crate::MAX_VL_LENGTH;
use serde::{Deserialize, Serialize};

/// Limits applied by the binary codec when encoding and decoding.
///
/// Every field has a serde default, so an empty TOML table yields
/// `CodecConfig::default()`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum nesting of objects and arrays. The top-level object is depth 0.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Upper bound on any variable-length payload, in bytes. Values above the
    /// format's own ceiling are clamped to it.
    #[serde(default = "default_max_blob_length")]
    pub max_blob_length: usize,
}

fn default_max_depth() -> usize {
    16
}
fn default_max_blob_length() -> usize {
    MAX_VL_LENGTH
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_blob_length: default_max_blob_length(),
        }
    }
}

impl CodecConfig {
    /// The VL limit actually enforced: the configured bound, never above the format ceiling.
    pub fn effective_max_blob_length(&self) -> usize {
        self.max_blob_length.min(MAX_VL_LENGTH)
    }
}
