// Path: crates/types/src/error/mod.rs
//! Core error types for the XRPL codecs.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors from the checksummed base58 address codec.
///
/// The variants separate "this is not base58 at all" and "the checksum is
/// corrupt" from "this is a well-formed value of the wrong kind", so callers
/// can produce precise diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressCodecError {
    /// The input contains a character outside the ledger's base58 alphabet.
    #[error("Invalid base58 character '{character}' at index {index}")]
    InvalidBase58 {
        /// The offending character.
        character: char,
        /// Its character index within the input.
        index: usize,
    },
    /// The decoded bytes are too short to hold a version prefix and checksum.
    #[error("Decoded value is too short ({length} bytes) to carry a version and checksum")]
    TooShort {
        /// Number of decoded bytes.
        length: usize,
    },
    /// The trailing four bytes do not match the double SHA-256 of the body.
    #[error("Checksum mismatch")]
    ChecksumMismatch,
    /// The value is well formed but carries a different version prefix.
    #[error("Unexpected version prefix: expected {}, found {}", hex::encode(.expected), hex::encode(.found))]
    UnexpectedVersion {
        /// The prefix the caller asked for.
        expected: Vec<u8>,
        /// The leading bytes actually present.
        found: Vec<u8>,
    },
    /// The payload has the wrong number of bytes for its kind.
    #[error("Invalid {what} length: expected {expected}, found {found}")]
    InvalidLength {
        /// The kind of payload being encoded or decoded.
        what: &'static str,
        /// The required length in bytes.
        expected: usize,
        /// The actual length in bytes.
        found: usize,
    },
    /// A public key has the right length but cannot be a ledger key.
    #[error("Invalid public key: {0}")]
    InvalidKey(String),
    /// A seed string matched none of the known seed prefixes.
    #[error("Unknown seed type: the prefix matches neither ed25519 nor secp256k1")]
    UnknownSeedType,
}

impl ErrorCode for AddressCodecError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidBase58 { .. } => "ADDRESS_INVALID_BASE58",
            Self::TooShort { .. } => "ADDRESS_TOO_SHORT",
            Self::ChecksumMismatch => "ADDRESS_CHECKSUM_MISMATCH",
            Self::UnexpectedVersion { .. } => "ADDRESS_UNEXPECTED_VERSION",
            Self::InvalidLength { .. } => "ADDRESS_INVALID_LENGTH",
            Self::InvalidKey(_) => "ADDRESS_INVALID_KEY",
            Self::UnknownSeedType => "ADDRESS_UNKNOWN_SEED_TYPE",
        }
    }
}

impl From<CryptoError> for AddressCodecError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::InvalidKeyLength { expected, got } => AddressCodecError::InvalidLength {
                what: "public key",
                expected,
                found: got,
            },
            CryptoError::InvalidKey(reason) => AddressCodecError::InvalidKey(reason),
        }
    }
}

/// Errors from hashing and key-derivation helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The provided key material is malformed.
    #[error("Invalid public key: {0}")]
    InvalidKey(String),
    /// The provided key material has an unexpected length.
    #[error("Invalid public key length: expected {expected}, got {got}")]
    InvalidKeyLength {
        /// The expected length in bytes.
        expected: usize,
        /// The actual length in bytes.
        got: usize,
    },
}

impl ErrorCode for CryptoError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidKey(_) => "CRYPTO_INVALID_KEY",
            Self::InvalidKeyLength { .. } => "CRYPTO_INVALID_KEY_LENGTH",
        }
    }
}

/// Errors from the canonical binary codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A field name has no entry in the definition registry.
    #[error("Unknown field name '{name}'")]
    UnknownField {
        /// The offending name.
        name: String,
    },
    /// A wire header names a field the registry does not know.
    #[error("Unknown field id (type code {type_code}, field code {field_code})")]
    UnknownFieldId {
        /// The decoded type code.
        type_code: u16,
        /// The decoded field code.
        field_code: u16,
    },
    /// A value's variant does not match the field's declared type.
    #[error("Field '{field}' expects a {expected} value, found {found}")]
    TypeMismatch {
        /// The field being encoded.
        field: String,
        /// The declared type.
        expected: &'static str,
        /// The supplied value's type.
        found: &'static str,
    },
    /// A value is outside the range its field allows.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// The field or type being processed.
        field: String,
        /// The violated constraint.
        reason: String,
    },
    /// An amount is out of range or malformed.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    /// A path step carries an invalid combination of members, or a path is empty.
    #[error("Invalid path: {0}")]
    InvalidPathStep(String),
    /// A currency code is malformed.
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),
    /// A fixed-width value has the wrong number of bytes.
    #[error("Invalid {what} length: expected {expected}, found {found}")]
    InvalidLength {
        /// The kind of value.
        what: &'static str,
        /// The required length in bytes.
        expected: usize,
        /// The actual length in bytes.
        found: usize,
    },
    /// A variable-length payload is larger than the format or configuration allows.
    #[error("Variable-length payload of {length} bytes exceeds the maximum of {max}")]
    LengthPrefixTooLong {
        /// Payload length in bytes.
        length: usize,
        /// The effective maximum.
        max: usize,
    },
    /// The input ended before a type-mandated byte count was satisfied.
    #[error("Unexpected end of input at offset {offset}: needed {needed} bytes, {available} available")]
    Truncated {
        /// Offset at which the read was attempted.
        offset: usize,
        /// Bytes required.
        needed: usize,
        /// Bytes remaining.
        available: usize,
    },
    /// A field header is malformed.
    #[error("Invalid field header at offset {offset}: {reason}")]
    InvalidFieldHeader {
        /// Offset of the header's first byte.
        offset: usize,
        /// What is wrong with it.
        reason: String,
    },
    /// The input is decodable but not in canonical form.
    #[error("Non-canonical encoding at offset {offset}: {reason}")]
    NonCanonical {
        /// Offset of the offending bytes.
        offset: usize,
        /// What is non-canonical.
        reason: String,
    },
    /// Objects and arrays are nested deeper than the configured limit.
    #[error("Nesting depth exceeds the limit of {limit}")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
    /// A hex string could not be decoded.
    #[error("Invalid hex input: {0}")]
    InvalidHex(String),
    /// An embedded address or key failed to decode.
    #[error("Address codec error: {0}")]
    Address(#[from] AddressCodecError),
    /// A failure while encoding the named field.
    #[error("Failed to encode field '{field}': {source}")]
    InField {
        /// The field being encoded.
        field: String,
        /// The underlying failure.
        #[source]
        source: Box<CodecError>,
    },
    /// A failure while decoding the named field, whose header started at `offset`.
    #[error("Failed to decode field '{field}' at offset {offset}: {source}")]
    AtField {
        /// The field being decoded.
        field: String,
        /// Offset of the field's header.
        offset: usize,
        /// The underlying failure.
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// Wraps this error with the name of the field being encoded.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        CodecError::InField {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Wraps this error with the name and header offset of the field being decoded.
    pub fn at_field(self, field: impl Into<String>, offset: usize) -> Self {
        CodecError::AtField {
            field: field.into(),
            offset,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, looking through `InField`/`AtField` wrappers.
    pub fn root_cause(&self) -> &CodecError {
        match self {
            Self::InField { source, .. } | Self::AtField { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns the chain of field names from the outermost wrapper inwards.
    pub fn field_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        loop {
            match current {
                Self::InField { field, source } | Self::AtField { field, source, .. } => {
                    path.push(field.as_str());
                    current = &**source;
                }
                _ => return path,
            }
        }
    }
}

impl ErrorCode for CodecError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownField { .. } => "CODEC_UNKNOWN_FIELD",
            Self::UnknownFieldId { .. } => "CODEC_UNKNOWN_FIELD_ID",
            Self::TypeMismatch { .. } => "CODEC_TYPE_MISMATCH",
            Self::InvalidValue { .. } => "CODEC_INVALID_VALUE",
            Self::InvalidAmount(_) => "CODEC_INVALID_AMOUNT",
            Self::InvalidPathStep(_) => "CODEC_INVALID_PATH_STEP",
            Self::InvalidCurrency(_) => "CODEC_INVALID_CURRENCY",
            Self::InvalidLength { .. } => "CODEC_INVALID_LENGTH",
            Self::LengthPrefixTooLong { .. } => "CODEC_LENGTH_PREFIX_TOO_LONG",
            Self::Truncated { .. } => "CODEC_TRUNCATED",
            Self::InvalidFieldHeader { .. } => "CODEC_INVALID_FIELD_HEADER",
            Self::NonCanonical { .. } => "CODEC_NON_CANONICAL",
            Self::DepthLimitExceeded { .. } => "CODEC_DEPTH_LIMIT_EXCEEDED",
            Self::InvalidHex(_) => "CODEC_INVALID_HEX",
            Self::Address(e) => e.code(),
            Self::InField { source, .. } | Self::AtField { source, .. } => source.code(),
        }
    }
}
