//! Error types for key generation and validation.

use pkv_hash::HashError;
use thiserror::Error;

/// Key handling errors.
///
/// A key that simply fails verification is not an error: validation returns
/// `Ok(false)`. These variants signal malformed input or a broken configuration.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Lowercase letter in raw Base32 text.
    #[error("lowercase Base32 not accepted at position {position} (use A-Z and 2-7)")]
    LowercaseBase32 { position: usize },

    /// Character outside the Base32 alphabet.
    #[error("invalid Base32 character {character:?} at position {position}")]
    InvalidBase32Character { character: char, position: usize },

    /// Decoded key is too short to hold the requested field.
    #[error("key too short: {len} bytes, need at least {min}")]
    KeyTooShort { len: usize, min: usize },

    /// Subkey index points past the subkeys embedded in the key.
    #[error("subkey index {index} out of bounds (key holds {subkeys} subkeys)")]
    SubkeyIndexOutOfBounds { index: usize, subkeys: usize },

    /// Generator built without base keys.
    #[error("at least one base key is required")]
    NoBaseKeys,

    /// Generator built without hash functions.
    #[error("at least one hash function is required")]
    NoHashFunctions,

    /// Algorithm selector could not be resolved.
    #[error("unsupported configuration: {0}")]
    Hash(#[from] HashError),

    /// Definition file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Definition JSON is malformed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for key operations.
pub type KeyResult<T> = Result<T, KeyError>;
