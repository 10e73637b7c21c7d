//! Error types for algorithm selection.

use crate::kind::HashType;
use thiserror::Error;

/// Errors raised while resolving an algorithm selector.
///
/// Computing a checksum or hash never fails; only turning a selector into an
/// algorithm instance can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The hash needs a seed the caller did not supply.
    #[error("{0} requires a seed and cannot be created without one")]
    SeedRequired(HashType),

    /// The algorithm name is not recognised.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Result type for algorithm selection.
pub type HashResult<T> = Result<T, HashError>;
