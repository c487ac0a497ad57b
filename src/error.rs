//! Error types for random generation.

use thiserror::Error;

/// Result type for random generation operations.
pub type Result<T> = std::result::Result<T, RndError>;

/// Errors that can occur while producing a bounded random integer.
#[derive(Error, Debug)]
pub enum RndError {
    /// Upper bound argument was not a plain non-negative decimal integer.
    #[error("invalid upper bound {0:?}: expected a non-negative decimal integer")]
    InvalidBound(String),

    /// The OS secure random source could not be initialized or probed.
    #[error("failed to initialize the system entropy source")]
    EntropyUnavailable,

    /// Random number generation failed.
    #[error("random generation failed")]
    RandomFailed,
}
