//! Calculator trait and the shared error type.
//!
//! `Calculator` is the public seam between the algorithms and everything
//! that consumes them (registry, CLI, tests). Indices cross this boundary
//! signed so that the negative-input failure mode is representable.

use num_bigint::BigUint;

/// Error type for Fibonacci calculations.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// The requested index is negative.
    #[error("invalid argument: index must be non-negative, got {0}")]
    InvalidArgument(i64),

    /// The exact value of F(n) does not fit the calculator's fixed-width type.
    #[error("overflow: F({0}) exceeds the range of u64")]
    Overflow(u64),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Public trait for Fibonacci calculators.
pub trait Calculator: Send + Sync {
    /// Calculate F(n). Fails with [`FibError::InvalidArgument`] for `n < 0`.
    fn calculate(&self, n: i64) -> Result<BigUint, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Validate a signed index and move it into the unsigned domain.
pub(crate) fn validate_index(n: i64) -> Result<u64, FibError> {
    u64::try_from(n).map_err(|_| FibError::InvalidArgument(n))
}
