//! Error types for the bit-field utility operations.

use thiserror::Error;

/// Failures the utility operations can signal. Everything not covered
/// here is total and always produces a (possibly wrapped) value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitwiseError {
    /// Division with a zero divisor
    #[error("division by zero is not allowed")]
    DivisionByZero,

    /// Input string is not a valid number in the given base, or the
    /// value does not fit in 64 bits
    #[error("invalid base-{base} number: {input:?}")]
    InvalidFormat { input: String, base: u32 },
}

/// Result type alias for the utility operations
pub type BitwiseResult<T> = Result<T, BitwiseError>;
