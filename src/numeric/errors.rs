// ============================================================================
// Numeric Errors
// Error types for exact decimal arithmetic and precision formatting
// ============================================================================

use thiserror::Error;

/// Errors that can occur while parsing, computing or formatting decimals.
///
/// Every variant is a local data or programmer error. None of them is
/// transient, so callers should never retry an operation that produced one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Input text is not a plain decimal literal
    #[error("malformed number: {0:?}")]
    MalformedNumber(String),
    /// Divisor or modulus is zero
    #[error("division by zero")]
    DivisionByZero,
    /// Scale is negative or not an integer
    #[error("invalid scale: {0:?}")]
    InvalidScale(String),
    /// Tick size is zero or negative
    #[error("invalid tick size: {0:?}")]
    InvalidTickSize(String),
    /// Significant digit count is zero or otherwise unusable
    #[error("invalid precision: {0}")]
    InvalidPrecision(String),
    /// Value does not fit the target representation
    #[error("value out of range: {0}")]
    OutOfRange(String),
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
