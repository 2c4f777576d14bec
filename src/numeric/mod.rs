// ============================================================================
// Numeric Module
// Exact decimal arithmetic on big-integer coefficients
// ============================================================================
//
// This module provides:
// - DecimalString: signed BigInt coefficient + fractional scale, parsed from text
// - RoundingMode: Round (half away from zero), Truncate, RoundHalfEven
// - NumericError: Error types for parsing, arithmetic and formatting
//
// Design principles:
// - No floating-point operations anywhere
// - Add, subtract and multiply are exact; division takes an explicit scale
// - Every fallible operation returns Result (no panics)
// - Requested scales are capped at MAX_SCALE so output size stays bounded

mod decimal;
mod errors;
mod rounding;

pub use decimal::{DecimalString, MAX_SCALE};
pub use errors::{NumericError, NumericResult};
pub use rounding::RoundingMode;
