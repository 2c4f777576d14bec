// ============================================================================
// Exchange Precision Library
// Exact string-based decimal arithmetic and market precision formatting
// ============================================================================

//! # Exchange Precision
//!
//! Exact decimal arithmetic over plain decimal strings, and the formatting
//! rules exchanges impose on prices and amounts.
//!
//! ## Features
//!
//! - **String in, string out**: values never pass through a float
//! - **Arbitrary precision**: no fixed digit limit on either side of the point
//! - **Three precision modes**: decimal places, significant digits, tick size
//! - **Explicit rounding and padding** on every call, no global state
//! - **Per-market rules**: price rounds, amount truncates, zero is rejected
//!
//! ## Example
//!
//! ```rust
//! use exchange_precision::prelude::*;
//!
//! // Exchange reports 8 decimals for the amount
//! let tick = parse_precision("8").unwrap();
//! assert_eq!(tick, "0.00000001");
//!
//! // Exact arithmetic
//! assert_eq!(string_mul("0.1", "0.2").unwrap(), "0.02");
//! let cost = string_mul("43250.5", "0.015").unwrap();
//!
//! // Snap to the exchange's precision before sending
//! let cents = PrecisionDescriptor::DecimalPlaces(2);
//! let sent = to_precision(&cost, &cents, RoundingMode::Truncate, PaddingMode::NoPad).unwrap();
//! assert_eq!(sent, "648.75");
//!
//! // Or let a market apply the per-field rules
//! let market = MarketPrecision::from_tick_sizes("BTC/USDT", "0.01", &tick).unwrap();
//! assert_eq!(market.amount_to_precision("0.123456789").unwrap(), "0.12345678");
//! ```

pub mod market;
pub mod numeric;
pub mod precise;
pub mod precision;

// Re-exports for convenience
pub mod prelude {
    pub use crate::market::{currency_to_precision, MarketError, MarketPrecision, MarketResult};
    pub use crate::numeric::{DecimalString, NumericError, NumericResult, RoundingMode};
    pub use crate::precise::{
        normalize, omit_zero, string_abs, string_add, string_div, string_eq, string_equals,
        string_ge, string_gt, string_le, string_lt, string_max, string_min, string_mod,
        string_mul, string_neg, string_sub,
    };
    pub use crate::precision::{
        parse_precision, precision_from_string, to_precision, PaddingMode, PrecisionDescriptor,
        PrecisionMode,
    };
}
