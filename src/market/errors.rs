// ============================================================================
// Market Errors
// ============================================================================

use crate::numeric::NumericError;
use thiserror::Error;

/// Errors raised while applying a market's precision rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    /// Parsing, arithmetic or formatting failed
    #[error(transparent)]
    Numeric(#[from] NumericError),

    /// Value rounds to zero under the market's precision
    #[error("{field} of {symbol} must be greater than minimum {field} precision of {precision}")]
    BelowMinimumPrecision {
        symbol: String,
        field: &'static str,
        precision: String,
    },

    /// Configuration rejected by `MarketPrecision::validate`
    #[error("invalid market configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for market precision operations
pub type MarketResult<T> = Result<T, MarketError>;
