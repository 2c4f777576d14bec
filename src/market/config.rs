// ============================================================================
// Market Precision Configuration
// Per-market price and amount precision, derived once from exchange metadata
// ============================================================================

use super::errors::{MarketError, MarketResult};
use crate::precision::{PaddingMode, PrecisionDescriptor, PrecisionMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision rules for one market
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarketPrecision {
    /// The market symbol (e.g. "BTC/USDT", "ETH-PERP")
    pub symbol: String,

    /// Precision of prices, costs and fees
    pub price: PrecisionDescriptor,

    /// Precision of order amounts
    pub amount: PrecisionDescriptor,

    /// Padding applied to every formatted value
    pub padding: PaddingMode,
}

impl MarketPrecision {
    /// Create a new configuration with required parameters
    pub fn new(
        symbol: impl Into<String>,
        price: PrecisionDescriptor,
        amount: PrecisionDescriptor,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            amount,
            padding: PaddingMode::NoPad,
        }
    }

    /// Builder method: Set padding mode
    pub fn with_padding(mut self, padding: PaddingMode) -> Self {
        self.padding = padding;
        self
    }

    /// Builder method: Set price precision
    pub fn with_price_precision(mut self, price: PrecisionDescriptor) -> Self {
        self.price = price;
        self
    }

    /// Builder method: Set amount precision
    pub fn with_amount_precision(mut self, amount: PrecisionDescriptor) -> Self {
        self.amount = amount;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> MarketResult<()> {
        if self.symbol.is_empty() {
            return Err(MarketError::InvalidConfig(
                "Symbol cannot be empty".to_string(),
            ));
        }

        self.price.validate().map_err(|err| {
            MarketError::InvalidConfig(format!("price precision of {}: {err}", self.symbol))
        })?;
        self.amount.validate().map_err(|err| {
            MarketError::InvalidConfig(format!("amount precision of {}: {err}", self.symbol))
        })?;

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MarketPrecision {
    /// Market declared with integer decimal counts.
    ///
    /// The counts are converted to tick sizes up front (`8` becomes
    /// `0.00000001`), so later formatting only ever snaps to a tick.
    pub fn from_decimals(
        symbol: impl Into<String>,
        price_decimals: u32,
        amount_decimals: u32,
    ) -> Self {
        Self::new(
            symbol,
            PrecisionDescriptor::tick_for_scale(price_decimals),
            PrecisionDescriptor::tick_for_scale(amount_decimals),
        )
    }

    /// Market declared with tick sizes (e.g. price "0.05", amount "0.001").
    pub fn from_tick_sizes(
        symbol: impl Into<String>,
        price_tick: &str,
        amount_tick: &str,
    ) -> MarketResult<Self> {
        Ok(Self::new(
            symbol,
            PrecisionDescriptor::tick_size(price_tick)?,
            PrecisionDescriptor::tick_size(amount_tick)?,
        ))
    }

    /// Market whose prices scale with magnitude (significant digits) while
    /// amounts use a fixed number of decimal places.
    pub fn from_significant_digits(
        symbol: impl Into<String>,
        price_digits: u32,
        amount_decimals: i32,
    ) -> Self {
        Self::new(
            symbol,
            PrecisionDescriptor::SignificantDigits(price_digits),
            PrecisionDescriptor::DecimalPlaces(amount_decimals),
        )
    }

    /// Market built from the raw precision fields an exchange reports,
    /// interpreted under that exchange's precision mode.
    pub fn from_exchange(
        mode: PrecisionMode,
        symbol: impl Into<String>,
        raw_price: &str,
        raw_amount: &str,
    ) -> MarketResult<Self> {
        Ok(Self::new(
            symbol,
            PrecisionDescriptor::from_raw(mode, raw_price)?,
            PrecisionDescriptor::from_raw(mode, raw_amount)?,
        ))
    }
}
