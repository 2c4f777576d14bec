// ============================================================================
// Market Formatting
// Per-field rounding rules applied before a value is sent to an exchange
// ============================================================================
//
// Field      | Descriptor | Rounding | Zero result
// -----------|------------|----------|---------------------
// price      | price      | Round    | BelowMinimumPrecision
// amount     | amount     | Truncate | BelowMinimumPrecision
// cost       | price      | Truncate | allowed
// fee        | price      | Round    | allowed

use super::config::MarketPrecision;
use super::errors::{MarketError, MarketResult};
use crate::numeric::{DecimalString, RoundingMode};
use crate::precision::{format_decimal, PaddingMode, PrecisionDescriptor};

impl MarketPrecision {
    /// Format an order price. Rounds half away from zero.
    ///
    /// # Errors
    /// `BelowMinimumPrecision` when the price rounds to zero.
    pub fn price_to_precision(&self, price: &str) -> MarketResult<String> {
        self.format_nonzero("price", price, &self.price, RoundingMode::Round)
    }

    /// Format an order amount. Truncates, so the order never exceeds what
    /// the caller asked for.
    ///
    /// # Errors
    /// `BelowMinimumPrecision` when the amount truncates to zero.
    pub fn amount_to_precision(&self, amount: &str) -> MarketResult<String> {
        self.format_nonzero("amount", amount, &self.amount, RoundingMode::Truncate)
    }

    /// Format a quote-currency cost with the price precision, truncating.
    pub fn cost_to_precision(&self, cost: &str) -> MarketResult<String> {
        self.format(cost, &self.price, RoundingMode::Truncate)
    }

    /// Format a fee with the price precision, rounding.
    pub fn fee_to_precision(&self, fee: &str) -> MarketResult<String> {
        self.format(fee, &self.price, RoundingMode::Round)
    }

    fn format(
        &self,
        value: &str,
        descriptor: &PrecisionDescriptor,
        rounding: RoundingMode,
    ) -> MarketResult<String> {
        let parsed = DecimalString::parse(value)?;
        Ok(format_decimal(&parsed, descriptor, rounding, self.padding)?)
    }

    fn format_nonzero(
        &self,
        field: &'static str,
        value: &str,
        descriptor: &PrecisionDescriptor,
        rounding: RoundingMode,
    ) -> MarketResult<String> {
        let parsed = DecimalString::parse(value)?;
        let formatted = format_decimal(&parsed, descriptor, rounding, self.padding)?;

        // Padded zeros ("0.000") are still zero
        if DecimalString::parse(&formatted)?.is_zero() {
            tracing::debug!(
                symbol = %self.symbol,
                field,
                value,
                precision = %descriptor,
                "value below minimum precision"
            );
            return Err(MarketError::BelowMinimumPrecision {
                symbol: self.symbol.clone(),
                field,
                precision: descriptor.to_string(),
            });
        }

        Ok(formatted)
    }
}

/// Format a currency balance or transfer amount. Rounds half away from zero.
///
/// With no known precision for the currency the input is validated and
/// returned unchanged.
pub fn currency_to_precision(
    value: &str,
    precision: Option<&PrecisionDescriptor>,
    padding: PaddingMode,
) -> MarketResult<String> {
    let parsed = DecimalString::parse(value)?;
    match precision {
        Some(descriptor) => Ok(format_decimal(&parsed, descriptor, RoundingMode::Round, padding)?),
        None => Ok(value.to_string()),
    }
}
