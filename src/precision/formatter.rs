// ============================================================================
// Precision Formatter
// Reformat a value into the exact text an exchange accepts
// ============================================================================

use super::descriptor::{PaddingMode, PrecisionDescriptor};
use crate::numeric::{DecimalString, NumericResult, RoundingMode};

/// Format a decimal string to a market precision.
///
/// # Arguments
/// * `value` - Plain decimal text (e.g. a computed price)
/// * `descriptor` - Decimal places, significant digits or tick size
/// * `rounding` - `Round`, `Truncate` or `RoundHalfEven`
/// * `padding` - Whether to keep trailing zeros up to the precision
///
/// # Example
/// ```
/// use exchange_precision::precision::{to_precision, PaddingMode, PrecisionDescriptor};
/// use exchange_precision::numeric::RoundingMode;
///
/// let tick = PrecisionDescriptor::tick_size("0.05").unwrap();
/// let price = to_precision("100.07", &tick, RoundingMode::Round, PaddingMode::NoPad).unwrap();
/// assert_eq!(price, "100.05");
/// ```
///
/// # Errors
/// - `MalformedNumber` if `value` does not parse
/// - `InvalidTickSize` / `InvalidPrecision` if the descriptor is unusable
pub fn to_precision(
    value: &str,
    descriptor: &PrecisionDescriptor,
    rounding: RoundingMode,
    padding: PaddingMode,
) -> NumericResult<String> {
    let parsed = DecimalString::parse(value)?;
    format_decimal(&parsed, descriptor, rounding, padding)
}

/// Format an already parsed value to a market precision.
///
/// Same contract as [`to_precision`].
pub fn format_decimal(
    value: &DecimalString,
    descriptor: &PrecisionDescriptor,
    rounding: RoundingMode,
    padding: PaddingMode,
) -> NumericResult<String> {
    descriptor.validate()?;

    let formatted = match descriptor {
        PrecisionDescriptor::DecimalPlaces(places) => {
            let rounded = value.round_to_scale(*places, rounding);
            match padding {
                PaddingMode::PadWithZeros if *places > 0 => {
                    rounded.to_string_padded(places.unsigned_abs())
                }
                _ => rounded.to_string(),
            }
        }

        PrecisionDescriptor::SignificantDigits(digits) => {
            let rounded = match significant_scale(value, *digits) {
                Some(scale) => value.round_to_scale(scale, rounding),
                None => DecimalString::zero(),
            };
            // Recompute after rounding: a carry can shift the leading digit
            match (padding, significant_scale(&rounded, *digits)) {
                (PaddingMode::PadWithZeros, Some(scale)) if scale > 0 => {
                    rounded.to_string_padded(scale.unsigned_abs())
                }
                _ => rounded.to_string(),
            }
        }

        PrecisionDescriptor::TickSize(step) => {
            let snapped = value.round_to_multiple(step, rounding)?;
            match padding {
                PaddingMode::PadWithZeros => {
                    snapped.to_string_padded(step.normalized().scale())
                }
                PaddingMode::NoPad => snapped.to_string(),
            }
        }
    };

    tracing::trace!(
        value = %value,
        precision = %descriptor,
        ?rounding,
        ?padding,
        formatted = %formatted,
        "formatted to precision"
    );

    Ok(formatted)
}

/// Fractional scale at which `value` keeps exactly `digits` significant
/// digits, or `None` for zero.
fn significant_scale(value: &DecimalString, digits: u32) -> Option<i32> {
    let exponent = value.leading_exponent()?;
    let scale = digits as i64 - 1 - exponent;
    Some(scale.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}
