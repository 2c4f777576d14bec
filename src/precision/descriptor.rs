// ============================================================================
// Precision Descriptors
// How a market declares the precision of prices and amounts
// ============================================================================

use crate::numeric::{DecimalString, NumericError, NumericResult, MAX_SCALE};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Precision Mode
// ============================================================================

/// How an exchange reports raw precision values in its market metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrecisionMode {
    /// Integer count of fractional digits (e.g. "8")
    #[default]
    DecimalPlaces,
    /// Integer count of significant digits (e.g. "5")
    SignificantDigits,
    /// Smallest accepted increment (e.g. "0.05")
    TickSize,
}

// ============================================================================
// Padding Mode
// ============================================================================

/// Whether formatted output keeps trailing zeros up to the precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaddingMode {
    /// Minimal representation, trailing zeros trimmed
    #[default]
    NoPad,
    /// Emit every fractional digit the precision allows
    PadWithZeros,
}

// ============================================================================
// Precision Descriptor
// ============================================================================

/// Target precision for a single formatted value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrecisionDescriptor {
    /// Digits after the decimal point; negative counts round left of it
    DecimalPlaces(i32),
    /// Digits counted from the first non-zero digit
    SignificantDigits(u32),
    /// Values must be multiples of this step
    TickSize(DecimalString),
}

impl PrecisionDescriptor {
    /// Tick-size descriptor from text.
    ///
    /// # Errors
    /// - `MalformedNumber` if `tick` does not parse
    /// - `InvalidTickSize` if it is zero or negative
    pub fn tick_size(tick: &str) -> NumericResult<Self> {
        let step = DecimalString::parse(tick)?;
        if !step.is_positive() {
            return Err(NumericError::InvalidTickSize(tick.to_string()));
        }
        Ok(PrecisionDescriptor::TickSize(step))
    }

    /// Tick-size descriptor equivalent to `scale` decimal places.
    pub fn tick_for_scale(scale: u32) -> Self {
        PrecisionDescriptor::TickSize(DecimalString::unit_at_scale(scale))
    }

    /// Interpret a raw exchange precision value under `mode`.
    ///
    /// # Errors
    /// - `MalformedNumber` if `raw` does not parse
    /// - `InvalidScale` for a non-integer decimal-place count
    /// - `InvalidPrecision` for a significant-digit count below one
    /// - `InvalidTickSize` for a non-positive tick
    pub fn from_raw(mode: PrecisionMode, raw: &str) -> NumericResult<Self> {
        match mode {
            PrecisionMode::DecimalPlaces => {
                let places = parse_integer(raw)?
                    .filter(|&(_, n)| n <= u128::from(MAX_SCALE))
                    .map(|(negative, n)| if negative { -(n as i32) } else { n as i32 })
                    .ok_or_else(|| NumericError::InvalidScale(raw.to_string()))?;
                Ok(PrecisionDescriptor::DecimalPlaces(places))
            }
            PrecisionMode::SignificantDigits => {
                let digits = parse_integer(raw)?
                    .filter(|&(negative, n)| !negative && n > 0 && n <= u128::from(MAX_SCALE))
                    .map(|(_, n)| n as u32)
                    .ok_or_else(|| {
                        NumericError::InvalidPrecision(format!(
                            "{raw:?} is not a significant digit count between 1 and {MAX_SCALE}"
                        ))
                    })?;
                Ok(PrecisionDescriptor::SignificantDigits(digits))
            }
            PrecisionMode::TickSize => Self::tick_size(raw),
        }
    }

    /// Validate the descriptor
    pub fn validate(&self) -> NumericResult<()> {
        match self {
            PrecisionDescriptor::DecimalPlaces(places) if places.unsigned_abs() > MAX_SCALE => {
                Err(NumericError::InvalidScale(places.to_string()))
            }
            PrecisionDescriptor::DecimalPlaces(_) => Ok(()),
            PrecisionDescriptor::SignificantDigits(0) => Err(NumericError::InvalidPrecision(
                "significant digits must be at least 1".to_string(),
            )),
            PrecisionDescriptor::SignificantDigits(digits) if *digits > MAX_SCALE => {
                Err(NumericError::InvalidPrecision(format!(
                    "significant digits must be at most {MAX_SCALE}, got {digits}"
                )))
            }
            PrecisionDescriptor::SignificantDigits(_) => Ok(()),
            PrecisionDescriptor::TickSize(step) if !step.is_positive() => {
                Err(NumericError::InvalidTickSize(step.to_string()))
            }
            PrecisionDescriptor::TickSize(step) if step.normalized().scale() > MAX_SCALE => {
                Err(NumericError::InvalidTickSize(format!(
                    "1e-{}",
                    step.normalized().scale()
                )))
            }
            PrecisionDescriptor::TickSize(_) => Ok(()),
        }
    }
}

impl fmt::Display for PrecisionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecisionDescriptor::DecimalPlaces(places) if *places >= 0 => {
                write!(f, "{}", DecimalString::unit_at_scale(places.unsigned_abs()))
            }
            PrecisionDescriptor::DecimalPlaces(places) => {
                write!(f, "1{}", "0".repeat(places.unsigned_abs() as usize))
            }
            PrecisionDescriptor::SignificantDigits(digits) => {
                write!(f, "{digits} significant digits")
            }
            PrecisionDescriptor::TickSize(step) => write!(f, "{step}"),
        }
    }
}

/// Sign and magnitude of an integer literal, `None` for fractions.
fn parse_integer(raw: &str) -> NumericResult<Option<(bool, u128)>> {
    let value = DecimalString::parse(raw)?;
    Ok(value.abs().to_u128().map(|n| (value.is_negative(), n)))
}

// ============================================================================
// Precision Parser
// ============================================================================

/// Convert an integer scale into its tick string.
///
/// `"8"` gives `"0.00000001"` and `"0"` gives `"1"`.
///
/// # Errors
/// - `MalformedNumber` if `scale` does not parse
/// - `InvalidScale` if it is negative, fractional, or above [`MAX_SCALE`]
pub fn parse_precision(scale: &str) -> NumericResult<String> {
    let invalid = || NumericError::InvalidScale(scale.to_string());

    let (negative, n) = parse_integer(scale)?.ok_or_else(invalid)?;
    if negative {
        return Err(invalid());
    }
    let n = u32::try_from(n)
        .ok()
        .filter(|&n| n <= MAX_SCALE)
        .ok_or_else(invalid)?;

    Ok(DecimalString::unit_at_scale(n).to_string())
}

/// Number of fractional digits a tick string declares.
///
/// `"0.001"` gives 3, `"1"` gives 0 and `"100"` gives -2, so the result can
/// be fed straight into `DecimalPlaces`.
///
/// # Errors
/// Returns `MalformedNumber` if `tick` does not parse.
pub fn precision_from_string(tick: &str) -> NumericResult<i32> {
    let value = DecimalString::parse(tick)?.normalized();
    if value.is_zero() {
        return Ok(0);
    }
    if value.scale() > 0 {
        return i32::try_from(value.scale())
            .map_err(|_| NumericError::OutOfRange(tick.to_string()));
    }

    // Whole number: count trailing integer zeros
    let rendered = value.abs().to_string();
    let zeros = rendered.len() - rendered.trim_end_matches('0').len();
    i32::try_from(zeros)
        .map(|z| -z)
        .map_err(|_| NumericError::OutOfRange(tick.to_string()))
}
