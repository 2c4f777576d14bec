// ============================================================================
// Rounding
// Reduce a DecimalString to a scale or to a multiple of a step
// ============================================================================

use super::decimal::{is_odd, pow10, DecimalString};
use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to treat digits beyond the target precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Round to nearest, exact halves away from zero
    #[default]
    Round,
    /// Drop excess digits (toward zero)
    Truncate,
    /// Round to nearest, exact halves to the even neighbour
    RoundHalfEven,
}

impl RoundingMode {
    /// Whether a magnitude moves one unit away from zero.
    ///
    /// `half` is how the discarded part compares with one half unit and
    /// `odd` is the parity of the kept part.
    #[inline]
    fn rounds_away(self, half: Ordering, odd: bool) -> bool {
        match self {
            RoundingMode::Truncate => false,
            RoundingMode::Round => half != Ordering::Less,
            RoundingMode::RoundHalfEven => match half {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => odd,
            },
        }
    }
}

/// One unit in the direction of `value`'s sign.
#[inline]
fn away_from_zero(value: &DecimalString) -> BigInt {
    BigInt::from(if value.is_negative() { -1 } else { 1 })
}

impl DecimalString {
    /// Round to `scale` fractional digits.
    ///
    /// A negative `scale` rounds to the left of the decimal point
    /// (`-2` rounds to hundreds). Values that already fit are returned
    /// unchanged, so this never adds digits.
    pub fn round_to_scale(&self, scale: i32, mode: RoundingMode) -> Self {
        let current = self.scale() as i64;
        let target = scale as i64;
        if target >= current {
            return self.clone();
        }

        // Every digit is discarded and they sum to less than half a unit
        let drop = (current - target) as u64;
        if drop > self.coefficient().magnitude().bits() + 1 {
            return Self::zero();
        }

        // Split the coefficient at the rounding position; both parts keep
        // the value's sign
        let divisor = pow10(drop as u32);
        let kept = self.coefficient() / &divisor;
        let discarded = self.coefficient() % &divisor;
        let half = (discarded.magnitude() * 2u8).cmp(divisor.magnitude());

        let kept = if mode.rounds_away(half, is_odd(&kept)) {
            kept + away_from_zero(self)
        } else {
            kept
        };

        if target >= 0 {
            Self::from_parts(kept, target as u32)
        } else {
            Self::from_parts(kept * pow10((-target) as u32), 0)
        }
    }

    /// Snap to a multiple of `step`.
    ///
    /// `Truncate` picks the multiple toward zero; the rounding modes pick the
    /// nearest multiple and break ties as their names say.
    ///
    /// # Errors
    /// Returns `InvalidTickSize` if `step` is zero or negative.
    pub fn round_to_multiple(&self, step: &Self, mode: RoundingMode) -> NumericResult<Self> {
        if !step.is_positive() {
            return Err(NumericError::InvalidTickSize(step.to_string()));
        }

        // self = quotient × step + remainder, |remainder| < step
        let quotient = self.checked_div(step, 0)?;
        let remainder = self.sub(&quotient.mul(step));
        let twice_remainder = remainder.abs().add(&remainder.abs());
        let half = twice_remainder.compare(step);

        let quotient = if mode.rounds_away(half, is_odd(quotient.coefficient())) {
            quotient.add(&Self::from_parts(away_from_zero(self), 0))
        } else {
            quotient
        };

        Ok(quotient.mul(step))
    }
}
