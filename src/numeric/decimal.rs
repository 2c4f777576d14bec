// ============================================================================
// Decimal String
// Exact base-10 number backed by a big-integer coefficient and a scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::str::FromStr;

/// Largest fractional scale a division or a precision may request.
///
/// Results are materialized as digits, so an unbounded scale taken from
/// exchange metadata would allocate without limit.
pub const MAX_SCALE: u32 = 1_000;

/// 10^exp
#[inline]
pub(crate) fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

/// Parity of an integer, ignoring sign.
#[inline]
pub(crate) fn is_odd(value: &BigInt) -> bool {
    !(value % 2u8).is_zero()
}

/// Exact decimal number parsed from, and serialized back to, plain text.
///
/// The value is `coefficient × 10^-scale`. The coefficient carries the sign,
/// so zero is never negative. `scale` is the number of stored fractional
/// digits and may include trailing zeros until the value is normalized.
///
/// Values are immutable; every operation returns a new value. Arithmetic is
/// performed on the integer coefficient and never goes through binary
/// floating point.
///
/// # Example
/// ```
/// use exchange_precision::numeric::DecimalString;
///
/// let a: DecimalString = "0.1".parse().unwrap();
/// let b: DecimalString = "0.2".parse().unwrap();
/// assert_eq!(a.mul(&b).to_string(), "0.02");
/// assert_eq!(a.add(&b).to_string(), "0.3");
/// ```
#[derive(Clone)]
pub struct DecimalString {
    coefficient: BigInt,
    scale: u32,
}

impl DecimalString {
    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub(crate) fn from_parts(coefficient: BigInt, scale: u32) -> Self {
        Self { coefficient, scale }
    }

    /// Zero (0)
    pub fn zero() -> Self {
        Self::from_parts(BigInt::zero(), 0)
    }

    /// One (1)
    pub fn one() -> Self {
        Self::from_parts(BigInt::from(1u8), 0)
    }

    /// One unit in the last place of `scale` fractional digits (10^-scale).
    ///
    /// `8` gives 0.00000001 and `0` gives 1.
    pub fn unit_at_scale(scale: u32) -> Self {
        Self::from_parts(BigInt::from(1u8), scale)
    }

    /// Parse a plain decimal literal.
    ///
    /// Accepts an optional leading `-` or `+`, digits and at most one `.`.
    /// At least one digit is required. Exponents and whitespace are rejected.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-0.001" -> -0.001
    /// - ".5" -> 0.5
    ///
    /// # Errors
    /// Returns `MalformedNumber` for anything else.
    pub fn parse(text: &str) -> NumericResult<Self> {
        let malformed = || NumericError::MalformedNumber(text.to_string());

        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let (int_str, frac_str) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(malformed());
        }

        let mut digits = Vec::with_capacity(int_str.len() + frac_str.len());
        for byte in int_str.bytes().chain(frac_str.bytes()) {
            if !byte.is_ascii_digit() {
                return Err(malformed());
            }
            digits.push(byte);
        }

        let magnitude = BigInt::parse_bytes(&digits, 10).ok_or_else(malformed)?;
        let scale = u32::try_from(frac_str.len()).map_err(|_| malformed())?;
        let coefficient = if negative { -magnitude } else { magnitude };
        Ok(Self::from_parts(coefficient, scale))
    }

    /// Parse an optional string, mapping `None` through unchanged.
    pub fn parse_opt(text: Option<&str>) -> NumericResult<Option<Self>> {
        text.map(Self::parse).transpose()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of stored fractional digits (trailing zeros included).
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Scaled integer value, `self × 10^scale`.
    #[inline]
    pub(crate) fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.coefficient.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// Power of ten of the first non-zero digit, or `None` for zero.
    ///
    /// `123.4` gives 2 and `0.00456` gives -3.
    pub fn leading_exponent(&self) -> Option<i64> {
        if self.is_zero() {
            return None;
        }
        let digits = self.coefficient.magnitude().to_string().len() as i64;
        Some(digits - 1 - self.scale as i64)
    }

    /// Same value with insignificant trailing fractional zeros removed.
    pub fn normalized(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let trailing = self
            .coefficient
            .magnitude()
            .to_string()
            .bytes()
            .rev()
            .take(self.scale as usize)
            .take_while(|&d| d == b'0')
            .count() as u32;
        if trailing == 0 {
            return self.clone();
        }
        Self::from_parts(&self.coefficient / pow10(trailing), self.scale - trailing)
    }

    /// Same value stored with at least `scale` fractional digits.
    ///
    /// Never drops digits: a value that already has more fractional digits
    /// than requested is returned unchanged.
    pub(crate) fn rescaled(&self, scale: u32) -> Self {
        if scale <= self.scale {
            return self.clone();
        }
        Self::from_parts(&self.coefficient * pow10(scale - self.scale), scale)
    }

    /// Integer value of a non-negative whole number, if it fits in `u128`.
    pub(crate) fn to_u128(&self) -> Option<u128> {
        let normalized = self.normalized();
        if normalized.scale != 0 {
            return None;
        }
        normalized.coefficient.to_u128()
    }

    /// Write the stored digits exactly, without trimming trailing zeros.
    pub(crate) fn write_raw(&self, out: &mut String) {
        if self.is_negative() {
            out.push('-');
        }
        let digits = self.coefficient.magnitude().to_string();
        let scale = self.scale as usize;
        if digits.len() <= scale {
            out.push('0');
            if scale > 0 {
                out.push('.');
                out.extend(std::iter::repeat('0').take(scale - digits.len()));
                out.push_str(&digits);
            }
        } else {
            let (int_digits, frac_digits) = digits.split_at(digits.len() - scale);
            out.push_str(int_digits);
            if !frac_digits.is_empty() {
                out.push('.');
                out.push_str(frac_digits);
            }
        }
    }

    /// Render with exactly `scale` fractional digits, padding with zeros.
    pub(crate) fn to_string_padded(&self, scale: u32) -> String {
        let mut out = String::new();
        self.rescaled(scale).write_raw(&mut out);
        out
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Both coefficients at the larger of the two scales.
    fn aligned(&self, other: &Self) -> (BigInt, BigInt, u32) {
        let scale = self.scale.max(other.scale);
        (
            self.rescaled(scale).coefficient,
            other.rescaled(scale).coefficient,
            scale,
        )
    }

    /// Exact addition.
    pub fn add(&self, rhs: &Self) -> Self {
        let (a, b, scale) = self.aligned(rhs);
        Self::from_parts(a + b, scale)
    }

    /// Exact subtraction.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (a, b, scale) = self.aligned(rhs);
        Self::from_parts(a - b, scale)
    }

    /// Exact multiplication.
    ///
    /// The product carries the sum of both operands' scales, so no digit is
    /// ever discarded.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::from_parts(&self.coefficient * &rhs.coefficient, self.scale + rhs.scale)
    }

    /// Division truncated toward zero to `scale` fractional digits.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `InvalidScale` if `scale` exceeds [`MAX_SCALE`]
    pub fn checked_div(&self, rhs: &Self, scale: u32) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        if scale > MAX_SCALE {
            return Err(NumericError::InvalidScale(scale.to_string()));
        }

        // a / b × 10^scale = A / B × 10^(scale + sb - sa)
        let exponent = scale as i64 + rhs.scale as i64 - self.scale as i64;
        let quotient = if exponent >= 0 {
            (&self.coefficient * pow10(exponent as u32)) / &rhs.coefficient
        } else {
            &self.coefficient / (&rhs.coefficient * pow10((-exponent) as u32))
        };

        Ok(Self::from_parts(quotient, scale))
    }

    /// Remainder of truncated division: `a - trunc(a / b) × b`.
    ///
    /// The result takes the sign of the dividend.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let (a, b, scale) = self.aligned(rhs);
        Ok(Self::from_parts(a % b, scale))
    }

    pub fn abs(&self) -> Self {
        Self::from_parts(self.coefficient.abs(), self.scale)
    }

    /// Same magnitude, opposite sign.
    pub fn negate(&self) -> Self {
        Self::from_parts(-&self.coefficient, self.scale)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Numeric comparison, ignoring insignificant zeros.
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.coefficient.sign().cmp(&other.coefficient.sign()) {
            Ordering::Equal => {
                let (a, b, _) = self.aligned(other);
                a.cmp(&b)
            }
            ordering => ordering,
        }
    }

    /// Numeric equality (`"1.50"` equals `"1.5"`).
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    #[inline]
    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    #[inline]
    pub fn less_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }

    #[inline]
    pub fn greater_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalString {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for DecimalString {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for DecimalString {}

impl PartialOrd for DecimalString {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for DecimalString {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for DecimalString {
    // Consistent with Eq: hash the canonical form
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.coefficient.hash(state);
        normalized.scale.hash(state);
    }
}

impl Neg for DecimalString {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_parts(-self.coefficient, self.scale)
    }
}

impl Neg for &DecimalString {
    type Output = DecimalString;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl FromStr for DecimalString {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for DecimalString {
    fn from(value: i64) -> Self {
        Self::from_parts(BigInt::from(value), 0)
    }
}

impl From<u64> for DecimalString {
    fn from(value: u64) -> Self {
        Self::from_parts(BigInt::from(value), 0)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for DecimalString {
    /// Canonical form: no leading zeros beyond a single `0`, no trailing
    /// fractional zeros, no sign on zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.normalized().write_raw(&mut out);
        f.write_str(&out)
    }
}

impl fmt::Debug for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut raw = String::new();
        self.write_raw(&mut raw);
        write!(f, "DecimalString({}, scale={})", raw, self.scale)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for DecimalString {
    /// Exact: a `Decimal` is a 96-bit mantissa with a base-10 scale.
    fn from(d: rust_decimal::Decimal) -> Self {
        Self::from_parts(BigInt::from(d.mantissa()), d.scale())
    }
}

impl TryFrom<&DecimalString> for rust_decimal::Decimal {
    type Error = NumericError;

    /// # Errors
    /// Returns `OutOfRange` when the value needs more than 28 fractional
    /// digits or a mantissa wider than 96 bits.
    fn try_from(value: &DecimalString) -> Result<Self, Self::Error> {
        let normalized = value.normalized();
        let out_of_range = || NumericError::OutOfRange(normalized.to_string());

        let mantissa = normalized.coefficient.to_i128().ok_or_else(out_of_range)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, normalized.scale)
            .map_err(|_| out_of_range())
    }
}

// ============================================================================
// Serde (string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for DecimalString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DecimalString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
