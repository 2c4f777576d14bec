// ============================================================================
// String Operations
// Exact arithmetic and comparison on decimal text
// ============================================================================

use crate::numeric::{DecimalString, NumericResult};

#[inline]
fn parse(text: &str) -> NumericResult<DecimalString> {
    DecimalString::parse(text)
}

fn binary(
    a: &str,
    b: &str,
    op: impl FnOnce(&DecimalString, &DecimalString) -> DecimalString,
) -> NumericResult<String> {
    Ok(op(&parse(a)?, &parse(b)?).to_string())
}

/// Canonical form of `text`: serialize(parse(text)).
///
/// `"007.500"` gives `"7.5"` and `"-0.0"` gives `"0"`.
pub fn normalize(text: &str) -> NumericResult<String> {
    Ok(parse(text)?.to_string())
}

// ============================================================================
// Arithmetic
// ============================================================================

/// Exact sum.
pub fn string_add(a: &str, b: &str) -> NumericResult<String> {
    binary(a, b, DecimalString::add)
}

/// Exact difference `a - b`.
pub fn string_sub(a: &str, b: &str) -> NumericResult<String> {
    binary(a, b, DecimalString::sub)
}

/// Exact product.
pub fn string_mul(a: &str, b: &str) -> NumericResult<String> {
    binary(a, b, DecimalString::mul)
}

/// Quotient truncated toward zero to `scale` fractional digits.
///
/// # Errors
/// - `DivisionByZero` if `b` is zero
/// - `InvalidScale` if `scale` exceeds `MAX_SCALE`
pub fn string_div(a: &str, b: &str, scale: u32) -> NumericResult<String> {
    Ok(parse(a)?.checked_div(&parse(b)?, scale)?.to_string())
}

/// Remainder of truncated division, with the sign of `a`.
///
/// # Errors
/// Returns `DivisionByZero` if `b` is zero.
pub fn string_mod(a: &str, b: &str) -> NumericResult<String> {
    Ok(parse(a)?.checked_rem(&parse(b)?)?.to_string())
}

pub fn string_abs(a: &str) -> NumericResult<String> {
    Ok(parse(a)?.abs().to_string())
}

pub fn string_neg(a: &str) -> NumericResult<String> {
    Ok(parse(a)?.negate().to_string())
}

// ============================================================================
// Comparison
// ============================================================================

/// Numeric equality: `"2.50"` equals `"2.5"`.
pub fn string_equals(a: &str, b: &str) -> NumericResult<bool> {
    Ok(parse(a)?.equals(&parse(b)?))
}

/// Alias of [`string_equals`].
#[inline]
pub fn string_eq(a: &str, b: &str) -> NumericResult<bool> {
    string_equals(a, b)
}

pub fn string_lt(a: &str, b: &str) -> NumericResult<bool> {
    Ok(parse(a)?.less_than(&parse(b)?))
}

pub fn string_gt(a: &str, b: &str) -> NumericResult<bool> {
    Ok(parse(a)?.greater_than(&parse(b)?))
}

pub fn string_le(a: &str, b: &str) -> NumericResult<bool> {
    Ok(parse(a)?.less_or_equal(&parse(b)?))
}

pub fn string_ge(a: &str, b: &str) -> NumericResult<bool> {
    Ok(parse(a)?.greater_or_equal(&parse(b)?))
}

// ============================================================================
// Aggregates
// ============================================================================

/// The smaller input, returned exactly as the caller wrote it.
///
/// Ties return `a`.
pub fn string_min<'a>(a: &'a str, b: &'a str) -> NumericResult<&'a str> {
    let (x, y) = (parse(a)?, parse(b)?);
    Ok(if y.less_than(&x) { b } else { a })
}

/// The larger input, returned exactly as the caller wrote it.
///
/// Ties return `b`.
pub fn string_max<'a>(a: &'a str, b: &'a str) -> NumericResult<&'a str> {
    let (x, y) = (parse(a)?, parse(b)?);
    Ok(if x.greater_than(&y) { a } else { b })
}

/// `None` when `text` is numerically zero, otherwise the input unchanged.
///
/// Exchanges often report `"0"` or `"0.000"` for an unset price.
pub fn omit_zero(text: &str) -> NumericResult<Option<&str>> {
    Ok(if parse(text)?.is_zero() { None } else { Some(text) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("007.500").unwrap(), "7.5");
        assert_eq!(normalize("-0.0").unwrap(), "0");
        assert_eq!(normalize("+.25").unwrap(), "0.25");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(string_add("0.1", "0.2").unwrap(), "0.3");
        assert_eq!(string_sub("5", "7.25").unwrap(), "-2.25");
        assert_eq!(string_mul("0.1", "0.2").unwrap(), "0.02");
        assert_eq!(string_div("10", "4", 2).unwrap(), "2.5");
        assert_eq!(string_div("1", "3", 18).unwrap(), "0.333333333333333333");
        assert_eq!(string_mod("10.5", "3").unwrap(), "1.5");
        assert_eq!(string_abs("-5.5").unwrap(), "5.5");
        assert_eq!(string_neg("5.5").unwrap(), "-5.5");
    }

    #[test]
    fn test_errors() {
        assert_eq!(string_div("1", "0", 2), Err(NumericError::DivisionByZero));
        assert_eq!(string_mod("1", "0.0"), Err(NumericError::DivisionByZero));
        assert_eq!(
            string_div("1", "3", u32::MAX),
            Err(NumericError::InvalidScale(u32::MAX.to_string()))
        );
        assert_eq!(string_div("1", "4", 1_000).unwrap(), "0.25");
        assert_eq!(
            string_add("1.2.3", "1"),
            Err(NumericError::MalformedNumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn test_comparison() {
        assert!(string_equals("2.50", "2.5").unwrap());
        assert!(string_eq("-0", "0.000").unwrap());
        assert!(string_lt("-1", "0").unwrap());
        assert!(string_gt("0.0001", "0").unwrap());
        assert!(string_le("1.0", "1").unwrap());
        assert!(string_ge("1", "1.00").unwrap());
        assert!(!string_gt("1", "1.00").unwrap());
    }

    #[test]
    fn test_min_max_preserve_formatting() {
        assert_eq!(string_min("1.50", "2").unwrap(), "1.50");
        assert_eq!(string_max("1.50", "2.000").unwrap(), "2.000");
        assert_eq!(string_min("1.0", "1").unwrap(), "1.0");
        assert_eq!(string_max("1.0", "1").unwrap(), "1");
        assert_eq!(string_min("-3", "0.5").unwrap(), "-3");
    }

    #[test]
    fn test_omit_zero() {
        assert_eq!(omit_zero("0.000").unwrap(), None);
        assert_eq!(omit_zero("-0").unwrap(), None);
        assert_eq!(omit_zero("0.01").unwrap(), Some("0.01"));
        assert!(omit_zero("").is_err());
    }
}
