//! Property-based tests for exact decimal arithmetic and precision formatting.
//!
//! `rust_decimal` serves as the oracle wherever operands stay within its
//! 28-digit range.

use exchange_precision::prelude::*;
use proptest::prelude::*;
use quickcheck::quickcheck;
use rust_decimal::Decimal;
use std::str::FromStr;

// =============================================================================
// Generators
// =============================================================================

/// Plain decimal text with up to `int_digits` whole and `frac_digits`
/// fractional digits, including leading and trailing zeros.
fn arb_decimal(int_digits: usize, frac_digits: usize) -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("-"), Just("+")],
        proptest::collection::vec(0u8..10, 1..=int_digits),
        proptest::option::of(proptest::collection::vec(0u8..10, 0..=frac_digits)),
    )
        .prop_map(|(sign, int, frac)| {
            let mut text = sign.to_string();
            text.extend(int.iter().map(|d| char::from(b'0' + d)));
            if let Some(frac) = frac {
                text.push('.');
                text.extend(frac.iter().map(|d| char::from(b'0' + d)));
            }
            text
        })
}

/// Operands small enough that any sum or product fits rust_decimal.
fn arb_operand() -> impl Strategy<Value = String> {
    arb_decimal(6, 6)
}

/// Strictly positive tick size such as "0.05" or "25".
fn arb_tick() -> impl Strategy<Value = String> {
    (1u32..=999, 0u32..=6).prop_map(|(digits, scale)| {
        Decimal::new(i64::from(digits), scale).to_string()
    })
}

/// Oracle value of generated text; "+5" and "5." are spelled the way
/// rust_decimal expects.
fn oracle(text: &str) -> Decimal {
    let text = text.strip_prefix('+').unwrap_or(text);
    Decimal::from_str(text.trim_end_matches('.')).unwrap()
}

fn is_nonzero(text: &str) -> bool {
    !oracle(text).is_zero()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Serializing and parsing again never changes the value, and the
    /// canonical form is a fixed point.
    #[test]
    fn prop_round_trip(text in arb_decimal(20, 20)) {
        let parsed = DecimalString::parse(&text).unwrap();
        let canonical = parsed.to_string();
        let reparsed = DecimalString::parse(&canonical).unwrap();

        prop_assert_eq!(&parsed, &reparsed);
        prop_assert_eq!(normalize(&canonical).unwrap(), canonical);
    }

    /// Sums, differences and products match the oracle exactly.
    #[test]
    fn prop_exact_against_oracle(a in arb_operand(), b in arb_operand()) {
        let (x, y) = (oracle(&a), oracle(&b));

        prop_assert_eq!(oracle(&string_add(&a, &b).unwrap()), x + y);
        prop_assert_eq!(oracle(&string_sub(&a, &b).unwrap()), x - y);
        prop_assert_eq!(oracle(&string_mul(&a, &b).unwrap()), x * y);
    }

    #[test]
    fn prop_add_mul_commute(a in arb_decimal(15, 15), b in arb_decimal(15, 15)) {
        prop_assert_eq!(string_add(&a, &b).unwrap(), string_add(&b, &a).unwrap());
        prop_assert_eq!(string_mul(&a, &b).unwrap(), string_mul(&b, &a).unwrap());
    }

    /// `a - b + b` gives back `a` at any magnitude.
    #[test]
    fn prop_sub_inverts_add(a in arb_decimal(30, 30), b in arb_decimal(30, 30)) {
        let back = string_add(&string_sub(&a, &b).unwrap(), &b).unwrap();
        prop_assert!(string_equals(&back, &a).unwrap());
    }

    /// The truncated quotient leaves a remainder smaller than one unit of
    /// the requested scale, carrying the dividend's sign.
    #[test]
    fn prop_division_truncates(
        a in arb_operand(),
        b in arb_operand().prop_filter("non-zero divisor", |b| is_nonzero(b)),
        scale in 0u32..12,
    ) {
        let q = string_div(&a, &b, scale).unwrap();
        let remainder = string_sub(&a, &string_mul(&q, &b).unwrap()).unwrap();
        let bound = string_mul(&string_abs(&b).unwrap(), &parse_precision(&scale.to_string()).unwrap()).unwrap();

        prop_assert!(string_lt(&string_abs(&remainder).unwrap(), &bound).unwrap());
        prop_assert!(remainder == "0" || string_lt(&a, "0").unwrap() == string_lt(&remainder, "0").unwrap());
    }

    #[test]
    fn prop_mod_against_oracle(
        a in arb_operand(),
        b in arb_operand().prop_filter("non-zero divisor", |b| is_nonzero(b)),
    ) {
        prop_assert_eq!(oracle(&string_mod(&a, &b).unwrap()), oracle(&a) % oracle(&b));
    }

    /// Comparisons agree with the oracle and ignore trailing zeros.
    #[test]
    fn prop_comparison_equivalence(a in arb_operand(), b in arb_operand(), pad in 0usize..5) {
        let (x, y) = (oracle(&a), oracle(&b));
        prop_assert_eq!(string_lt(&a, &b).unwrap(), x < y);
        prop_assert_eq!(string_ge(&a, &b).unwrap(), x >= y);
        prop_assert_eq!(string_equals(&a, &b).unwrap(), x == y);

        let padded = if a.contains('.') {
            format!("{a}{}", "0".repeat(pad))
        } else {
            format!("{a}.{}", "0".repeat(pad))
        };
        prop_assert!(string_equals(&a, &padded).unwrap());
        prop_assert_eq!(normalize(&a).unwrap(), normalize(&padded).unwrap());
    }

    /// min and max hand back one of the inputs verbatim.
    #[test]
    fn prop_min_max_return_inputs(a in arb_operand(), b in arb_operand()) {
        let low = string_min(&a, &b).unwrap();
        let high = string_max(&a, &b).unwrap();

        prop_assert!(low == a || low == b);
        prop_assert!(high == a || high == b);
        prop_assert!(string_le(low, high).unwrap());
    }

    /// Formatting an already formatted value changes nothing.
    #[test]
    fn prop_format_idempotent(
        value in arb_decimal(10, 12),
        places in -3i32..10,
        digits in 1u32..12,
        truncate in any::<bool>(),
        pad in any::<bool>(),
    ) {
        let rounding = if truncate { RoundingMode::Truncate } else { RoundingMode::Round };
        let padding = if pad { PaddingMode::PadWithZeros } else { PaddingMode::NoPad };

        for descriptor in [
            PrecisionDescriptor::DecimalPlaces(places),
            PrecisionDescriptor::SignificantDigits(digits),
        ] {
            let once = to_precision(&value, &descriptor, rounding, padding).unwrap();
            let twice = to_precision(&once, &descriptor, rounding, padding).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    /// Decimal places agree with the oracle's own rounding strategies.
    #[test]
    fn prop_decimal_places_against_oracle(value in arb_operand(), places in 0u32..8) {
        let descriptor = PrecisionDescriptor::DecimalPlaces(places as i32);
        let x = oracle(&value);

        let rounded = to_precision(&value, &descriptor, RoundingMode::Round, PaddingMode::NoPad).unwrap();
        let expected = x.round_dp_with_strategy(places, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(oracle(&rounded), expected);

        let truncated = to_precision(&value, &descriptor, RoundingMode::Truncate, PaddingMode::NoPad).unwrap();
        prop_assert_eq!(oracle(&truncated), x.trunc_with_scale(places));

        let even = to_precision(&value, &descriptor, RoundingMode::RoundHalfEven, PaddingMode::NoPad).unwrap();
        let expected = x.round_dp_with_strategy(places, rust_decimal::RoundingStrategy::MidpointNearestEven);
        prop_assert_eq!(oracle(&even), expected);
    }

    /// Tick snapping lands on a multiple of the tick, no further than half
    /// a tick away when rounding and never past the value when truncating.
    #[test]
    fn prop_tick_snapping(value in arb_operand(), tick in arb_tick()) {
        let descriptor = PrecisionDescriptor::tick_size(&tick).unwrap();

        let rounded = to_precision(&value, &descriptor, RoundingMode::Round, PaddingMode::NoPad).unwrap();
        prop_assert!(string_equals(&string_mod(&rounded, &tick).unwrap(), "0").unwrap());
        let distance = string_abs(&string_sub(&value, &rounded).unwrap()).unwrap();
        prop_assert!(string_le(&string_mul(&distance, "2").unwrap(), &tick).unwrap());

        let truncated = to_precision(&value, &descriptor, RoundingMode::Truncate, PaddingMode::NoPad).unwrap();
        prop_assert!(string_le(&string_abs(&truncated).unwrap(), &string_abs(&value).unwrap()).unwrap());
        let distance = string_abs(&string_sub(&value, &truncated).unwrap()).unwrap();
        prop_assert!(string_lt(&distance, &tick).unwrap());
    }

    /// Padded output always shows exactly the requested fractional digits.
    #[test]
    fn prop_padding_width(value in arb_operand(), places in 1i32..10) {
        let descriptor = PrecisionDescriptor::DecimalPlaces(places);
        let padded = to_precision(&value, &descriptor, RoundingMode::Round, PaddingMode::PadWithZeros).unwrap();

        let fraction = padded.split('.').nth(1).unwrap_or("");
        prop_assert_eq!(fraction.len(), places as usize);
    }

    /// Amounts that survive market formatting are never zero.
    #[test]
    fn prop_market_amount_nonzero(value in arb_operand(), decimals in 0u32..8) {
        let market = MarketPrecision::from_decimals("BTC/USDT", 2, decimals);
        match market.amount_to_precision(&value) {
            Ok(amount) => prop_assert!(is_nonzero(&amount)),
            Err(MarketError::BelowMinimumPrecision { field, .. }) => prop_assert_eq!(field, "amount"),
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }
}

// =============================================================================
// QuickCheck: integer-backed arithmetic
// =============================================================================

quickcheck! {
    fn qc_integer_add(a: i64, b: i64) -> bool {
        let expected = (i128::from(a) + i128::from(b)).to_string();
        string_add(&a.to_string(), &b.to_string()).unwrap() == expected
    }

    fn qc_integer_mul(a: i64, b: i64) -> bool {
        let expected = (i128::from(a) * i128::from(b)).to_string();
        string_mul(&a.to_string(), &b.to_string()).unwrap() == expected
    }

    fn qc_integer_div(a: i64, b: i64) -> bool {
        if b == 0 {
            return string_div(&a.to_string(), "0", 0) == Err(NumericError::DivisionByZero);
        }
        let expected = (i128::from(a) / i128::from(b)).to_string();
        string_div(&a.to_string(), &b.to_string(), 0).unwrap() == expected
    }

    fn qc_integer_ordering(a: i64, b: i64) -> bool {
        let (x, y) = (a.to_string(), b.to_string());
        string_lt(&x, &y).unwrap() == (a < b)
            && string_ge(&x, &y).unwrap() == (a >= b)
            && DecimalString::from(a).cmp(&DecimalString::from(b)) == a.cmp(&b)
    }
}

// =============================================================================
// Serialization
// =============================================================================

#[cfg(feature = "serde")]
mod serde_round_trip {
    use super::*;

    proptest! {
        #[test]
        fn prop_json_round_trip(text in arb_decimal(20, 20), places in -2i32..8) {
            let value = DecimalString::parse(&text).unwrap();
            let json = serde_json::to_string(&value).unwrap();
            prop_assert_eq!(&json, &format!("\"{value}\""));
            prop_assert_eq!(serde_json::from_str::<DecimalString>(&json).unwrap(), value);

            let descriptor = PrecisionDescriptor::DecimalPlaces(places);
            let json = serde_json::to_string(&descriptor).unwrap();
            prop_assert_eq!(serde_json::from_str::<PrecisionDescriptor>(&json).unwrap(), descriptor);
        }
    }
}
