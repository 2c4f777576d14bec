// ============================================================================
// Precise Module
// String-in/string-out API consumed by exchange adapters
// ============================================================================
//
// Adapters keep prices, amounts, fees and balances as strings end to end.
// Every function here parses its operands, computes exactly and serializes
// the canonical result, so no value ever passes through a float.

mod string_ops;

pub use string_ops::{
    normalize, omit_zero, string_abs, string_add, string_div, string_eq, string_equals,
    string_ge, string_gt, string_le, string_lt, string_max, string_min, string_mod, string_mul,
    string_neg, string_sub,
};
