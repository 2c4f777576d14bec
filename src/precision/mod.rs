// ============================================================================
// Precision Module
// Precision descriptors, the precision parser and the formatter
// ============================================================================
//
// Adapters turn exchange-declared precision (an integer scale, a tick size or
// a significant-digit count) into a PrecisionDescriptor once per market, then
// call `to_precision` on every value before it leaves for the exchange.
//
// There is no process-wide precision mode: the descriptor, rounding mode and
// padding mode are passed explicitly on every call.

mod descriptor;
mod formatter;

pub use crate::numeric::{RoundingMode, MAX_SCALE};
pub use descriptor::{
    parse_precision, precision_from_string, PaddingMode, PrecisionDescriptor, PrecisionMode,
};
pub use formatter::{format_decimal, to_precision};
