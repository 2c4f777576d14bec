// ============================================================================
// Market Module
// Per-market precision configuration and field formatting
// ============================================================================
//
// A MarketPrecision is built once from exchange metadata and then formats
// every price, amount, cost and fee for that market. Prices and fees round,
// amounts and costs truncate, and a price or amount that formats to zero is
// rejected rather than sent.

mod config;
mod errors;
mod formatting;

pub use config::MarketPrecision;
pub use errors::{MarketError, MarketResult};
pub use formatting::currency_to_precision;
