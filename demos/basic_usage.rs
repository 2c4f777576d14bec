// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `--features logging` to see the formatter's trace output and the
// rejection logged for a below-minimum amount.

use exchange_precision::prelude::*;

fn main() -> Result<(), MarketError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Exchange Precision Example ===\n");

    // Market metadata as an exchange reports it
    println!("Loading markets...");
    let markets = [
        MarketPrecision::from_exchange(PrecisionMode::DecimalPlaces, "BTC/USDT", "2", "6")?,
        MarketPrecision::from_exchange(PrecisionMode::TickSize, "ETH-PERP", "0.05", "0.001")?
            .with_padding(PaddingMode::PadWithZeros),
        MarketPrecision::from_exchange(PrecisionMode::SignificantDigits, "XBT/EUR", "5", "8")?,
    ];

    for market in &markets {
        market.validate()?;
        println!(
            "  {:<10} price {:<22} amount {}",
            market.symbol,
            market.price.to_string(),
            market.amount
        );
    }

    // Tick strings from integer decimals
    println!("\n=== Precision Parser ===");
    for scale in ["0", "2", "8"] {
        println!("  parse_precision({scale}) = {}", parse_precision(scale)?);
    }

    // Exact arithmetic on strings
    println!("\n=== Exact Arithmetic ===");
    println!("  0.1 + 0.2     = {}", string_add("0.1", "0.2")?);
    println!("  0.1 * 0.2     = {}", string_mul("0.1", "0.2")?);
    println!("  1 / 3 (18dp)  = {}", string_div("1", "3", 18)?);
    println!("  10.5 mod 3    = {}", string_mod("10.5", "3")?);
    println!("  min(1.50, 2)  = {}", string_min("1.50", "2")?);

    // Prepare the same 1000 quote budget order on every market
    println!("\n=== Order Preparation ===");
    let budget = "1000";
    let mid = "43251.987654321";

    for market in &markets {
        let price = market.price_to_precision(mid)?;
        let amount = market.amount_to_precision(&string_div(budget, &price, 18)?)?;
        let cost = market.cost_to_precision(&string_mul(&price, &amount)?)?;
        let fee = market.fee_to_precision(&string_mul(&cost, "0.001")?)?;

        println!(
            "  {:<10} {amount} @ {price} (cost {cost}, fee {fee})",
            market.symbol
        );
    }

    // An amount below the market minimum is rejected, not sent as zero
    println!("\n=== Rejected Amount ===");
    match markets[1].amount_to_precision("0.0004") {
        Ok(amount) => println!("  unexpected amount {amount}"),
        Err(err) => println!("  {err}"),
    }

    // Currency balances with and without a known precision
    println!("\n=== Balances ===");
    let usdt = PrecisionDescriptor::DecimalPlaces(2);
    println!(
        "  USDT {}",
        currency_to_precision("1234.5678", Some(&usdt), PaddingMode::PadWithZeros)?
    );
    println!(
        "  DOGE {}",
        currency_to_precision("0.000100", None, PaddingMode::NoPad)?
    );

    Ok(())
}
