//! Price command implementation
//!
//! Prices a European option with Black-Scholes and prints the result table.

use tracing::info;

use dash_models::black_scholes::{
    call_price, delta, gamma, put_price, vega, OptionKind, OptionParams,
};

use crate::Result;

/// Run the price command
///
/// Rate and volatility arrive in percent, matching the dashboard inputs.
pub fn run(spot: f64, strike: f64, rate: f64, expiry: f64, volatility: f64) -> Result<()> {
    info!("Pricing European option...");
    info!("  S = {}, K = {}", spot, strike);
    info!("  r = {}%, t = {}y, σ = {}%", rate, expiry, volatility);

    let params = OptionParams::new(spot, strike, rate / 100.0, expiry, volatility / 100.0)?;

    println!("\n┌──────────────┬────────────┐");
    println!("│ Quantity     │ Value      │");
    println!("├──────────────┼────────────┤");
    println!("│ Call price   │ {:>10.4} │", call_price(&params));
    println!("│ Put price    │ {:>10.4} │", put_price(&params));
    println!("│ d1           │ {:>10.4} │", params.d1());
    println!("│ d2           │ {:>10.4} │", params.d2());
    println!("│ Call delta   │ {:>10.4} │", delta(&params, OptionKind::Call));
    println!("│ Gamma        │ {:>10.4} │", gamma(&params));
    println!("│ Vega         │ {:>10.4} │", vega(&params));
    println!("└──────────────┴────────────┘");

    Ok(())
}
