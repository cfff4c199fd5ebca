//! Backtest command implementation
//!
//! Generates the synthetic daily series and prints the head of the table.
//! No strategy logic is applied; the series is a labelled random walk.

use tracing::info;

use dash_sim::synthetic::{generate_series, SyntheticSeriesConfig};

use crate::Result;

/// Run the backtest command
pub fn run(days: usize, base_price: f64, daily_vol: f64, seed: Option<u64>) -> Result<()> {
    info!("Generating synthetic series...");
    info!("  Days: {}, base price: {}, daily vol: {}", days, base_price, daily_vol);

    let config = SyntheticSeriesConfig {
        n_days: days,
        base_price,
        daily_vol,
        seed,
    };
    let series = generate_series(&config)?;

    println!("\nSynthetic random-walk series ({} days); no strategy applied", series.len());
    println!("┌────────────┬────────────┐");
    println!("│ Day        │ Price      │");
    println!("├────────────┼────────────┤");
    for (day, price) in series.prices().iter().enumerate().take(10) {
        println!("│ {:>10} │ {:>10.4} │", day, price);
    }
    println!("└────────────┴────────────┘");
    if series.len() > 10 {
        println!("({} further rows not shown)", series.len() - 10);
    }

    Ok(())
}
