//! Payoff command implementation
//!
//! Prints the call payoff curve as a table.

use tracing::info;

use dash_models::payoff::payoff_curve;

use crate::Result;

/// Run the payoff command
pub fn run(min_spot: f64, max_spot: f64, strike: f64, points: usize) -> Result<()> {
    info!("Generating payoff curve...");
    info!("  Range: [{}, {}]", min_spot, max_spot);
    info!("  Strike: {}", strike);

    let curve = payoff_curve(min_spot, max_spot, strike, points)?;

    println!("\nCall payoff, strike {:.2}", strike);
    println!("┌────────────┬────────────┐");
    println!("│ Spot       │ Payoff     │");
    println!("├────────────┼────────────┤");
    for point in &curve {
        println!("│ {:>10.4} │ {:>10.4} │", point.spot, point.payoff);
    }
    println!("└────────────┴────────────┘");

    Ok(())
}
