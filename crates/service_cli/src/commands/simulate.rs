//! Simulate command implementation
//!
//! Generates a Monte Carlo price-path batch and prints summary statistics
//! with a preview of the first path.

use tracing::info;

use dash_sim::config::SimulationConfig;
use dash_sim::paths::simulate_paths;

use crate::Result;

/// Run the simulate command
pub fn run(paths: usize, spot: f64, rate: f64, volatility: f64, seed: Option<u64>) -> Result<()> {
    info!("Starting Monte Carlo simulation...");
    info!("  Paths: {}", paths);
    info!("  S₀ = {}, drift = {}%, σ = {}%", spot, rate, volatility);

    let mut builder = SimulationConfig::builder()
        .n_paths(paths)
        .spot(spot)
        .drift(rate / 100.0)
        .volatility(volatility / 100.0);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    let batch = simulate_paths(&config)?;

    let terminals = batch.terminal_prices();
    let min = terminals.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = terminals.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    println!("\nSimulated {} paths × {} steps", batch.n_paths(), batch.n_steps());
    println!("┌──────────────────┬────────────┐");
    println!("│ Terminal price   │ Value      │");
    println!("├──────────────────┼────────────┤");
    println!("│ Mean             │ {:>10.4} │", batch.terminal_mean());
    println!("│ Min              │ {:>10.4} │", min);
    println!("│ Max              │ {:>10.4} │", max);
    println!("└──────────────────┴────────────┘");

    // Preview of the first path, first ten steps
    let preview: Vec<String> = batch.path(0)[..10.min(batch.n_steps())]
        .iter()
        .map(|p| format!("{:.2}", p))
        .collect();
    println!("Path 1 head: {}", preview.join(", "));

    info!("Simulation complete");
    Ok(())
}
