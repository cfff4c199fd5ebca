//! Check command implementation
//!
//! Exercises each kernel crate once with default inputs to confirm the
//! installation works end to end.

use dash_models::black_scholes::{call_price, OptionParams};
use dash_risk::rollover::{FuturesPosition, RolloverPolicy};
use dash_sim::synthetic::{generate_series, SyntheticSeriesConfig};

use crate::Result;

/// Run the check command
pub fn run() -> Result<()> {
    println!("Checking components...");

    let params = OptionParams::new(100.0, 100.0, 0.05, 1.0, 0.2)?;
    let price = call_price(&params);
    println!("  dash_models: ok (ATM call = {:.4})", price);

    let series = generate_series(&SyntheticSeriesConfig {
        seed: Some(0),
        ..Default::default()
    })?;
    println!("  dash_sim: ok ({} day series)", series.len());

    let policy = RolloverPolicy::new(3)?;
    let position = FuturesPosition::new(10, 5)?;
    let _ = policy.check(&position);
    println!("  dash_risk: ok");

    println!("All components available");
    Ok(())
}
