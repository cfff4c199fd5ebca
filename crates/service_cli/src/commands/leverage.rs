//! Leverage command implementation
//!
//! Samples a current-leverage observation and checks it against the limit.

use tracing::info;

use dash_risk::leverage::{LeverageLimit, LeverageSnapshot, LeverageStatus};
use dash_sim::rng::SimRng;

use crate::Result;

/// Run the leverage command
pub fn run(limit_pct: u32, seed: Option<u64>) -> Result<()> {
    info!("Checking leverage limit...");

    let limit = LeverageLimit::new(limit_pct)?;

    let mut rng = SimRng::from_optional_seed(seed);
    let snapshot = LeverageSnapshot::sample(&mut rng);
    let status = limit.check(&snapshot);

    println!("\nCurrent leverage: {}%", snapshot.current_pct());
    println!("Configured limit: {}%", limit.pct());
    match status {
        LeverageStatus::ExceedsLimit => {
            println!("ALERT: leverage exceeds the configured limit");
        }
        LeverageStatus::WithinLimit => {
            println!("OK: leverage is within the configured limit");
        }
    }

    Ok(())
}
