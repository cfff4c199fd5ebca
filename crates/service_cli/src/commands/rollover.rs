//! Rollover command implementation
//!
//! Checks whether a futures position is due for rollover.

use tracing::info;

use dash_risk::rollover::{FuturesPosition, RolloverPolicy, RolloverStatus};

use crate::Result;

/// Run the rollover command
pub fn run(contracts: u32, days_to_expiry: u32, rollover_days: u32) -> Result<()> {
    info!("Checking rollover timing...");

    let position = FuturesPosition::new(contracts, days_to_expiry)?;
    let policy = RolloverPolicy::new(rollover_days)?;
    let status = policy.check(&position);

    println!(
        "\nPosition: {} contracts, {} days to expiry (window: {} days)",
        position.contracts(),
        position.days_to_expiry(),
        policy.days_before_expiry()
    );
    match status {
        RolloverStatus::RolloverDue => {
            println!("Time to roll the futures position");
        }
        RolloverStatus::TimeRemaining => {
            println!("There is still time before the futures expire");
        }
    }

    Ok(())
}
