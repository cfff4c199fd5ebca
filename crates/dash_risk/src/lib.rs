//! # Dash Risk
//!
//! Threshold checks behind the dashboard's alerting sections: the leverage
//! limit comparison and the futures rollover timing decision.
//!
//! Both checks are stateless comparisons evaluated fresh on every
//! invocation; no history is kept. Inputs are bound-validated at
//! construction so the checks themselves cannot fail.

pub mod error;
pub mod leverage;
pub mod rollover;

pub use error::RiskError;
pub use leverage::{LeverageLimit, LeverageSnapshot, LeverageStatus};
pub use rollover::{FuturesPosition, RolloverPolicy, RolloverStatus};
