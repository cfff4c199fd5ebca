//! REST API for the derivatives dashboard.
//!
//! Exposes one JSON endpoint per dashboard section — payoff curve, option
//! pricing, Monte Carlo simulation, synthetic series, leverage and rollover
//! checks — plus health probes and the bundled manual download. Every
//! request recomputes its dataset from the request body; no state is shared
//! between requests beyond the read-only configuration.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

/// Server version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
