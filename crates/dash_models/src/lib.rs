//! # Dash Models
//!
//! Closed-form formulas behind the derivatives dashboard.
//!
//! This crate provides:
//! - Standard normal distribution functions (`math`)
//! - Black-Scholes pricing for European options (`black_scholes`)
//! - Call payoff curve generation for visualisation (`payoff`)
//!
//! ## Design Principles
//!
//! - **Per-request parameter objects**: every formula takes an explicit,
//!   validated parameter struct; there is no shared or process-wide state.
//! - **Validate before computing**: domain violations (non-positive expiry or
//!   volatility) are rejected at construction so NaN/Infinity never propagates
//!   into a result.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod black_scholes;
pub mod error;
pub mod math;
pub mod payoff;

pub use black_scholes::{call_price, put_price, OptionKind, OptionParams};
pub use error::ModelError;
pub use payoff::{call_payoff, payoff_curve, PayoffPoint};
