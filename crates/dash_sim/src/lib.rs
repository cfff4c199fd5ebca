//! # Dash Sim
//!
//! Generative layer of the derivatives dashboard: Monte Carlo price-path
//! batches and the synthetic daily series shown in the "backtesting" section.
//!
//! Everything here is recomputed per request and discarded after display.
//! Randomness defaults to an entropy-seeded generator (non-reproducible, as
//! the dashboard behaves), but every config accepts an explicit seed so tests
//! can pin the output exactly.

pub mod config;
pub mod error;
pub mod paths;
pub mod rng;
pub mod synthetic;

pub use config::{SimulationConfig, SimulationConfigBuilder, TRADING_DAYS};
pub use error::SimError;
pub use paths::{simulate_paths, PathSet};
pub use rng::SimRng;
pub use synthetic::{generate_series, SyntheticSeries, SyntheticSeriesConfig};
