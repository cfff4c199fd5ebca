//! Monte Carlo simulation endpoint
//!
//! Generates the N × 252 price-path matrix shown in the dashboard's
//! simulation section. The batch is generated fresh per request and
//! discarded after the response is built.

use axum::{response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};

use dash_sim::config::SimulationConfig;
use dash_sim::paths::simulate_paths;

use super::AppState;
use crate::error::ApiError;

/// Simulation request; defaults match the dashboard sliders.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulateRequest {
    /// Number of Monte Carlo paths, in [100, 10000].
    pub n_paths: usize,
    /// Initial price.
    pub spot: f64,
    /// Drift in percent per step (5.0 means 0.05).
    pub rate_pct: f64,
    /// Volatility in percent per step (20.0 means 0.2).
    pub volatility_pct: f64,
    /// Optional seed for reproducible output.
    pub seed: Option<u64>,
}

impl Default for SimulateRequest {
    fn default() -> Self {
        Self {
            n_paths: 1000,
            spot: 100.0,
            rate_pct: 5.0,
            volatility_pct: 20.0,
            seed: None,
        }
    }
}

/// Simulation response carrying the full path matrix.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateResponse {
    pub n_paths: usize,
    pub n_steps: usize,
    pub terminal_mean: f64,
    pub paths: Vec<Vec<f64>>,
}

/// Build the simulation routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/simulate", post(simulate_handler))
}

/// POST /api/v1/simulate - Generate Monte Carlo price paths
async fn simulate_handler(
    Json(req): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, ApiError> {
    let mut builder = SimulationConfig::builder()
        .n_paths(req.n_paths)
        .spot(req.spot)
        .drift(req.rate_pct / 100.0)
        .volatility(req.volatility_pct / 100.0);
    if let Some(seed) = req.seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    let paths = simulate_paths(&config)?;

    tracing::debug!(
        n_paths = paths.n_paths(),
        n_steps = paths.n_steps(),
        "simulation batch generated"
    );

    Ok(Json(SimulateResponse {
        n_paths: paths.n_paths(),
        n_steps: paths.n_steps(),
        terminal_mean: paths.terminal_mean(),
        paths: paths.to_rows(),
    }))
}
