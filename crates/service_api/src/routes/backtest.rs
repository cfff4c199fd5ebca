//! Synthetic series endpoint
//!
//! Serves the dataset behind the dashboard's "backtesting" section. The
//! series is a synthetic random walk; no strategy logic is applied, and the
//! response says so explicitly.

use axum::{response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};

use dash_sim::synthetic::{generate_series, SyntheticSeriesConfig};

use super::AppState;
use crate::error::ApiError;

/// Disclaimer carried on every response.
const SERIES_NOTE: &str =
    "Synthetic random-walk series; no trading strategy is applied.";

/// Synthetic series request; defaults match the dashboard.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BacktestRequest {
    /// Number of daily observations.
    pub days: usize,
    /// Starting price.
    pub base_price: f64,
    /// Daily return standard deviation.
    pub daily_vol: f64,
    /// Optional seed for reproducible output.
    pub seed: Option<u64>,
}

impl Default for BacktestRequest {
    fn default() -> Self {
        Self {
            days: 252,
            base_price: 100.0,
            daily_vol: 0.02,
            seed: None,
        }
    }
}

/// Synthetic series response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestResponse {
    pub n_days: usize,
    pub prices: Vec<f64>,
    pub note: String,
}

/// Build the backtest routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/backtest", post(backtest_handler))
}

/// POST /api/v1/backtest - Generate the synthetic daily series
async fn backtest_handler(
    Json(req): Json<BacktestRequest>,
) -> Result<Json<BacktestResponse>, ApiError> {
    let config = SyntheticSeriesConfig {
        n_days: req.days,
        base_price: req.base_price,
        daily_vol: req.daily_vol,
        seed: req.seed,
    };

    let series = generate_series(&config)?;

    tracing::debug!(n_days = series.len(), "synthetic series generated");

    Ok(Json(BacktestResponse {
        n_days: series.len(),
        prices: series.prices().to_vec(),
        note: SERIES_NOTE.to_string(),
    }))
}
