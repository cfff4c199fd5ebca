//! Call payoff curve endpoint
//!
//! Serves the dataset behind the dashboard's first section: the value of a
//! call option at expiry over a range of underlying prices.

use axum::{response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};

use dash_models::payoff::payoff_curve;

use super::AppState;
use crate::error::ApiError;

/// Payoff curve request; defaults match the dashboard widgets.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayoffRequest {
    /// Lower bound of the underlying price range.
    pub min_spot: f64,
    /// Upper bound of the underlying price range.
    pub max_spot: f64,
    /// Strike price of the call.
    pub strike: f64,
    /// Number of curve samples.
    pub points: usize,
}

impl Default for PayoffRequest {
    fn default() -> Self {
        Self {
            min_spot: 80.0,
            max_spot: 120.0,
            strike: 100.0,
            points: 100,
        }
    }
}

/// One sample of the payoff curve.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffPointDto {
    pub spot: f64,
    pub payoff: f64,
}

/// Payoff curve response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffResponse {
    pub strike: f64,
    pub points: Vec<PayoffPointDto>,
}

/// Build the payoff routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/payoff", post(payoff_handler))
}

/// POST /api/v1/payoff - Generate the call payoff curve
async fn payoff_handler(Json(req): Json<PayoffRequest>) -> Result<Json<PayoffResponse>, ApiError> {
    let curve = payoff_curve(req.min_spot, req.max_spot, req.strike, req.points)?;

    tracing::debug!(points = curve.len(), strike = req.strike, "payoff curve generated");

    Ok(Json(PayoffResponse {
        strike: req.strike,
        points: curve
            .into_iter()
            .map(|p| PayoffPointDto {
                spot: p.spot,
                payoff: p.payoff,
            })
            .collect(),
    }))
}
