//! Route modules for the dashboard server
//!
//! One sub-router per dashboard section:
//! - payoff: call payoff curve
//! - pricing: Black-Scholes option pricing
//! - simulate: Monte Carlo price paths
//! - backtest: synthetic daily series
//! - risk: leverage and rollover checks
//! - manual: bundled reference document download
//! - health: health check and readiness endpoints

pub mod backtest;
pub mod health;
pub mod manual;
pub mod payoff;
pub mod pricing;
pub mod risk;
pub mod simulate;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    Router::new()
        .merge(health::routes())
        .merge(payoff::routes())
        .merge(pricing::routes())
        .merge(simulate::routes())
        .merge(backtest::routes())
        .merge(risk::routes())
        .merge(manual::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
