//! CLI error type.

use thiserror::Error;

use dash_models::ModelError;
use dash_risk::RiskError;
use dash_sim::SimError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Risk(#[from] RiskError),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
