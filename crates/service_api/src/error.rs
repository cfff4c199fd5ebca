//! API error type and HTTP mapping.
//!
//! Domain errors from the kernel crates become 422 responses with a JSON
//! body; the computation is never attempted with invalid inputs, so NaN or
//! Infinity cannot reach a response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

use dash_models::ModelError;
use dash_risk::RiskError;
use dash_sim::SimError;

/// Error returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Risk(#[from] RiskError),
}

/// JSON body of an error response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: "invalid_input".to_string(),
            message: self.to_string(),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}
