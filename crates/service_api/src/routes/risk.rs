//! Leverage and rollover check endpoints
//!
//! Both checks are stateless comparisons evaluated fresh per request. The
//! leverage observation is a random draw (the dashboard has no data feed);
//! a seed pins it for tests.

use axum::{response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};

use dash_risk::leverage::{LeverageLimit, LeverageSnapshot, LeverageStatus};
use dash_risk::rollover::{FuturesPosition, RolloverPolicy, RolloverStatus};
use dash_sim::rng::SimRng;

use super::AppState;
use crate::error::ApiError;

/// Leverage check request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeverageRequest {
    /// Leverage limit in percent, in [100, 500].
    pub limit_pct: u32,
    /// Optional seed pinning the simulated observation.
    pub seed: Option<u64>,
}

impl Default for LeverageRequest {
    fn default() -> Self {
        Self {
            limit_pct: 200,
            seed: None,
        }
    }
}

/// Leverage check response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeverageResponse {
    pub current_pct: u32,
    pub limit_pct: u32,
    pub status: LeverageStatus,
    pub message: String,
}

/// Rollover check request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RolloverRequest {
    /// Number of contracts in the position, in [1, 100].
    pub contracts: u32,
    /// Days until the current contract expires, in [1, 30].
    pub days_to_expiry: u32,
    /// Days before expiry at which to roll, in [1, 10].
    pub rollover_days: u32,
}

impl Default for RolloverRequest {
    fn default() -> Self {
        Self {
            contracts: 10,
            days_to_expiry: 5,
            rollover_days: 3,
        }
    }
}

/// Rollover check response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolloverResponse {
    pub contracts: u32,
    pub days_to_expiry: u32,
    pub rollover_days: u32,
    pub status: RolloverStatus,
    pub message: String,
}

/// Build the risk routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/risk/leverage", post(leverage_handler))
        .route("/api/v1/risk/rollover", post(rollover_handler))
}

/// POST /api/v1/risk/leverage - Check current leverage against the limit
async fn leverage_handler(
    Json(req): Json<LeverageRequest>,
) -> Result<Json<LeverageResponse>, ApiError> {
    let limit = LeverageLimit::new(req.limit_pct)?;

    let mut rng = SimRng::from_optional_seed(req.seed);
    let snapshot = LeverageSnapshot::sample(&mut rng);
    let status = limit.check(&snapshot);

    let message = match status {
        LeverageStatus::ExceedsLimit => format!(
            "Leverage {}% exceeds the {}% limit",
            snapshot.current_pct(),
            limit.pct()
        ),
        LeverageStatus::WithinLimit => format!(
            "Leverage {}% is within the {}% limit",
            snapshot.current_pct(),
            limit.pct()
        ),
    };

    if status.is_alert() {
        tracing::warn!(
            current_pct = snapshot.current_pct(),
            limit_pct = limit.pct(),
            "leverage limit exceeded"
        );
    }

    Ok(Json(LeverageResponse {
        current_pct: snapshot.current_pct(),
        limit_pct: limit.pct(),
        status,
        message,
    }))
}

/// POST /api/v1/risk/rollover - Check whether the position should roll now
async fn rollover_handler(
    Json(req): Json<RolloverRequest>,
) -> Result<Json<RolloverResponse>, ApiError> {
    let position = FuturesPosition::new(req.contracts, req.days_to_expiry)?;
    let policy = RolloverPolicy::new(req.rollover_days)?;
    let status = policy.check(&position);

    let message = match status {
        RolloverStatus::RolloverDue => {
            "Time to roll the futures position".to_string()
        }
        RolloverStatus::TimeRemaining => {
            "There is still time before the futures expire".to_string()
        }
    };

    Ok(Json(RolloverResponse {
        contracts: position.contracts(),
        days_to_expiry: position.days_to_expiry(),
        rollover_days: policy.days_before_expiry(),
        status,
        message,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router() -> Router {
        routes().with_state(AppState::new(Arc::new(ServerConfig::default())))
    }

    async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_leverage_defaults() {
        let (status, json) = post_json(test_router(), "/api/v1/risk/leverage", "{}").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["limitPct"], 200);

        let current = json["currentPct"].as_u64().unwrap();
        assert!((50..400).contains(&current));

        let expected = if current > 200 {
            "exceeds_limit"
        } else {
            "within_limit"
        };
        assert_eq!(json["status"], expected);
    }

    #[tokio::test]
    async fn test_leverage_limit_out_of_range() {
        let (status, json) =
            post_json(test_router(), "/api/v1/risk/leverage", r#"{"limitPct": 600}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "invalid_input");
    }

    #[tokio::test]
    async fn test_leverage_seeded_is_stable() {
        let body = r#"{"seed": 42}"#;
        let (_, a) = post_json(test_router(), "/api/v1/risk/leverage", body).await;
        let (_, b) = post_json(test_router(), "/api/v1/risk/leverage", body).await;
        assert_eq!(a["currentPct"], b["currentPct"]);
        assert_eq!(a["status"], b["status"]);
    }

    #[tokio::test]
    async fn test_rollover_boundary_is_due() {
        let (status, json) = post_json(
            test_router(),
            "/api/v1/risk/rollover",
            r#"{"daysToExpiry": 5, "rolloverDays": 5}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "rollover_due");
    }

    #[tokio::test]
    async fn test_rollover_defaults_have_time() {
        // Defaults: 5 days to expiry, 3-day window → still time
        let (status, json) = post_json(test_router(), "/api/v1/risk/rollover", "{}").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "time_remaining");
    }

    #[tokio::test]
    async fn test_rollover_out_of_range_rejected() {
        let (status, _) = post_json(
            test_router(),
            "/api/v1/risk/rollover",
            r#"{"contracts": 0}"#,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = post_json(
            test_router(),
            "/api/v1/risk/rollover",
            r#"{"daysToExpiry": 31}"#,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
