//! Black-Scholes pricing endpoint
//!
//! Rate and volatility arrive as percentages, matching the dashboard input
//! widgets, and are converted to decimals before pricing.

use axum::{response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};

use dash_models::black_scholes::{
    call_price, delta, gamma, put_price, vega, OptionKind, OptionParams,
};

use super::AppState;
use crate::error::ApiError;

/// Option pricing request; defaults match the dashboard widgets.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionPriceRequest {
    /// Underlying asset price.
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Risk-free rate in percent (5.0 means 5%).
    pub rate_pct: f64,
    /// Time to expiry in years.
    pub expiry_years: f64,
    /// Volatility in percent (20.0 means 20%).
    pub volatility_pct: f64,
}

impl Default for OptionPriceRequest {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            rate_pct: 5.0,
            expiry_years: 1.0,
            volatility_pct: 20.0,
        }
    }
}

/// Option pricing response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionPriceResponse {
    pub call_price: f64,
    pub put_price: f64,
    pub d1: f64,
    pub d2: f64,
    pub call_delta: f64,
    pub gamma: f64,
    pub vega: f64,
}

/// Build the pricing routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/price/option", post(price_handler))
}

/// POST /api/v1/price/option - Price a European option
async fn price_handler(
    Json(req): Json<OptionPriceRequest>,
) -> Result<Json<OptionPriceResponse>, ApiError> {
    let params = OptionParams::new(
        req.spot,
        req.strike,
        req.rate_pct / 100.0,
        req.expiry_years,
        req.volatility_pct / 100.0,
    )?;

    let response = OptionPriceResponse {
        call_price: call_price(&params),
        put_price: put_price(&params),
        d1: params.d1(),
        d2: params.d2(),
        call_delta: delta(&params, OptionKind::Call),
        gamma: gamma(&params),
        vega: vega(&params),
    };

    tracing::debug!(
        spot = req.spot,
        strike = req.strike,
        call_price = response.call_price,
        "option priced"
    );

    Ok(Json(response))
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

    async fn post_json(router: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/price/option")
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
    async fn test_default_inputs_price_atm_call() {
        let (status, json) = post_json(test_router(), "{}").await;
        assert_eq!(status, StatusCode::OK);

        // S=100, K=100, r=5%, t=1y, σ=20% → C ≈ 10.45
        let call = json["callPrice"].as_f64().unwrap();
        assert!((call - 10.4506).abs() < 0.001);

        let put = json["putPrice"].as_f64().unwrap();
        assert!((put - 5.5735).abs() < 0.001);
    }

    #[tokio::test]
    async fn test_zero_expiry_rejected() {
        let (status, json) = post_json(test_router(), r#"{"expiryYears": 0.0}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "invalid_input");
        assert!(json["message"].as_str().unwrap().contains("expiry"));
    }

    #[tokio::test]
    async fn test_zero_volatility_rejected() {
        let (status, json) = post_json(test_router(), r#"{"volatilityPct": 0.0}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["message"].as_str().unwrap().contains("volatility"));
    }

    #[tokio::test]
    async fn test_response_never_contains_nan() {
        // A rejected request is the only path for undefined inputs, so a 200
        // response is always finite
        let (status, json) = post_json(test_router(), r#"{"spot": 150.0}"#).await;
        assert_eq!(status, StatusCode::OK);
        for key in ["callPrice", "putPrice", "d1", "d2", "callDelta", "gamma", "vega"] {
            assert!(json[key].as_f64().unwrap().is_finite(), "{} not finite", key);
        }
    }
}
