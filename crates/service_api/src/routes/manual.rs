//! Reference manual download endpoint
//!
//! The manual is compiled into the binary, so serving it involves no
//! filesystem access at request time.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};

use super::AppState;

/// The bundled reference document.
const MANUAL: &str = include_str!("../../assets/manual.md");

/// Build the manual routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/manual", get(manual_handler))
}

/// GET /manual - Download the bundled reference manual
async fn manual_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"manual.md\"",
            ),
        ],
        MANUAL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router() -> Router {
        routes().with_state(AppState::new(Arc::new(ServerConfig::default())))
    }

    #[tokio::test]
    async fn test_manual_is_served_as_attachment() {
        let response = test_router()
            .oneshot(Request::builder().uri("/manual").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.contains("attachment"));
        assert!(disposition.contains("manual.md"));
    }

    #[tokio::test]
    async fn test_manual_content_is_bundled() {
        let response = test_router()
            .oneshot(Request::builder().uri("/manual").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("Black-Scholes"));
        assert!(text.contains("Rollover"));
    }
}
