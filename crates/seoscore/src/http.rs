//! HTTP scoring service.
//!
//! `POST /v1/analyze` scores a JSON content item; `GET /health` reports
//! liveness. The body is taken as raw bytes and parsed here so that every
//! malformed payload maps to `400 Bad Request`.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use seoscore_core::{AnalysisError, AnalysisInput, AnalysisReport, ScoringConfig, analyze};

/// Shared state for the HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Scoring rules applied to every request.
    pub scoring: Arc<ScoringConfig>,
    /// Request body limit in bytes (`None` disables it).
    pub max_input_bytes: Option<usize>,
}

impl AppState {
    /// Create state from scoring rules and an input limit.
    pub fn new(scoring: ScoringConfig, max_input_bytes: Option<usize>) -> Self {
        Self {
            scoring: Arc::new(scoring),
            max_input_bytes,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScoringConfig::default(), Some(seoscore_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

/// Errors surfaced to HTTP clients.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was rejected before scoring.
    Analysis(AnalysisError),
    /// The scoring task did not complete.
    Internal(String),
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        Self::Analysis(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis(err) => write!(f, "{err}"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Analysis(AnalysisError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::Analysis(AnalysisError::InputTooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(status = status.as_u16(), error = %self, "rejected request");

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Crate version.
    pub version: String,
}

/// Build the router with all routes.
///
/// axum's default body limit is lifted; [`AppState::max_input_bytes`]
/// is enforced by the handler instead.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/analyze", post(analyze_handler))
        .layer(axum::extract::DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /v1/analyze`
///
/// Responds `200` with the report, `400` for malformed JSON, a missing
/// field or a wrong type, and `413` when the body exceeds the limit.
/// Scoring runs on the blocking pool so large bodies never stall other
/// connections.
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisReport>, ApiError> {
    let input = AnalysisInput::from_slice_limited(&body, state.max_input_bytes)?;
    let scoring = Arc::clone(&state.scoring);
    // Scoring is CPU-bound and fans out on rayon; keep it off the async workers.
    let report = tokio::task::spawn_blocking(move || analyze(&input, &scoring))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    tracing::info!(bytes = body.len(), overall = report.overall, "scored request");
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    async fn post_analyze(state: AppState, body: &str) -> (StatusCode, serde_json::Value) {
        let response = router(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/analyze")
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
    async fn health_reports_service() {
        let response = router(AppState::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn analyze_returns_report() {
        let (status, json) = post_analyze(
            AppState::default(),
            r#"{"title":"","description":"","content":"law law law","keywords":["law"]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"]["score"], 55);
        assert_eq!(json["keywords"]["density"], 100.0);
        assert_eq!(json["readability"]["level"], "Easy");
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (status, json) = post_analyze(AppState::default(), "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("invalid analysis input"));
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        let (status, json) =
            post_analyze(AppState::default(), r#"{"title":"","description":""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("content"));
    }

    #[tokio::test]
    async fn wrong_type_is_bad_request() {
        let (status, _) = post_analyze(
            AppState::default(),
            r#"{"title":"","description":"","content":"","keywords":"law"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let state = AppState::new(ScoringConfig::default(), Some(16));
        let (status, json) = post_analyze(
            state,
            r#"{"title":"","description":"","content":"","keywords":[]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(json["error"].as_str().unwrap().contains("limit: 16"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = router(AppState::default())
            .oneshot(Request::builder().uri("/v2/analyze").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn large_requests_score_off_the_runtime_thread() {
        let content = vec!["The court ruled on the lease."; 20_000].join(" ");
        let body = serde_json::json!({
            "title": "",
            "description": "",
            "content": content,
            "keywords": ["lease"],
        })
        .to_string();

        let app = router(AppState::default());
        let requests = (0..4).map(|_| {
            app.clone().oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/analyze")
                    .body(Body::from(body.clone()))
                    .unwrap(),
            )
        });
        let health = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap());

        let (responses, health) = tokio::join!(join_spawned(requests), health);
        assert_eq!(health.unwrap().status(), StatusCode::OK);
        for response in responses {
            assert_eq!(response.unwrap().status(), StatusCode::OK);
        }
    }

    async fn join_spawned<F, T>(futures: impl Iterator<Item = F>) -> Vec<T>
    where
        F: std::future::Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let handles: Vec<_> = futures.map(tokio::spawn).collect();
        let mut out = Vec::with_capacity(handles.len());
        for handle in handles {
            out.push(handle.await.unwrap());
        }
        out
    }

    #[test]
    fn internal_error_maps_to_500() {
        let response = ApiError::Internal("task cancelled".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
