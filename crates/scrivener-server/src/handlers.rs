//! HTTP request handlers for the extraction server.
//!
//! Implements the extraction and health check endpoints using axum.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use scrivener_domain::CompletionProvider;
use scrivener_extractor::{ExtractionRequest, Extractor, ExtractorError, FinalResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared application state
pub struct AppState<P>
where
    P: CompletionProvider,
{
    /// The extraction pipeline, constructed once at startup
    pub extractor: Arc<Extractor<P>>,
}

impl<P> Clone for AppState<P>
where
    P: CompletionProvider,
{
    fn clone(&self) -> Self {
        Self {
            extractor: Arc::clone(&self.extractor),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Extraction pipeline error
    Extraction(ExtractorError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // A reply the parser rejected is the upstream model's fault
            AppError::Extraction(e @ ExtractorError::MalformedResponse { .. }) => {
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
            AppError::Extraction(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<ExtractorError> for AppError {
    fn from(e: ExtractorError) -> Self {
        AppError::Extraction(e)
    }
}

/// POST /extract - extract fields from a document
async fn extract_fields<P>(
    State(state): State<AppState<P>>,
    Json(request): Json<ExtractionRequest>,
) -> Result<Json<FinalResult>, AppError>
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    let result = state.extractor.extract(request).await?;
    Ok(Json(result))
}

/// GET /health - liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router<P>(state: AppState<P>) -> AxumRouter
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    AxumRouter::new()
        .route("/extract", post(extract_fields::<P>))
        .route("/health", get(health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use scrivener_extractor::ExtractorConfig;
    use scrivener_llm::MockProvider;
    use tower::ServiceExt; // for oneshot

    fn test_app(provider: MockProvider) -> AxumRouter {
        let extractor = Extractor::new(provider, ExtractorConfig::default());
        create_router(AppState {
            extractor: Arc::new(extractor),
        })
    }

    fn extract_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/extract")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const AGE_REQUEST: &str = r#"{
        "document_text": "Alice age 30. Bob age 25.",
        "fields": [{"name": "age", "data_type": "number", "description": "the person's age"}]
    }"#;

    #[tokio::test]
    async fn test_health_check() {
        let app = test_app(MockProvider::new("{}"));

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_extract_happy_path() {
        let app = test_app(MockProvider::new(
            r#"{"extracted_values": [{"value": "30", "reference": "Alice age 30"}]}"#,
        ));

        let response = app.oneshot(extract_request(AGE_REQUEST)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["extracted_values"][0]["value"], "30");
    }

    #[tokio::test]
    async fn test_extract_parse_failure_returns_error_object() {
        let app = test_app(MockProvider::new("not json"));

        let response = app.oneshot(extract_request(AGE_REQUEST)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("Malformed"));
    }

    #[tokio::test]
    async fn test_extract_call_failure_is_empty_success() {
        let app = test_app(MockProvider::failing("provider down"));

        let response = app.oneshot(extract_request(AGE_REQUEST)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["extracted_values"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_extract_malformed_request_body_rejected() {
        let app = test_app(MockProvider::new("{}"));

        let response = app
            .oneshot(extract_request(r#"{"document_text": 42}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
