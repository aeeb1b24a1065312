//! Scrivener Server
//!
//! HTTP surface for the extraction pipeline: one POST /extract route, a
//! health check, and a CORS layer for browser callers.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use axum::http::{header, HeaderValue, Method};
use config::ServerConfig;
use handlers::{create_router, AppState};
use scrivener_extractor::{Extractor, SYSTEM_INSTRUCTION};
use scrivener_llm::AnthropicProvider;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Invalid CORS configuration
    #[error("Invalid CORS configuration: {0}")]
    Cors(String),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the extraction HTTP server
///
/// Initializes tracing, constructs the provider and extractor once, and
/// serves until the process exits.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Scrivener server");
    info!("Bind address: {}", config.bind_addr());
    info!("Model: {}", config.extractor.model);
    info!("Allowed origins: {}", config.allowed_origins.len());

    let provider = AnthropicProvider::new(&config.api_key, &config.extractor.model)
        .with_system(SYSTEM_INSTRUCTION);
    let extractor = Extractor::new(provider, config.extractor.clone());

    let state = AppState {
        extractor: Arc::new(extractor),
    };

    let cors = build_cors_layer(&config.allowed_origins)?;
    let app = create_router(state).layer(cors);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

/// Build the CORS layer from the configured origin allow-list
fn build_cors_layer(origins: &[String]) -> Result<CorsLayer, ServerError> {
    let parsed = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| ServerError::Cors(format!("invalid origin {:?}: {}", origin, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
