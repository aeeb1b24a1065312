//! Anthropic Provider Implementation
//!
//! Integration with the Anthropic Messages API over plain HTTP.
//!
//! # Features
//!
//! - Async HTTP communication via reqwest
//! - Configurable endpoint, model, and fixed system instruction
//! - Transport-level timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use scrivener_llm::AnthropicProvider;
//!
//! let provider = AnthropicProvider::new("sk-ant-...", "claude-3-haiku-20240307");
//!
//! // The inherent `complete` method is async; the `CompletionProvider`
//! // trait exposes a blocking wrapper for sync callers.
//! ```

use crate::LlmError;
use scrivener_domain::CompletionProvider as CompletionProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Anthropic API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";

/// API version header value required by the Messages API
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default model for extraction calls
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";

/// Default timeout for completion requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Anthropic Messages API provider
///
/// Issues one request per completion and returns the text of the first
/// content block of the response. No retries are attempted; transient
/// failures surface as `LlmError` and the caller decides what to do.
pub struct AnthropicProvider {
    endpoint: String,
    api_key: String,
    model: String,
    system: Option<String>,
    client: reqwest::Client,
}

/// Request body for the Messages API
#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<Message<'a>>,
}

/// One conversation turn
#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

/// Response from the Messages API
#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

/// One content block of the response
#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    #[allow(dead_code)]
    kind: String,
    #[serde(default)]
    text: String,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider
    ///
    /// # Parameters
    ///
    /// - `api_key`: API credential sent as the `x-api-key` header
    /// - `model`: model identifier (e.g. "claude-3-haiku-20240307")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            system: None,
            client,
        }
    }

    /// Override the API endpoint (useful for proxies and tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set a fixed system instruction sent with every completion
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// The configured model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request a completion from the Messages API
    ///
    /// # Returns
    ///
    /// The text of the first content block, or an empty string when the
    /// model returned no content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the request cannot be sent or times out
    /// - the API rejects the model or the credential
    /// - the rate limit is exceeded
    /// - the response body is not the expected shape
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        let url = format!("{}/v1/messages", self.endpoint);

        let request_body = MessagesRequest {
            model: &self.model,
            max_tokens,
            system: self.system.as_deref(),
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let parsed: MessagesResponse = response.json().await.map_err(|e| {
                LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;

            // "No content" is a legal reply and maps to the empty string
            Ok(parsed
                .content
                .into_iter()
                .next()
                .map(|block| block.text)
                .unwrap_or_default())
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(LlmError::ModelNotAvailable(self.model.clone()))
        } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            Err(LlmError::RateLimitExceeded)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )))
        }
    }
}

impl CompletionProviderTrait for AnthropicProvider {
    type Error = LlmError;

    fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, Self::Error> {
        // Blocking wrapper for the async method; callers run this off the
        // async runtime (e.g. via spawn_blocking)
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.complete(prompt, max_tokens).await })
    }
}
