//! Scrivener LLM Provider Layer
//!
//! Pluggable implementations of the `CompletionProvider` trait from
//! `scrivener-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing
//! - `AnthropicProvider`: Anthropic Messages API integration
//!
//! # Examples
//!
//! ```
//! use scrivener_llm::MockProvider;
//! use scrivener_domain::CompletionProvider;
//!
//! let provider = MockProvider::new("{}");
//! let result = provider.complete("test prompt", 256).unwrap();
//! assert_eq!(result, "{}");
//! ```

#![warn(missing_docs)]

pub mod anthropic;

use scrivener_domain::CompletionProvider;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use anthropic::AnthropicProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// A canned reply held by the mock
enum CannedReply {
    Text(String),
    Error(String),
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Queued replies (if any) are consumed first, in FIFO order; once the
/// queue is empty the fixed default response is returned for every call.
///
/// # Examples
///
/// ```
/// use scrivener_llm::MockProvider;
/// use scrivener_domain::CompletionProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("{}");
/// assert_eq!(provider.complete("any prompt", 100).unwrap(), "{}");
///
/// // A sequence of per-call replies
/// let provider = MockProvider::new("{}");
/// provider.queue_response("first");
/// provider.queue_response("second");
/// assert_eq!(provider.complete("p", 100).unwrap(), "first");
/// assert_eq!(provider.complete("p", 100).unwrap(), "second");
/// assert_eq!(provider.complete("p", 100).unwrap(), "{}");
/// ```
#[derive(Clone)]
pub struct MockProvider {
    default_reply: Arc<CannedDefault>,
    queued: Arc<Mutex<VecDeque<CannedReply>>>,
    call_count: Arc<Mutex<usize>>,
}

enum CannedDefault {
    Text(String),
    Error(String),
}

impl MockProvider {
    /// Create a provider returning a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_reply: Arc::new(CannedDefault::Text(response.into())),
            queued: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a provider that fails every call with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            default_reply: Arc::new(CannedDefault::Error(message.into())),
            queued: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a response consumed by the next unanswered call
    pub fn queue_response(&self, response: impl Into<String>) {
        self.queued
            .lock()
            .unwrap()
            .push_back(CannedReply::Text(response.into()));
    }

    /// Queue an error consumed by the next unanswered call
    pub fn queue_error(&self, message: impl Into<String>) {
        self.queued
            .lock()
            .unwrap()
            .push_back(CannedReply::Error(message.into()));
    }

    /// Get the number of times `complete` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl CompletionProvider for MockProvider {
    type Error = LlmError;

    fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(reply) = self.queued.lock().unwrap().pop_front() {
            return match reply {
                CannedReply::Text(text) => Ok(text),
                CannedReply::Error(message) => Err(LlmError::Other(message)),
            };
        }

        match self.default_reply.as_ref() {
            CannedDefault::Text(text) => Ok(text.clone()),
            CannedDefault::Error(message) => Err(LlmError::Other(message.clone())),
        }
    }
}
