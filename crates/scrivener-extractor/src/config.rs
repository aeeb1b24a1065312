//! Configuration for the extraction pipeline

use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
///
/// Token budgets are design constants rather than per-call knobs: the
/// response budget is whatever remains of the total after the estimated
/// prompt share, and chunks are sized to that remainder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Model identifier passed to the completion provider
    pub model: String,

    /// Total token budget for one model call (prompt + response)
    pub total_token_budget: u32,

    /// Estimated share of the budget consumed by the prompt
    pub prompt_token_estimate: u32,

    /// Maximum chunk size (characters); chunks may exceed this by at most
    /// one word
    pub max_chunk_size: usize,
}

impl ExtractorConfig {
    /// Response tokens left after the estimated prompt share
    pub fn response_token_budget(&self) -> u32 {
        self.total_token_budget - self.prompt_token_estimate
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.total_token_budget <= self.prompt_token_estimate {
            return Err(format!(
                "total_token_budget {} must exceed prompt_token_estimate {}",
                self.total_token_budget, self.prompt_token_estimate
            ));
        }
        if self.max_chunk_size == 0 {
            return Err("max_chunk_size must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    /// Defaults matching the original deployment: a 4096-token call with
    /// ~1500 tokens reserved for the prompt, chunks sized to the remainder
    fn default() -> Self {
        Self {
            model: "claude-3-haiku-20240307".to_string(),
            total_token_budget: 4096,
            prompt_token_estimate: 1500,
            max_chunk_size: 2596,
        }
    }
}
