//! Configuration file parsing for the extraction server.
//!
//! Loads settings from TOML files: bind address, API credential, allowed
//! CORS origins, and the extraction pipeline's token budgets.

use scrivener_extractor::ExtractorConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable overriding the configured API credential
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Invalid field value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g. "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g. 8080)
    pub bind_port: u16,

    /// API credential for the completion provider; the ANTHROPIC_API_KEY
    /// environment variable takes precedence over this value
    #[serde(default)]
    pub api_key: String,

    /// Origins allowed by the CORS layer
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Extraction pipeline settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

impl ServerConfig {
    /// Load configuration from a TOML file
    ///
    /// The ANTHROPIC_API_KEY environment variable, when set, overrides the
    /// file's `api_key` value.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: ServerConfig = toml::from_str(&contents)?;

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                config.api_key = key;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingField("api_key".to_string()));
        }
        self.extractor.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            api_key: "test-key-do-not-use-in-production".to_string(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            extractor: ExtractorConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
