//! Error types for the extraction pipeline

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The completion call failed; per-chunk, tolerated by the pipeline
    #[error("Completion error: {0}")]
    Completion(String),

    /// The model's reply was not valid JSON of the documented shape;
    /// fatal for the whole request
    #[error("Malformed model response: {detail}")]
    MalformedResponse {
        /// Decode diagnostic from the JSON parser
        detail: String,
        /// The raw reply that failed to decode
        raw: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
