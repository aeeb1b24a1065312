//! Scrivener Extractor
//!
//! Extracts user-defined structured fields from arbitrary-length documents
//! by delegating to an LLM, working around the model's fixed token budget
//! through chunking and result merging.
//!
//! # Architecture
//!
//! ```text
//! Document → Chunker → per-chunk Prompt → CompletionProvider → Parser → Merger
//! ```
//!
//! # Key Behaviors
//!
//! - **Word-bounded chunking**: documents are split on whitespace into
//!   chunks near a configured size; no overlap, no sentence awareness
//! - **Sequential processing**: chunks are extracted one at a time, in
//!   document order
//! - **Asymmetric failure policy**: a failed or empty completion skips that
//!   chunk; a completion that cannot be parsed aborts the whole request
//! - **Order-preserving merge**: per-chunk results are concatenated in
//!   chunk order, without deduplication
//!
//! # Example Usage
//!
//! ```no_run
//! use scrivener_domain::FieldSpec;
//! use scrivener_extractor::{Extractor, ExtractorConfig, ExtractionRequest};
//! use scrivener_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new("{}");
//! let extractor = Extractor::new(provider, ExtractorConfig::default());
//!
//! let request = ExtractionRequest {
//!     document_text: "Alice age 30. Bob age 25.".to_string(),
//!     fields: vec![FieldSpec {
//!         name: "age".to_string(),
//!         data_type: "number".to_string(),
//!         description: "the person's age".to_string(),
//!     }],
//! };
//!
//! let result = extractor.extract(request).await?;
//! println!("Extracted: {} values", result.extracted_values.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod chunking;
mod config;
mod error;
mod extractor;
mod merge;
mod parser;
mod prompt;
mod types;


pub use chunking::TextChunker;
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use merge::merge;
pub use parser::parse_response;
pub use prompt::{PromptBuilder, SYSTEM_INSTRUCTION};
pub use types::{ExtractionRequest, FinalResult, PartialResult};
