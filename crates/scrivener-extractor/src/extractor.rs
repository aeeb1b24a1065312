//! Core Extractor implementation

use crate::chunking::TextChunker;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::merge::merge;
use crate::parser::parse_response;
use crate::prompt::PromptBuilder;
use crate::types::{ExtractionRequest, FinalResult};
use scrivener_domain::CompletionProvider;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The Extractor drives one request through chunk → extract → merge
///
/// Chunks are processed strictly sequentially, in document order, in a
/// single pass with no retries. Failure handling is asymmetric on purpose:
/// a chunk whose completion call fails (or comes back empty) is skipped and
/// processing continues, while a chunk whose reply cannot be parsed aborts
/// the whole request and discards any earlier partial results.
pub struct Extractor<P>
where
    P: CompletionProvider,
{
    provider: Arc<P>,
    config: ExtractorConfig,
}

impl<P> Extractor<P>
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    /// Create a new Extractor around an injected provider
    pub fn new(provider: P, config: ExtractorConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Extract the requested fields from the document
    pub async fn extract(&self, request: ExtractionRequest) -> Result<FinalResult, ExtractorError> {
        let chunker = TextChunker::new(self.config.max_chunk_size);
        let chunks = chunker.chunk(&request.document_text);

        info!(
            "Starting extraction: {} fields, {} chars, {} chunks",
            request.fields.len(),
            request.document_text.len(),
            chunks.len()
        );

        let mut partials = Vec::new();

        for (idx, chunk) in chunks.iter().enumerate() {
            debug!("Processing chunk {}/{}", idx + 1, chunks.len());

            let prompt = PromptBuilder::new(chunk.clone(), request.fields.clone()).build();

            let raw = match self.call_provider(prompt).await {
                Ok(raw) => raw,
                Err(e) => {
                    // Call-level failures are tolerated per chunk
                    warn!("Chunk {}/{} skipped: {}", idx + 1, chunks.len(), e);
                    continue;
                }
            };

            if raw.is_empty() {
                warn!("Chunk {}/{} returned no content, skipping", idx + 1, chunks.len());
                continue;
            }

            // A reply that fails to parse aborts the whole request
            let partial = parse_response(&raw)?;
            debug!(
                "Chunk {}/{} yielded {} values",
                idx + 1,
                chunks.len(),
                partial.extracted_values.len()
            );
            partials.push(partial);
        }

        let result = merge(partials);

        info!(
            "Extraction complete: {} values from {} chunks",
            result.extracted_values.len(),
            chunks.len()
        );

        Ok(result)
    }

    /// Call the completion provider
    async fn call_provider(&self, prompt: String) -> Result<String, ExtractorError> {
        let provider = Arc::clone(&self.provider);
        let max_tokens = self.config.response_token_budget();

        // Call in a blocking context since CompletionProvider is not async
        tokio::task::spawn_blocking(move || {
            provider
                .complete(&prompt, max_tokens)
                .map_err(|e| ExtractorError::Completion(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Completion(format!("Task join error: {}", e)))?
    }
}
