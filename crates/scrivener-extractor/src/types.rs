//! Request and result types for extraction

use scrivener_domain::{ExtractedItem, FieldSpec};
use serde::{Deserialize, Serialize};

/// Request to extract fields from a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// The full document text to extract from
    pub document_text: String,

    /// Fields to extract, in the order the caller supplied them
    pub fields: Vec<FieldSpec>,
}

/// The parsed output of one chunk's model call
///
/// The model's documented "no findings" reply is a bare `{}`; the serde
/// default on `extracted_values` decodes that to an empty result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialResult {
    /// Items extracted from this chunk; may be empty
    #[serde(default)]
    pub extracted_values: Vec<ExtractedItem>,
}

/// The merged output of one extraction request
///
/// Holds the concatenation of all cleanly parsed partial results in chunk
/// order. This is the sole externally visible output of a successful
/// request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinalResult {
    /// All extracted items, in chunk order
    pub extracted_values: Vec<ExtractedItem>,
}
