//! Combine per-chunk results into one final result

use crate::types::{FinalResult, PartialResult};

/// Concatenate partial results into a final result
///
/// Input order is chunk order and is preserved. Nothing is deduplicated,
/// sorted, or scored; a fact split across a chunk boundary can appear
/// twice, once per side.
pub fn merge(results: Vec<PartialResult>) -> FinalResult {
    let mut merged = FinalResult::default();

    for partial in results {
        merged.extracted_values.extend(partial.extracted_values);
    }

    merged
}
