//! Extracted item - one datum plus the text it came from

use serde::{Deserialize, Serialize};

/// One extracted datum together with the textual span that justifies it.
///
/// Items are produced by the model and are not independently validated
/// against the source document; the `reference` is whatever span or
/// justification the model reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedItem {
    /// The extracted value, as the model rendered it
    pub value: String,

    /// The text span or brief justification the value was drawn from
    pub reference: String,
}
