//! Parse raw model replies into partial results

use crate::error::ExtractorError;
use crate::types::PartialResult;

/// Parse one chunk's raw model reply
///
/// Decoding is strict: the reply must be valid JSON, and every item under
/// `extracted_values` must carry both `value` and `reference`. A bare `{}`
/// is the model's documented "no findings" reply and decodes to an empty
/// `PartialResult`. Anything else fails with a diagnostic that carries the
/// raw text for the caller to surface.
pub fn parse_response(raw: &str) -> Result<PartialResult, ExtractorError> {
    serde_json::from_str(raw).map_err(|e| ExtractorError::MalformedResponse {
        detail: e.to_string(),
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_payload() {
        let raw = r#"{
            "extracted_values": [
                {"value": "30", "reference": "Alice age 30"},
                {"value": "25", "reference": "Bob age 25"}
            ]
        }"#;

        let partial = parse_response(raw).unwrap();
        assert_eq!(partial.extracted_values.len(), 2);
        assert_eq!(partial.extracted_values[0].value, "30");
        assert_eq!(partial.extracted_values[1].reference, "Bob age 25");
    }

    #[test]
    fn test_parse_empty_object_is_no_findings() {
        let partial = parse_response("{}").unwrap();
        assert!(partial.extracted_values.is_empty());
    }

    #[test]
    fn test_parse_empty_list() {
        let partial = parse_response(r#"{"extracted_values": []}"#).unwrap();
        assert!(partial.extracted_values.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_response("not json");
        match result {
            Err(ExtractorError::MalformedResponse { raw, .. }) => {
                assert_eq!(raw, "not json");
            }
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_item_missing_reference_is_rejected() {
        let raw = r#"{"extracted_values": [{"value": "30"}]}"#;
        assert!(parse_response(raw).is_err());
    }

    #[test]
    fn test_parse_wrong_top_level_type_is_rejected() {
        assert!(parse_response(r#"["not", "an", "object"]"#).is_err());
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let raw = r#"{"extracted_values": [], "note": "ignored"}"#;
        let partial = parse_response(raw).unwrap();
        assert!(partial.extracted_values.is_empty());
    }
}
