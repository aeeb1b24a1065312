//! Field module - the user-facing description of what to extract

use serde::{Deserialize, Serialize};

/// A user-defined field to extract from a document.
///
/// Fields are immutable once a request is in flight and live only for the
/// duration of that request. Uniqueness by `name` is not enforced; two
/// fields with the same name are passed to the model as given.
///
/// # Examples
///
/// ```
/// use scrivener_domain::FieldSpec;
///
/// let field = FieldSpec {
///     name: "age".to_string(),
///     data_type: "number".to_string(),
///     description: "the person's age".to_string(),
/// };
/// assert_eq!(field.describe(), "age number : the person's age");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name (e.g. "age", "invoice_total")
    pub name: String,

    /// Expected data type, free-form (e.g. "number", "date")
    pub data_type: String,

    /// Natural-language description guiding the model
    pub description: String,
}

impl FieldSpec {
    /// Render the field as the single-line description embedded in prompts.
    pub fn describe(&self) -> String {
        format!("{} {} : {}", self.name, self.data_type, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_format() {
        let field = FieldSpec {
            name: "total".to_string(),
            data_type: "currency".to_string(),
            description: "the invoice total".to_string(),
        };
        assert_eq!(field.describe(), "total currency : the invoice total");
    }

    #[test]
    fn test_deserialize_request_shape() {
        let json = r#"{"name":"age","data_type":"number","description":"the person's age"}"#;
        let field: FieldSpec = serde_json::from_str(json).unwrap();
        assert_eq!(field.name, "age");
        assert_eq!(field.data_type, "number");
    }
}
