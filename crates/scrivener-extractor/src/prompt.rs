//! Prompt construction for field extraction calls

use scrivener_domain::FieldSpec;

/// Fixed system instruction sent with every extraction call
pub const SYSTEM_INSTRUCTION: &str = "Extract data based on user-defined fields only and \
provide references from where exactly in the chunk the data was extracted.";

/// Builds the per-chunk extraction prompt
///
/// One prompt per (chunk, field set) pair: the field descriptions, the
/// literal chunk text, and the output-format contract the parser relies on.
pub struct PromptBuilder {
    chunk: String,
    fields: Vec<FieldSpec>,
}

impl PromptBuilder {
    /// Create a builder for one chunk and the request's fields
    pub fn new(chunk: String, fields: Vec<FieldSpec>) -> Self {
        Self { chunk, fields }
    }

    /// Field descriptions as a single comma-separated line, preserving
    /// input order
    fn field_descriptions(&self) -> String {
        self.fields
            .iter()
            .map(|field| field.describe())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(
            "You are tasked with extracting specific data from the chunk based on the \
             following fields:\n\n",
        );
        prompt.push_str(&self.field_descriptions());
        prompt.push_str("\n\n");

        prompt.push_str(
            "Analyze the text below and extract relevant values. Return the output in \
             the following JSON format:\n\n",
        );
        prompt.push_str(OUTPUT_FORMAT);
        prompt.push_str("\n\n");

        prompt.push_str(INSTRUCTIONS);
        prompt.push_str("\n\nChunk to extract from:\n");
        prompt.push_str(&self.chunk);

        prompt
    }
}

const OUTPUT_FORMAT: &str = r#"{
    "extracted_values": [
        {
            "value": "{extracted_value}",
            "reference": "{brief reference}"
        },
        ...
    ]
}"#;

const INSTRUCTIONS: &str = r#"**Instructions:**
- Omit values like "N/A", "none"; return an empty JSON object: {} as response.
- If no valid values are found, return an empty JSON object: {} as response.
- Ensure the output is strictly valid JSON."#;

#[cfg(test)]
mod tests {
    use super::*;

    fn age_field() -> FieldSpec {
        FieldSpec {
            name: "age".to_string(),
            data_type: "number".to_string(),
            description: "the person's age".to_string(),
        }
    }

    #[test]
    fn test_prompt_includes_field_description() {
        let builder = PromptBuilder::new("Alice age 30".to_string(), vec![age_field()]);
        let prompt = builder.build();
        assert!(prompt.contains("age number : the person's age"));
    }

    #[test]
    fn test_prompt_includes_chunk_text() {
        let builder = PromptBuilder::new("Alice age 30".to_string(), vec![age_field()]);
        let prompt = builder.build();
        assert!(prompt.contains("Chunk to extract from:\nAlice age 30"));
    }

    #[test]
    fn test_prompt_includes_output_contract() {
        let builder = PromptBuilder::new("text".to_string(), vec![age_field()]);
        let prompt = builder.build();
        assert!(prompt.contains("extracted_values"));
        assert!(prompt.contains("strictly valid JSON"));
        assert!(prompt.contains("empty JSON object: {}"));
    }

    #[test]
    fn test_field_order_preserved() {
        let fields = vec![
            FieldSpec {
                name: "last".to_string(),
                data_type: "text".to_string(),
                description: "surname".to_string(),
            },
            FieldSpec {
                name: "first".to_string(),
                data_type: "text".to_string(),
                description: "given name".to_string(),
            },
        ];
        let builder = PromptBuilder::new("text".to_string(), fields);
        let prompt = builder.build();

        let last_pos = prompt.find("last text : surname").unwrap();
        let first_pos = prompt.find("first text : given name").unwrap();
        assert!(last_pos < first_pos);
        assert!(prompt.contains("last text : surname, first text : given name"));
    }
}
