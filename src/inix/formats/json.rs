//! JSON serializer: `{ "section": { "key": "value" } }`

use super::registry::{FormatError, Formatter};
use crate::inix::document::Document;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &'static str {
        "Pretty-printed JSON object of sections"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_is_nested_object() {
        let doc: Document = "[a]\nk=v".parse().unwrap();
        let json = JsonFormatter.serialize(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["a"]["k"], "v");
    }

    #[test]
    fn test_json_deserializes_back() {
        let doc: Document = "[a]\nk=v\n[b]\nx=y".parse().unwrap();
        let json = JsonFormatter.serialize(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();

        assert_eq!(back, doc);
    }
}
