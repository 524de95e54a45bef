//! YAML serializer

use super::registry::{FormatError, Formatter};
use crate::inix::document::Document;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &'static str {
        "YAML mapping of sections"
    }
}
