//! Output format lookup
//!
//! The CLI resolves its `--format` flag through a `FormatRegistry`.

use crate::inix::document::Document;
use std::collections::BTreeMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// One output format the CLI can select with `--format`.
pub trait Formatter: Send + Sync {
    /// Registry key, e.g. "ini"
    fn name(&self) -> &'static str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    fn description(&self) -> &'static str {
        ""
    }
}

/// Formatters by name. Names iterate in sorted order.
#[derive(Default)]
pub struct FormatRegistry {
    formatters: BTreeMap<&'static str, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ini, json and yaml formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::IniFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    /// Add a formatter, replacing any registered under the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters.insert(formatter.name(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?
            .serialize(doc)
    }

    pub fn list_formats(&self) -> Vec<&'static str> {
        self.formatters.keys().copied().collect()
    }

    /// `(name, description)` pairs for help output
    pub fn descriptions(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.formatters
            .iter()
            .map(|(name, formatter)| (*name, formatter.description()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UpperFormatter;
    impl Formatter for UpperFormatter {
        fn name(&self) -> &'static str {
            "ini"
        }
        fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
            Ok(crate::inix::formats::dump(doc).to_uppercase())
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());
        assert!(registry.get("ini").is_none());
    }

    #[test]
    fn test_defaults_are_sorted() {
        let registry = FormatRegistry::default();
        assert!(registry.list_formats().is_empty());

        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.list_formats(), ["ini", "json", "yaml"]);
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(UpperFormatter);
        let doc: Document = "[a]\nk=v".parse().unwrap();

        assert_eq!(registry.serialize(&doc, "ini").unwrap(), "[A]\nK=V\n\n");
        assert_eq!(registry.list_formats().len(), 3);
        assert_eq!(registry.get("ini").map(|f| f.description()), Some(""));
    }

    #[test]
    fn test_descriptions() {
        let registry = FormatRegistry::with_defaults();
        let names: Vec<_> = registry.descriptions().map(|(name, _)| name).collect();
        assert_eq!(names, ["ini", "json", "yaml"]);
        assert!(registry.descriptions().all(|(_, text)| !text.is_empty()));
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.serialize(&Document::new(), "toml"),
            Err(FormatError::FormatNotFound("toml".to_string()))
        );
    }
}
