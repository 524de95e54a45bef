//! Configuration loading
//!
//! `defaults/inix.default.toml` is embedded into the binary. Callers layer
//! user files and single-key overrides on top of it via [`Loader`] before
//! deserializing into [`InixConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use super::options::ParseOptions;

const DEFAULT_TOML: &str = include_str!("../../defaults/inix.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct InixConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

/// Parser policy as written in configuration files.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub reject_spaces_in_section_names: bool,
    /// Each character is one comment prefix, e.g. `";#"`
    pub comment_prefixes: String,
}

impl From<ParserConfig> for ParseOptions {
    fn from(config: ParserConfig) -> Self {
        ParseOptions {
            reject_spaces_in_section_names: config.reject_spaces_in_section_names,
            comment_prefixes: config.comment_prefixes.chars().collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered format
    pub format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<InixConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<InixConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.parser.reject_spaces_in_section_names);
        assert_eq!(config.parser.comment_prefixes, ";");
        assert_eq!(config.output.format, "ini");
    }

    #[test]
    fn defaults_match_default_parse_options() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(ParseOptions::from(config.parser), ParseOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parser.comment_prefixes", ";#")
            .expect("override to apply")
            .set_override("output.format", "json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        let options = ParseOptions::from(config.parser);
        assert_eq!(options.comment_prefixes, vec![';', '#']);
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[parser]\nreject_spaces_in_section_names = false").unwrap();

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert!(!config.parser.reject_spaces_in_section_names);
        assert_eq!(config.parser.comment_prefixes, ";");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/inix.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "ini");
    }
}
