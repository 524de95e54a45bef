//! Output format implementations for document serialization
//!
//! - `ini`: the native text form, readable by the parser again
//! - `json` / `yaml`: a nested object of sections, for tooling

pub mod ini;
pub mod json;
pub mod registry;
pub mod yaml;

pub use ini::{dump, IniFormatter};
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use yaml::YamlFormatter;
