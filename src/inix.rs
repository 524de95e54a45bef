//! Parser and serializer for INI structured data
//!
//! ```text
//! ; comments start with `;` (and optionally `#`)
//! [server]
//! host = localhost
//! port = 8080
//! ```
//!
//! [`parse`] turns text into a [`Document`] of sections, [`dump`] turns a
//! document back into text. Comments are dropped and output is sorted by
//! name, so a round trip is not byte-identical.

pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod options;
pub mod parsing;
pub mod testing;

pub use document::{Document, Section};
pub use error::{DocumentError, ParseError, ParseErrorKind};
pub use formats::{dump, FormatError, FormatRegistry, Formatter};
pub use options::ParseOptions;
pub use parsing::{parse, parse_with};
