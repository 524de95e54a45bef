//! Error values returned by the parser and the document accessors.

use std::fmt;

/// The reason a parse was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A key/value line without a `=` separator
    InvalidSyntax,
    /// A key defined twice in the same section
    DuplicateKey { section: String, key: String },
    /// A key/value line before any section header
    KeyOutsideSection,
    /// A section name containing a space while spaces are rejected
    InvalidSectionName,
    /// A section header repeated later in the input
    DuplicateSection { name: String },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::InvalidSyntax => f.write_str("invalid syntax"),
            ParseErrorKind::DuplicateKey { section, key } => {
                write!(f, "key '{key}' in section '{section}' is already defined")
            }
            ParseErrorKind::KeyOutsideSection => f.write_str("key should be defined in section"),
            ParseErrorKind::InvalidSectionName => f.write_str("section name cannot use spaces"),
            ParseErrorKind::DuplicateSection { name } => {
                write!(f, "section '{name}' is already defined")
            }
        }
    }
}

/// A parse failure, tagged with the 1-based line it happened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    line: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }

    /// 1-based line number of the offending line
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The message without the line prefix
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error on line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for ParseError {}

/// Precondition failures from the [`Document`](crate::inix::Document) accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    SectionAlreadyExists(String),
    SectionNotFound(String),
    KeyNotFound { section: String, key: String },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::SectionAlreadyExists(name) => {
                write!(f, "section '{name}' already exists")
            }
            DocumentError::SectionNotFound(name) => write!(f, "section not found: '{name}'"),
            DocumentError::KeyNotFound { section, key } => {
                write!(f, "key not found: '{key}' in section '{section}'")
            }
        }
    }
}

impl std::error::Error for DocumentError {}
