//! Parsing
//!
//! A single pass over the input lines. The parser is a two-state machine:
//!
//! - `NoSectionOpen` until the first header is seen. Entries here are an error.
//! - `SectionOpen` afterwards. Each new header flushes the open section into
//!   the document and opens a fresh one; end of input flushes the last one.
//!
//! Parsing stops at the first error. Line numbers are 1-based and count every
//! physical line, including blanks and comments.

pub mod line_classification;

use std::mem;

use super::document::{Document, Section};
use super::error::{ParseError, ParseErrorKind};
use super::options::ParseOptions;
use line_classification::{classify_line, Line};

/// Parse with the default (strict) options.
pub fn parse(content: &str) -> Result<Document, ParseError> {
    parse_with(content, &ParseOptions::default())
}

pub fn parse_with(content: &str, options: &ParseOptions) -> Result<Document, ParseError> {
    let mut parser = Parser::new(options);

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        parser.feed(line, raw).map_err(|kind| {
            log::debug!("parse failed on line {line}: {kind}");
            ParseError::new(line, kind)
        })?;
    }

    Ok(parser.finish())
}

enum State {
    NoSectionOpen,
    SectionOpen { name: String, entries: Section },
}

/// Represents an on-going parse.
struct Parser<'o> {
    options: &'o ParseOptions,
    document: Document,
    state: State,
}

impl<'o> Parser<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            document: Document::new(),
            state: State::NoSectionOpen,
        }
    }

    fn feed(&mut self, line_no: usize, raw: &str) -> Result<(), ParseErrorKind> {
        match classify_line(raw, self.options) {
            Line::Blank | Line::Comment => Ok(()),
            Line::Header(name) => self.open_section(line_no, name),
            Line::Entry { key, value } => self.insert_entry(key, value),
            Line::Malformed => match self.state {
                State::NoSectionOpen => Err(ParseErrorKind::KeyOutsideSection),
                State::SectionOpen { .. } => Err(ParseErrorKind::InvalidSyntax),
            },
        }
    }

    fn open_section(&mut self, line_no: usize, name: &str) -> Result<(), ParseErrorKind> {
        self.flush();

        if self.options.reject_spaces_in_section_names && name.contains(' ') {
            return Err(ParseErrorKind::InvalidSectionName);
        }
        if self.document.contains_section(name) {
            return Err(ParseErrorKind::DuplicateSection {
                name: name.to_string(),
            });
        }

        log::trace!("line {line_no}: opening section '{name}'");
        self.state = State::SectionOpen {
            name: name.to_string(),
            entries: Section::new(),
        };
        Ok(())
    }

    fn insert_entry(&mut self, key: &str, value: &str) -> Result<(), ParseErrorKind> {
        let State::SectionOpen { name, entries } = &mut self.state else {
            return Err(ParseErrorKind::KeyOutsideSection);
        };

        if entries.contains_key(key) {
            return Err(ParseErrorKind::DuplicateKey {
                section: name.clone(),
                key: key.to_string(),
            });
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Move the open section, if any, into the document.
    fn flush(&mut self) {
        if let State::SectionOpen { name, entries } =
            mem::replace(&mut self.state, State::NoSectionOpen)
        {
            log::debug!("section '{}' closed with {} keys", name, entries.len());
            self.document.insert_section(name, entries);
        }
    }

    fn finish(mut self) -> Document {
        self.flush();
        self.document
    }
}
