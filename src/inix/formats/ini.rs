//! INI serializer
//!
//! Every section becomes a `[name]` line, one `key=value` line per entry and a
//! trailing blank line. Nothing is escaped: names or values containing `=`,
//! `[`, `]` or a comment prefix will not survive a round trip through the parser.

use std::fmt::Write;

use super::registry::{FormatError, Formatter};
use crate::inix::document::Document;

pub fn dump(document: &Document) -> String {
    let mut out = String::new();

    for (name, section) in document {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "[{name}]");
        for (key, value) in section {
            let _ = writeln!(out, "{key}={value}");
        }
        out.push('\n');
    }

    out
}

pub struct IniFormatter;

impl Formatter for IniFormatter {
    fn name(&self) -> &'static str {
        "ini"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(dump(doc))
    }

    fn description(&self) -> &'static str {
        "INI text, readable by the parser"
    }
}
