//! Line Classification
//!
//! Decides what a single physical line is, independent of parser state.
//! Whether an entry is allowed at this point is the parser's concern.

use crate::inix::options::ParseOptions;

/// The shape of one trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    /// `[name]`, with the brackets stripped and the name left untrimmed
    Header(&'a str),
    /// `key = value`, both sides trimmed
    Entry { key: &'a str, value: &'a str },
    /// Text that is neither a header nor contains `=`
    Malformed,
}

/// Classify a raw line. Leading and trailing whitespace is ignored.
pub fn classify_line<'a>(raw: &'a str, options: &ParseOptions) -> Line<'a> {
    let line = raw.trim();

    if line.is_empty() {
        return Line::Blank;
    }
    if options.is_comment(line) {
        return Line::Comment;
    }
    if let Some(name) = header_name(line) {
        return Line::Header(name);
    }

    match line.split_once('=') {
        Some((key, value)) => Line::Entry {
            key: key.trim(),
            value: value.trim(),
        },
        None => Line::Malformed,
    }
}

fn header_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}
