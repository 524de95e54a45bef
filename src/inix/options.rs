//! Parser policy
//!
//! Two dialects of the format exist in the wild: one rejects spaces in section
//! names and only knows `;` comments, the other accepts spaces and also treats
//! `#` as a comment. Both are expressed as a single [`ParseOptions`] value.
//! The default is the strict dialect.

/// Knobs controlling how [`parse_with`](crate::inix::parse_with) treats input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject `[my section]` style headers
    pub reject_spaces_in_section_names: bool,
    /// A trimmed line starting with any of these is a comment
    pub comment_prefixes: Vec<char>,
}

impl ParseOptions {
    /// Accepts spaces in section names and both `;` and `#` comments.
    pub fn permissive() -> Self {
        Self {
            reject_spaces_in_section_names: false,
            comment_prefixes: vec![';', '#'],
        }
    }

    pub fn with_section_spaces(mut self, allowed: bool) -> Self {
        self.reject_spaces_in_section_names = !allowed;
        self
    }

    pub fn with_comment_prefixes<I>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.comment_prefixes = prefixes.into_iter().collect();
        self
    }

    /// Whether an already trimmed line is a comment
    pub fn is_comment(&self, line: &str) -> bool {
        line.chars()
            .next()
            .is_some_and(|c| self.comment_prefixes.contains(&c))
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            reject_spaces_in_section_names: true,
            comment_prefixes: vec![';'],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let options = ParseOptions::default();
        assert!(options.reject_spaces_in_section_names);
        assert!(options.is_comment("; note"));
        assert!(!options.is_comment("# note"));
    }

    #[test]
    fn test_permissive_accepts_hash_comments() {
        let options = ParseOptions::permissive();
        assert!(!options.reject_spaces_in_section_names);
        assert!(options.is_comment("# note"));
        assert!(options.is_comment(";"));
    }

    #[test]
    fn test_builders() {
        let options = ParseOptions::default()
            .with_section_spaces(true)
            .with_comment_prefixes("#".chars());
        assert!(!options.reject_spaces_in_section_names);
        assert!(options.is_comment("#x"));
        assert!(!options.is_comment(";x"));
        assert!(!options.is_comment(""));
    }
}
