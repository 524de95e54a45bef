//! Testing utilities for document assertions
//!
//! A fluent API so tests read as the expected shape of a document:
//!
//! ```rust-example
//! use inix::inix::testing::assert_document;
//!
//! assert_document(&doc)
//!     .section_count(2)
//!     .section("server", |s| {
//!         s.key_count(2).key("host", "localhost").key("port", "8080");
//!     })
//!     .no_section("client");
//! ```
//!
//! Failure messages carry a context path such as `document[server].host`.

use crate::inix::document::{Document, Section};

pub fn assert_document(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion {
        doc,
        context: "document".to_string(),
    }
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
    context: String,
}

impl<'a> DocumentAssertion<'a> {
    pub fn section_count(self, expected: usize) -> Self {
        let actual = self.doc.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} sections, found {} ({:?})",
            self.context,
            expected,
            actual,
            self.doc.section_names().collect::<Vec<_>>()
        );
        self
    }

    pub fn is_empty(self) -> Self {
        self.section_count(0)
    }

    pub fn section<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        let section = self.doc.get_section(name).unwrap_or_else(|| {
            panic!(
                "{}: Expected section '{}', found {:?}",
                self.context,
                name,
                self.doc.section_names().collect::<Vec<_>>()
            )
        });
        assertion(SectionAssertion {
            section,
            context: format!("{}[{}]", self.context, name),
        });
        self
    }

    pub fn no_section(self, name: &str) -> Self {
        assert!(
            !self.doc.contains_section(name),
            "{}: Expected no section '{}'",
            self.context,
            name
        );
        self
    }
}

pub struct SectionAssertion<'a> {
    section: &'a Section,
    context: String,
}

impl SectionAssertion<'_> {
    pub fn key_count(self, expected: usize) -> Self {
        let actual = self.section.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} keys, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn key(self, key: &str, expected: &str) -> Self {
        match self.section.get(key) {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}.{}: Expected value '{}', found '{}'",
                self.context, key, expected, actual
            ),
            None => panic!(
                "{}: Expected key '{}', found keys {:?}",
                self.context,
                key,
                self.section.keys().collect::<Vec<_>>()
            ),
        }
        self
    }

    pub fn no_key(self, key: &str) -> Self {
        assert!(
            !self.section.contains_key(key),
            "{}: Expected no key '{}'",
            self.context,
            key
        );
        self
    }
}
