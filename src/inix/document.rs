//! Document data model
//!
//! A [`Document`] maps section names to [`Section`]s, and a section maps keys to
//! values. Both levels are `BTreeMap`s, so iteration (and therefore serialized
//! output) is sorted by name rather than following input order.
//!
//! The accessors mirror the usual map operations but report missing or taken
//! names through [`DocumentError`] instead of silently succeeding.
//!
//! A `Document` has no interior synchronization; wrap it in a `Mutex` if it is
//! shared between threads.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{DocumentError, ParseError};
use super::formats::ini;
use super::parsing;

/// Keys and values under one `[header]`
pub type Section = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    sections: BTreeMap<String, Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Iterate over `(name, section)` pairs in name order
    pub fn sections(&self) -> btree_map::Iter<'_, String, Section> {
        self.sections.iter()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn get_section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn get_section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Add a section under a name that is not yet taken.
    pub fn add_section(
        &mut self,
        name: impl Into<String>,
        section: Section,
    ) -> Result<(), DocumentError> {
        match self.sections.entry(name.into()) {
            btree_map::Entry::Occupied(entry) => {
                Err(DocumentError::SectionAlreadyExists(entry.key().clone()))
            }
            btree_map::Entry::Vacant(entry) => {
                entry.insert(section);
                Ok(())
            }
        }
    }

    /// Insert without the name check; the parser rejects reused headers itself.
    pub(crate) fn insert_section(&mut self, name: String, section: Section) {
        self.sections.insert(name, section);
    }

    /// Remove a section, returning its contents.
    pub fn delete_section(&mut self, name: &str) -> Result<Section, DocumentError> {
        self.sections
            .remove(name)
            .ok_or_else(|| DocumentError::SectionNotFound(name.to_string()))
    }

    /// Look up a value. `None` if either the section or the key is absent.
    pub fn get_key(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Like [`get_section`](Self::get_section), but reports the miss.
    pub fn lookup_section(&self, name: &str) -> Result<&Section, DocumentError> {
        self.sections
            .get(name)
            .ok_or_else(|| DocumentError::SectionNotFound(name.to_string()))
    }

    /// Like [`get_key`](Self::get_key), but says whether the section or the key is missing.
    pub fn lookup_key(&self, section: &str, key: &str) -> Result<&str, DocumentError> {
        self.lookup_section(section)?
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| DocumentError::KeyNotFound {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    /// Insert or overwrite a value in an existing section.
    ///
    /// Returns the previous value, if any.
    pub fn set_key(
        &mut self,
        section: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>, DocumentError> {
        let entries = self
            .sections
            .get_mut(section)
            .ok_or_else(|| DocumentError::SectionNotFound(section.to_string()))?;
        Ok(entries.insert(key.into(), value.into()))
    }

    /// Remove a key from a section, returning its value.
    pub fn delete_key(&mut self, section: &str, key: &str) -> Result<String, DocumentError> {
        let entries = self
            .sections
            .get_mut(section)
            .ok_or_else(|| DocumentError::SectionNotFound(section.to_string()))?;
        entries.remove(key).ok_or_else(|| DocumentError::KeyNotFound {
            section: section.to_string(),
            key: key.to_string(),
        })
    }
}

impl FromIterator<(String, Section)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Section)>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Section);
    type IntoIter = btree_map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

impl FromStr for Document {
    type Err = ParseError;

    /// Parse with the default (strict) options.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsing::parse(s)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ini::dump(self))
    }
}
