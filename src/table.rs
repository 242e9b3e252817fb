//! The in-memory string table a resolver looks keys up in.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::formats::{StringsFormat, XcstringsFormat};

/// A locale-scoped mapping from raw identifier to localized display text.
///
/// An entry with an empty value is still an entry: it resolves to `""`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StringTable {
    /// Table name, equal to the name of the group it translates.
    pub name: String,
    /// The locale these entries are written in.
    pub locale: LanguageIdentifier,
    #[serde(default)]
    entries: HashMap<String, String>,
}

impl StringTable {
    /// Creates an empty table.
    pub fn new(name: impl Into<String>, locale: LanguageIdentifier) -> Self {
        StringTable {
            name: name.into(),
            locale,
            entries: HashMap::new(),
        }
    }

    /// Builds a table from a parsed `.strings` file. Later duplicates win.
    pub fn from_strings(
        name: impl Into<String>,
        locale: LanguageIdentifier,
        format: StringsFormat,
    ) -> Self {
        let mut table = StringTable::new(name, locale);
        for pair in format.pairs {
            table.insert(pair.key, pair.value);
        }
        table
    }

    /// Builds a table from the `catalog_locale` column of a string catalog.
    pub fn from_catalog(
        name: impl Into<String>,
        locale: LanguageIdentifier,
        catalog: &XcstringsFormat,
        catalog_locale: &str,
    ) -> Self {
        let mut table = StringTable::new(name, locale);
        for (key, value) in catalog.entries_for(catalog_locale) {
            table.insert(key, value);
        }
        table
    }

    /// Adds an entry, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
