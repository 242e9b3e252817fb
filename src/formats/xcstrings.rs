//! Support for Xcode `.xcstrings` string catalogs.
//!
//! A catalog is a JSON document holding one table for every locale. Only
//! plain `stringUnit` localizations are read; plural `variations` are
//! skipped, so those keys fall back to their raw identifier.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, io::BufRead};

use crate::{error::Error, traits::Parser};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    pub source_language: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub strings: HashMap<String, Item>,
}

impl Parser for Format {
    /// Parses the xcstrings format from a reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }
}

impl Format {
    /// Locale codes that have at least one localization in the catalog.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales = self
            .strings
            .values()
            .flat_map(|item| item.localizations.keys())
            .map(String::as_str)
            .collect::<Vec<_>>();
        locales.sort_unstable();
        locales.dedup();
        locales
    }

    /// Whether any key is localized for `locale`.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.strings
            .values()
            .any(|item| item.localizations.contains_key(locale))
    }

    /// All `(key, value)` pairs localized for `locale`.
    ///
    /// Keys marked `shouldTranslate: false` are left out so they display
    /// as their raw identifier.
    pub fn entries_for(&self, locale: &str) -> impl Iterator<Item = (&str, &str)> {
        self.strings.iter().filter_map(move |(key, item)| {
            if item.should_translate == Some(false) {
                return None;
            }
            let value = item.localizations.get(locale)?.value()?;
            Some((key.as_str(), value))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub localizations: HashMap<String, Localization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_translate: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_unit: Option<StringUnit>,
    /// Plural and device variations; kept only so they round-trip through serde.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<serde_json::Value>,
}

impl Localization {
    fn value(&self) -> Option<&str> {
        self.string_unit.as_ref().map(|unit| unit.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StringUnit {
    #[serde(default)]
    pub state: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "sourceLanguage": "en",
        "version": "1.0",
        "strings": {
            "Cancel": {
                "comment": "Button title",
                "localizations": {
                    "en": { "stringUnit": { "state": "translated", "value": "Cancel Action" } },
                    "es": { "stringUnit": { "state": "translated", "value": "Cancelar" } }
                }
            },
            "%lld items": {
                "localizations": {
                    "en": {
                        "variations": {
                            "plural": {
                                "one": { "stringUnit": { "state": "translated", "value": "%lld item" } },
                                "other": { "stringUnit": { "state": "translated", "value": "%lld items" } }
                            }
                        }
                    }
                }
            },
            "OK": {
                "shouldTranslate": false,
                "localizations": {
                    "en": { "stringUnit": { "state": "translated", "value": "Okay" } }
                }
            },
            "New": {}
        }
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Format::from_str(CATALOG).unwrap();
        assert_eq!(catalog.source_language, "en");
        assert_eq!(catalog.strings.len(), 4);
        assert_eq!(
            catalog.strings["Cancel"].comment.as_deref(),
            Some("Button title")
        );
    }

    #[test]
    fn test_entries_for_locale_skip_plurals_and_untranslatable() {
        let catalog = Format::from_str(CATALOG).unwrap();
        let en = catalog.entries_for("en").collect::<HashMap<_, _>>();
        assert_eq!(en.len(), 1);
        assert_eq!(en["Cancel"], "Cancel Action");

        let es = catalog.entries_for("es").collect::<HashMap<_, _>>();
        assert_eq!(es["Cancel"], "Cancelar");
        assert_eq!(catalog.entries_for("fr").count(), 0);
    }

    #[test]
    fn test_locales() {
        let catalog = Format::from_str(CATALOG).unwrap();
        assert_eq!(catalog.locales(), vec!["en", "es"]);
        assert!(catalog.has_locale("es"));
        assert!(!catalog.has_locale("fr"));
    }

    #[test]
    fn test_malformed_catalog_is_parse_error() {
        let err = Format::from_str("{ \"strings\": [] }").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
