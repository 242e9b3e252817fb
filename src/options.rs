//! Options controlling how a [`crate::Resolver`] finds and picks tables.

use std::path::PathBuf;

use crate::formats::FormatType;

/// Environment variable naming the directory the global resolver reads tables from.
pub const BUNDLE_ENV_VAR: &str = "LOCALIZED_ENUM_BUNDLE";

/// Bundle directory used by the global resolver when [`BUNDLE_ENV_VAR`] is unset.
pub const DEFAULT_BUNDLE_DIR: &str = "Resources";

/// Resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Active locale name; detected from the environment when `None`.
    pub locale: Option<String>,
    /// Formats to look for, in priority order. The first one that has a
    /// table for the requested locale wins.
    pub formats: Vec<FormatType>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        ResolverOptions {
            locale: None,
            formats: FormatType::ALL.to_vec(),
        }
    }
}

impl ResolverOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the active locale.
    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the lookup formats, in priority order.
    pub fn with_formats(mut self, formats: Vec<FormatType>) -> Self {
        self.formats = formats;
        self
    }

    /// The bundle directory configured through [`BUNDLE_ENV_VAR`].
    pub fn bundle_dir_from_env() -> PathBuf {
        std::env::var_os(BUNDLE_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUNDLE_DIR))
    }
}
