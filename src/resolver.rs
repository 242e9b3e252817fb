//! The localized label resolver.
//!
//! A [`Resolver`] maps a `(table, key)` pair to display text for the active
//! locale. Missing translations are not errors: the key itself is returned.
//! Tables load lazily, at most once per `(table, locale)`, and stay cached
//! for the resolver's lifetime.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, OnceLock, PoisonError, RwLock},
};

use unic_langid::LanguageIdentifier;

use crate::{
    bundle::Bundle,
    error::Error,
    formats::FormatType,
    locale::detect_locale,
    options::ResolverOptions,
    table::StringTable,
};

type TableKey = (String, LanguageIdentifier);
type TableSlot = Arc<OnceLock<Arc<StringTable>>>;

static GLOBAL: OnceLock<Resolver> = OnceLock::new();

/// Installs the process-wide resolver used by
/// [`LocalizedEnum::localized`](crate::LocalizedEnum::localized).
///
/// Fails with [`Error::AlreadyInstalled`] once a global resolver exists,
/// including one created implicitly by [`global`].
pub fn install(resolver: Resolver) -> Result<(), Error> {
    GLOBAL.set(resolver).map_err(|_| Error::AlreadyInstalled)
}

/// The process-wide resolver.
///
/// Without a prior [`install`], one is created reading tables from the
/// directory named by [`BUNDLE_ENV_VAR`](crate::options::BUNDLE_ENV_VAR)
/// (default `Resources`) with the detected host locale.
pub fn global() -> &'static Resolver {
    GLOBAL.get_or_init(|| {
        let root = ResolverOptions::bundle_dir_from_env();
        tracing::debug!(root = %root.display(), "creating default global resolver");
        Resolver::new(Bundle::at(root))
    })
}

/// Resolves keys against lazily loaded, cached string tables.
#[derive(Debug)]
pub struct Resolver {
    bundle: Bundle,
    formats: Vec<FormatType>,
    locale: RwLock<LanguageIdentifier>,
    tables: Mutex<HashMap<TableKey, TableSlot>>,
}

impl Resolver {
    /// Creates a resolver with default options and the detected host locale.
    pub fn new(bundle: Bundle) -> Self {
        Self::with_options(bundle, ResolverOptions::default())
    }

    pub fn with_options(bundle: Bundle, options: ResolverOptions) -> Self {
        let locale = detect_locale(options.locale.as_deref());
        Resolver {
            bundle,
            formats: options.formats,
            locale: RwLock::new(locale),
            tables: Mutex::new(HashMap::new()),
        }
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    /// The active locale.
    pub fn locale(&self) -> LanguageIdentifier {
        self.locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Switches the active locale. Tables already cached for other locales stay cached.
    pub fn set_locale(&self, locale: LanguageIdentifier) {
        tracing::debug!(%locale, "switching active locale");
        *self.locale.write().unwrap_or_else(PoisonError::into_inner) = locale;
    }

    /// Display text for `key` in `table` under the active locale.
    ///
    /// Returns `key` unchanged when there is no translation.
    pub fn localized_string(&self, table: &str, key: &str) -> String {
        let locale = self.locale();
        self.localized_string_in(table, key, &locale)
    }

    /// Display text for `key` in `table` under an explicit locale.
    pub fn localized_string_in(
        &self,
        table: &str,
        key: &str,
        locale: &LanguageIdentifier,
    ) -> String {
        match self.lookup(table, key, locale) {
            Some(value) => value,
            None => {
                tracing::trace!(table, key, %locale, "no translation, using raw identifier");
                key.to_string()
            }
        }
    }

    /// The translation of `key`, if the table has one.
    pub fn lookup(&self, table: &str, key: &str, locale: &LanguageIdentifier) -> Option<String> {
        self.table(table, locale).get(key).map(str::to_string)
    }

    /// The cached table for `(name, locale)`, loading it on first use.
    ///
    /// Concurrent first callers block on a single load. Missing or
    /// malformed tables are cached as empty.
    pub fn table(&self, name: &str, locale: &LanguageIdentifier) -> Arc<StringTable> {
        let slot = {
            let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
            tables
                .entry((name.to_string(), locale.clone()))
                .or_default()
                .clone()
        };

        slot.get_or_init(|| Arc::new(self.load_or_empty(name, locale)))
            .clone()
    }

    /// Loads a table without touching the cache, surfacing any error.
    pub fn try_load_table(
        &self,
        name: &str,
        locale: &LanguageIdentifier,
    ) -> Result<Option<StringTable>, Error> {
        self.bundle.load_table(name, locale, &self.formats)
    }

    /// Whether `(name, locale)` has been loaded into the cache.
    pub fn is_loaded(&self, name: &str, locale: &LanguageIdentifier) -> bool {
        let tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        tables
            .get(&(name.to_string(), locale.clone()))
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Every `(table, locale)` currently cached, sorted.
    pub fn loaded_tables(&self) -> Vec<(String, LanguageIdentifier)> {
        let tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        let mut loaded = tables
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(key, _)| key.clone())
            .collect::<Vec<_>>();
        loaded.sort_by(|a, b| (&a.0, a.1.to_string()).cmp(&(&b.0, b.1.to_string())));
        loaded
    }

    fn load_or_empty(&self, name: &str, locale: &LanguageIdentifier) -> StringTable {
        match self.try_load_table(name, locale) {
            Ok(Some(table)) => {
                tracing::debug!(table = name, %locale, entries = table.len(), "loaded string table");
                table
            }
            Ok(None) => {
                tracing::debug!(table = name, %locale, "no string table found");
                StringTable::new(name, locale.clone())
            }
            Err(err) => {
                tracing::warn!(table = name, %locale, %err, "failed to load string table, treating as empty");
                StringTable::new(name, locale.clone())
            }
        }
    }
}
