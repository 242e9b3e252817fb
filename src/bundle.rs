//! Locating string table files.
//!
//! A [`Bundle`] is the resource handle a resolver reads tables from: either
//! a directory on disk or a set of files held in memory. Layout, relative
//! to the bundle root:
//!
//! ```text
//! en.lproj/Options.strings
//! fr.lproj/Options.strings
//! Login.xcstrings
//! ```

use std::{
    borrow::Cow,
    collections::HashMap,
    fmt,
    path::{Component, Path, PathBuf},
};

use unic_langid::LanguageIdentifier;

use crate::{
    error::Error,
    formats::{FormatType, StringsFormat, XcstringsFormat},
    locale::directory_candidates,
    table::StringTable,
    traits::Parser,
};

/// Creates a directory [`Bundle`] relative to the calling crate's manifest directory.
///
/// This lets a library ship its own tables independently of the
/// application that uses it.
///
/// ```rust,no_run
/// let bundle = localized_enum::bundle_dir!("Resources");
/// ```
#[macro_export]
macro_rules! bundle_dir {
    ($dir:expr) => {
        $crate::Bundle::at(::std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join($dir))
    };
}

/// Where string tables are read from.
#[derive(Clone)]
pub struct Bundle {
    source: Source,
}

#[derive(Clone)]
enum Source {
    Directory(PathBuf),
    Embedded(HashMap<String, Cow<'static, [u8]>>),
}

impl fmt::Debug for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Source::Directory(root) => f.debug_tuple("Bundle::Directory").field(root).finish(),
            Source::Embedded(files) => {
                let mut names = files.keys().collect::<Vec<_>>();
                names.sort();
                f.debug_tuple("Bundle::Embedded").field(&names).finish()
            }
        }
    }
}

impl Bundle {
    /// A bundle rooted at a directory on disk.
    pub fn at<P: Into<PathBuf>>(root: P) -> Self {
        Bundle {
            source: Source::Directory(root.into()),
        }
    }

    /// A bundle made of in-memory files, keyed by bundle-relative path.
    ///
    /// ```rust
    /// use localized_enum::Bundle;
    /// let bundle = Bundle::embedded([
    ///     ("en.lproj/Options.strings", &br#""Cancel" = "Cancel Action";"#[..]),
    /// ]);
    /// assert!(bundle.contains("en.lproj/Options.strings"));
    /// ```
    pub fn embedded<P, B, I>(files: I) -> Self
    where
        P: AsRef<Path>,
        B: Into<Cow<'static, [u8]>>,
        I: IntoIterator<Item = (P, B)>,
    {
        let files = files
            .into_iter()
            .map(|(path, bytes)| (embedded_key(path.as_ref()), bytes.into()))
            .collect();
        Bundle {
            source: Source::Embedded(files),
        }
    }

    /// The root directory, for directory bundles.
    pub fn root(&self) -> Option<&Path> {
        match &self.source {
            Source::Directory(root) => Some(root.as_path()),
            Source::Embedded(_) => None,
        }
    }

    /// Whether a file exists at the bundle-relative path.
    pub fn contains<P: AsRef<Path>>(&self, relative: P) -> bool {
        match &self.source {
            Source::Directory(root) => root.join(relative).is_file(),
            Source::Embedded(files) => files.contains_key(&embedded_key(relative.as_ref())),
        }
    }

    /// Parses the file at the bundle-relative path. `Ok(None)` if it does not exist.
    pub fn open<T: Parser>(&self, relative: &Path) -> Result<Option<T>, Error> {
        match &self.source {
            Source::Directory(root) => {
                let path = root.join(relative);
                if !path.is_file() {
                    return Ok(None);
                }
                T::read_from(&path).map(Some)
            }
            Source::Embedded(files) => match files.get(&embedded_key(relative)) {
                Some(bytes) => T::from_bytes(bytes).map(Some),
                None => Ok(None),
            },
        }
    }

    /// Loads table `name` for `locale`, trying `formats` in order.
    ///
    /// Returns `Ok(None)` when no format has a table for the locale.
    pub fn load_table(
        &self,
        name: &str,
        locale: &LanguageIdentifier,
        formats: &[FormatType],
    ) -> Result<Option<StringTable>, Error> {
        let candidates = directory_candidates(locale);

        for format in formats {
            match format {
                FormatType::Strings => {
                    for dir in &candidates {
                        let path = format.table_path(name, dir);
                        if let Some(parsed) = self.open::<StringsFormat>(&path)? {
                            tracing::trace!(table = name, path = %path.display(), "found strings table");
                            return Ok(Some(StringTable::from_strings(
                                name,
                                locale.clone(),
                                parsed,
                            )));
                        }
                    }
                }
                FormatType::Xcstrings => {
                    let path = format.table_path(name, "");
                    let Some(catalog) = self.open::<XcstringsFormat>(&path)? else {
                        continue;
                    };
                    if let Some(dir) = candidates.iter().find(|dir| catalog.has_locale(dir)) {
                        tracing::trace!(table = name, path = %path.display(), column = %dir, "found catalog table");
                        return Ok(Some(StringTable::from_catalog(
                            name,
                            locale.clone(),
                            &catalog,
                            dir,
                        )));
                    }
                }
            }
        }

        Ok(None)
    }
}

fn embedded_key(path: &Path) -> String {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
