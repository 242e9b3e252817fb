//! String table file formats understood by the resolver.
//!
//! This module re-exports the main types for each format and provides
//! the [`FormatType`] enum used to pick and order lookup formats.

pub mod strings;
pub mod xcstrings;

use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
    str::FromStr,
};

// Reexporting the formats for easier access
pub use strings::Format as StringsFormat;
pub use xcstrings::Format as XcstringsFormat;

use crate::Error;

/// Represents all supported string table formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// Apple `.strings`: one file per locale, under `<locale>.lproj/`.
    Strings,
    /// Xcode `.xcstrings` string catalog: one file holding every locale.
    Xcstrings,
}

/// Implements [`std::fmt::Display`] for [`FormatType`].
///
/// # Example
/// ```rust
/// use localized_enum::formats::FormatType;
/// assert_eq!(FormatType::Strings.to_string(), "strings");
/// assert_eq!(FormatType::Xcstrings.to_string(), "xcstrings");
/// ```
impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Strings => write!(f, "strings"),
            FormatType::Xcstrings => write!(f, "xcstrings"),
        }
    }
}

/// Implements [`std::str::FromStr`] for [`FormatType`].
///
/// Accepts `"strings"` and `"xcstrings"`, case-insensitively.
/// Returns [`crate::error::Error::UnknownFormat`] for anything else.
///
/// # Example
/// ```rust
/// use localized_enum::formats::FormatType;
/// use std::str::FromStr;
/// assert_eq!(FormatType::from_str("Strings").unwrap(), FormatType::Strings);
/// assert!(FormatType::from_str("po").is_err());
/// ```
impl FromStr for FormatType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "strings" => Ok(FormatType::Strings),
            "xcstrings" => Ok(FormatType::Xcstrings),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl FormatType {
    /// Every supported format, in default lookup order.
    pub const ALL: [FormatType; 2] = [FormatType::Strings, FormatType::Xcstrings];

    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Strings => "strings",
            FormatType::Xcstrings => "xcstrings",
        }
    }

    /// Infers the format from a file's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some(ext) => ext.parse(),
            None => Err(Error::UnknownFormat(
                path.as_ref().display().to_string(),
            )),
        }
    }

    /// Whether one file of this format carries translations for every locale.
    pub fn is_multi_locale(&self) -> bool {
        matches!(self, FormatType::Xcstrings)
    }

    /// Bundle-relative path of `table` in this format.
    ///
    /// `locale_dir` names the locale directory and is ignored by
    /// multi-locale formats.
    ///
    /// # Example
    /// ```rust
    /// use localized_enum::formats::FormatType;
    /// use std::path::Path;
    /// assert_eq!(
    ///     FormatType::Strings.table_path("Options", "fr"),
    ///     Path::new("fr.lproj/Options.strings")
    /// );
    /// assert_eq!(
    ///     FormatType::Xcstrings.table_path("Options", "fr"),
    ///     Path::new("Options.xcstrings")
    /// );
    /// ```
    pub fn table_path(&self, table: &str, locale_dir: &str) -> PathBuf {
        let file_name = format!("{}.{}", table, self.extension());
        match self {
            FormatType::Strings => Path::new(&format!("{}.lproj", locale_dir)).join(file_name),
            FormatType::Xcstrings => PathBuf::from(file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_type_display() {
        assert_eq!(FormatType::Strings.to_string(), "strings");
        assert_eq!(FormatType::Xcstrings.to_string(), "xcstrings");
    }

    #[test]
    fn test_format_type_from_str() {
        assert_eq!(FormatType::from_str("strings").unwrap(), FormatType::Strings);
        assert_eq!(FormatType::from_str(" XCSTRINGS ").unwrap(), FormatType::Xcstrings);
        assert!(matches!(
            FormatType::from_str("xml"),
            Err(Error::UnknownFormat(ref f)) if f == "xml"
        ));
    }

    #[test]
    fn test_format_type_from_path() {
        assert_eq!(
            FormatType::from_path("Resources/en.lproj/Login.strings").unwrap(),
            FormatType::Strings
        );
        assert_eq!(
            FormatType::from_path("Login.xcstrings").unwrap(),
            FormatType::Xcstrings
        );
        assert!(FormatType::from_path("Login").is_err());
        assert!(FormatType::from_path("Login.csv").is_err());
    }

    #[test]
    fn test_table_path_per_locale() {
        assert_eq!(
            FormatType::Strings.table_path("Login", "pt_BR"),
            PathBuf::from("pt_BR.lproj").join("Login.strings")
        );
        assert!(!FormatType::Strings.is_multi_locale());
        assert!(FormatType::Xcstrings.is_multi_locale());
    }
}
