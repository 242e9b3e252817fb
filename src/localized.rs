//! The reusable localization capability for string-backed enums.
//!
//! A group of symbolic options opts in by implementing [`LocalizedEnum`],
//! normally through [`localized_enum!`](crate::localized_enum). Its table
//! name is the enum's own name, fixed at compile time, so adding a group
//! never needs a second name to keep in sync.

use unic_langid::LanguageIdentifier;

use crate::resolver::{Resolver, global};

/// A closed set of options whose values each carry a string raw identifier
/// and display as the translation of that identifier.
///
/// Only [`TABLE`](LocalizedEnum::TABLE), [`raw_value`](LocalizedEnum::raw_value)
/// and [`all_cases`](LocalizedEnum::all_cases) are required. Override
/// [`localized_with`](LocalizedEnum::localized_with) for bespoke behavior.
///
/// # Example
///
/// ```rust
/// use localized_enum::{Bundle, LocalizedEnum, Resolver, ResolverOptions, localized_enum};
///
/// localized_enum! {
///     #[derive(Debug)]
///     pub enum Options {
///         Cancel,
///         Accept,
///         LongOption = "This is a long string",
///     }
/// }
///
/// let bundle = Bundle::embedded([(
///     "en.lproj/Options.strings",
///     &br#""Cancel" = "Cancel Action";"#[..],
/// )]);
/// let resolver = Resolver::with_options(
///     bundle,
///     ResolverOptions::new().with_locale(Some("en".into())),
/// );
///
/// assert_eq!(Options::TABLE, "Options");
/// assert_eq!(Options::LongOption.raw_value(), "This is a long string");
/// assert_eq!(Options::Cancel.localized_with(&resolver), "Cancel Action");
/// assert_eq!(Options::Accept.localized_with(&resolver), "Accept");
/// ```
pub trait LocalizedEnum: Sized + 'static {
    /// Name of the string table holding this group's translations.
    const TABLE: &'static str;

    /// The raw identifier of this value, used as the lookup key.
    fn raw_value(&self) -> &'static str;

    /// Every value of the group, in declaration order.
    fn all_cases() -> &'static [Self];

    /// [`TABLE`](LocalizedEnum::TABLE), for callers holding only the type.
    fn table_name() -> &'static str {
        Self::TABLE
    }

    /// The value whose raw identifier is `raw`.
    fn from_raw_value(raw: &str) -> Option<&'static Self> {
        Self::all_cases().iter().find(|case| case.raw_value() == raw)
    }

    /// Display text from the process-wide resolver (see [`crate::install`]).
    fn localized(&self) -> String {
        self.localized_with(global())
    }

    /// Display text from `resolver` under its active locale.
    fn localized_with(&self, resolver: &Resolver) -> String {
        resolver.localized_string(Self::TABLE, self.raw_value())
    }

    /// Display text from `resolver` under an explicit locale.
    fn localized_in(&self, resolver: &Resolver, locale: &LanguageIdentifier) -> String {
        resolver.localized_string_in(Self::TABLE, self.raw_value(), locale)
    }
}

/// Declares a string-backed enum and implements [`LocalizedEnum`] for it.
///
/// - The table name is the enum's name, unless given as `enum Name in "Table"`.
/// - A variant's raw identifier is its name, unless given as `Variant = "raw"`.
/// - `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash` are derived; add others
///   with attributes.
/// - `Display` prints the localized text from the global resolver, and
///   `AsRef<str>` exposes the raw identifier.
///
/// ```rust
/// use localized_enum::{LocalizedEnum, localized_enum};
///
/// localized_enum! {
///     #[derive(Debug)]
///     enum Login in "Authentication" {
///         Name,
///         Password = "password_label",
///     }
/// }
///
/// assert_eq!(Login::TABLE, "Authentication");
/// assert_eq!(Login::Password.as_ref(), "password_label");
/// assert_eq!(Login::from_raw_value("Name"), Some(&Login::Name));
/// ```
#[macro_export]
macro_rules! localized_enum {
    (@raw $variant:ident) => {
        stringify!($variant)
    };
    (@raw $variant:ident $raw:literal) => {
        $raw
    };
    (@table $name:ident) => {
        stringify!($name)
    };
    (@table $name:ident $table:literal) => {
        $table
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(in $table:literal)? {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $(= $raw:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::LocalizedEnum for $name {
            const TABLE: &'static str = $crate::localized_enum!(@table $name $($table)?);

            fn raw_value(&self) -> &'static str {
                match self {
                    $(
                        $name::$variant => $crate::localized_enum!(@raw $variant $($raw)?),
                    )+
                }
            }

            fn all_cases() -> &'static [Self] {
                &[$($name::$variant),+]
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                $crate::LocalizedEnum::raw_value(self)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::LocalizedEnum::localized(self))
            }
        }
    };
}
