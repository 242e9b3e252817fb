#![forbid(unsafe_code)]
//! Boilerplate-free localization of string-backed enums.
//!
//! Declare an enum with [`localized_enum!`] and every value displays as the
//! translation of its raw identifier, looked up in a string table named
//! after the enum. When the active locale has no translation, the raw
//! identifier itself is displayed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use localized_enum::{Bundle, LocalizedEnum, Resolver, install, localized_enum};
//!
//! localized_enum! {
//!     #[derive(Debug)]
//!     pub enum Options {
//!         Cancel,
//!         Accept,
//!         New,
//!         LongOption = "This is a long string",
//!     }
//! }
//!
//! // Tables live in Resources/<locale>.lproj/Options.strings
//! install(Resolver::new(Bundle::at("Resources")))?;
//!
//! println!("{}", Options::Cancel);              // localized
//! println!("{}", Options::LongOption.raw_value()); // untranslated
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Supported Formats
//!
//! - **Apple `.strings`**: `<locale>.lproj/<Table>.strings`, UTF-8 or UTF-16
//! - **Apple `.xcstrings`**: `<Table>.xcstrings` string catalogs holding every locale

pub mod bundle;
pub mod error;
pub mod formats;
pub mod locale;
pub mod localized;
pub mod options;
pub mod resolver;
pub mod table;
pub mod traits;

// Re-export most used types for easy consumption
pub use crate::{
    bundle::Bundle,
    error::Error,
    formats::FormatType,
    localized::LocalizedEnum,
    options::ResolverOptions,
    resolver::{Resolver, global, install},
    table::StringTable,
};
pub use unic_langid::LanguageIdentifier;
