//! Active locale parsing and detection.
//!
//! Locales are plain [`LanguageIdentifier`]s. The host's locale can arrive
//! as a BCP 47 tag (`fr-CA`) or a POSIX name (`fr_CA.UTF-8@euro`); both
//! normalize to the same identifier.

use lazy_static::lazy_static;
use regex::Regex;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// Environment variable overriding the host locale.
pub const LOCALE_ENV_VAR: &str = "LOCALIZED_ENUM_LOCALE";

lazy_static! {
    // Strips the POSIX codeset and modifier: "pt_BR.UTF-8@euro" -> "pt_BR".
    static ref POSIX_LOCALE_REGEX: Regex =
        Regex::new(r"^(?P<tag>[^.@]+)(?:\.[^@]*)?(?:@.*)?$").unwrap();
    static ref DEFAULT_LOCALE: LanguageIdentifier = "en".parse().unwrap();
}

/// The locale used when nothing else is configured.
pub fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.clone()
}

/// Parses a BCP 47 or POSIX locale name.
///
/// `C` and `POSIX` denote the default locale.
///
/// # Example
/// ```rust
/// use localized_enum::locale::parse_locale;
/// assert_eq!(parse_locale("fr_CA.UTF-8").unwrap().to_string(), "fr-CA");
/// assert_eq!(parse_locale("C").unwrap().to_string(), "en");
/// ```
pub fn parse_locale(name: &str) -> Result<LanguageIdentifier, Error> {
    let trimmed = name.trim();
    let tag = POSIX_LOCALE_REGEX
        .captures(trimmed)
        .and_then(|caps| caps.name("tag"))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::InvalidLocale(name.to_string()))?;

    if tag.eq_ignore_ascii_case("C") || tag.eq_ignore_ascii_case("POSIX") {
        return Ok(default_locale());
    }

    tag.replace('_', "-")
        .parse::<LanguageIdentifier>()
        .map_err(|_| Error::InvalidLocale(name.to_string()))
}

/// Determines the active locale.
///
/// Order: `explicit`, then [`LOCALE_ENV_VAR`], then the operating system
/// locale, then [`default_locale`]. Unparseable candidates are skipped.
pub fn detect_locale(explicit: Option<&str>) -> LanguageIdentifier {
    let env_locale = std::env::var(LOCALE_ENV_VAR).ok();
    let os_locale = sys_locale::get_locale();

    let candidates = [
        ("option", explicit.map(str::to_string)),
        ("environment", env_locale),
        ("system", os_locale),
    ];

    for (source, candidate) in candidates {
        let Some(candidate) = candidate else {
            continue;
        };
        match parse_locale(&candidate) {
            Ok(locale) => {
                tracing::debug!(%locale, source, "active locale detected");
                return locale;
            }
            Err(err) => tracing::warn!(source, %err, "ignoring unparseable locale"),
        }
    }

    default_locale()
}

/// Directory names under which tables for `locale` may live, most specific first.
///
/// `zh-Hant-TW` yields `zh-Hant-TW`, `zh_Hant_TW`, `zh-Hant`, `zh`.
pub fn directory_candidates(locale: &LanguageIdentifier) -> Vec<String> {
    let mut candidates = Vec::with_capacity(4);
    let full = locale.to_string();
    candidates.push(full.replace('_', "-"));
    candidates.push(full.replace('-', "_"));
    if let Some(script) = locale.script {
        candidates.push(format!("{}-{}", locale.language, script));
    }
    candidates.push(locale.language.to_string());

    let mut seen = Vec::with_capacity(candidates.len());
    candidates.retain(|c| {
        if seen.contains(c) {
            false
        } else {
            seen.push(c.clone());
            true
        }
    });
    candidates
}
