use std::path::{Path, PathBuf};
use std::sync::{Arc, Barrier};
use std::thread;

use indoc::indoc;
use localized_enum::{
    Bundle, FormatType, LanguageIdentifier, LocalizedEnum, Resolver, ResolverOptions,
    localized_enum,
};

localized_enum! {
    #[derive(Debug)]
    enum Options {
        Cancel,
        Accept,
        New,
        LongOption = "This is a long string",
    }
}

localized_enum! {
    #[derive(Debug)]
    enum Login {
        Name,
    }
}

fn data_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("Resources")
}

fn locale(s: &str) -> LanguageIdentifier {
    s.parse().unwrap()
}

fn resolver_in(active: &str) -> Resolver {
    Resolver::with_options(
        Bundle::at(data_root()),
        ResolverOptions::new().with_locale(Some(active.to_string())),
    )
}

#[test]
fn test_cancel_scenario_across_locales() {
    let resolver = resolver_in("en");
    assert_eq!(Options::Cancel.localized_with(&resolver), "Cancel Action");

    resolver.set_locale(locale("fr"));
    assert_eq!(Options::Cancel.localized_with(&resolver), "Cancel");
    assert_eq!(Options::New.localized_with(&resolver), "Nouveau");
}

#[test]
fn test_lookup_keys_on_raw_identifier() {
    let resolver = resolver_in("en");
    assert_eq!(
        Options::LongOption.localized_with(&resolver),
        "This is a rather long option"
    );
    assert_eq!(resolver.localized_string("Options", "LongOption"), "LongOption");
}

#[test]
fn test_resolution_is_idempotent() {
    let resolver = resolver_in("fr");
    for case in Options::all_cases() {
        let first = case.localized_with(&resolver);
        let second = case.localized_with(&resolver);
        assert_eq!(first, second, "{:?}", case);
    }
}

#[test]
fn test_posix_locale_option_and_region_directory_fallback() {
    let resolver = resolver_in("fr_CA.UTF-8");
    assert_eq!(resolver.locale(), locale("fr-CA"));
    assert_eq!(Options::Accept.localized_with(&resolver), "Accepter");
}

#[test]
fn test_utf16_table() {
    let resolver = resolver_in("es");
    assert_eq!(Options::Cancel.localized_with(&resolver), "Cancelar");
    assert_eq!(Options::Accept.localized_with(&resolver), "Aceptar");
    assert_eq!(Options::New.localized_with(&resolver), "New");
}

#[test]
fn test_catalog_used_when_no_strings_file() {
    let resolver = resolver_in("de");
    assert_eq!(Login::Name.localized_with(&resolver), "Benutzername");

    // en has a Login.strings, which takes priority over the catalog.
    resolver.set_locale(locale("en"));
    assert_eq!(Login::Name.localized_with(&resolver), "User name");
}

#[test]
fn test_strings_only_formats() {
    let resolver = Resolver::with_options(
        Bundle::at(data_root()),
        ResolverOptions::new()
            .with_locale(Some("de".to_string()))
            .with_formats(vec![FormatType::Strings]),
    );
    assert_eq!(Login::Name.localized_with(&resolver), "Name");
}

#[test]
fn test_missing_bundle_directory_falls_back() {
    let resolver = Resolver::with_options(
        Bundle::at(data_root().join("does-not-exist")),
        ResolverOptions::new().with_locale(Some("en".to_string())),
    );
    assert_eq!(Options::Cancel.localized_with(&resolver), "Cancel");
    assert!(resolver.is_loaded("Options", &locale("en")));
}

#[test]
fn test_malformed_file_on_disk_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let lproj = dir.path().join("en.lproj");
    std::fs::create_dir_all(&lproj).unwrap();
    std::fs::write(
        lproj.join("Options.strings"),
        indoc! {r#"
            "Cancel" = "Cancel Action";
            "Accept" = "never closed;
        "#},
    )
    .unwrap();

    let resolver = Resolver::with_options(
        Bundle::at(dir.path()),
        ResolverOptions::new().with_locale(Some("en".to_string())),
    );
    assert!(resolver.try_load_table("Options", &locale("en")).is_err());
    // The whole table is treated as empty, not half-loaded.
    assert_eq!(Options::Cancel.localized_with(&resolver), "Cancel");
}

#[test]
fn test_concurrent_first_access_shares_one_table() {
    let resolver = Arc::new(resolver_in("en"));
    let barrier = Arc::new(Barrier::new(8));

    let handles = (0..8)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let table = resolver.table("Options", &locale("en"));
                (table, Options::Cancel.localized_with(&resolver))
            })
        })
        .collect::<Vec<_>>();

    let results = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect::<Vec<_>>();

    let (first, _) = &results[0];
    for (table, text) in &results {
        assert!(Arc::ptr_eq(first, table));
        assert_eq!(text, "Cancel Action");
    }
    assert_eq!(resolver.loaded_tables().len(), 1);
}

#[test]
fn test_same_group_same_table() {
    let resolver = resolver_in("en");
    Options::Cancel.localized_with(&resolver);
    Options::LongOption.localized_with(&resolver);
    Options::New.localized_with(&resolver);
    assert_eq!(
        resolver.loaded_tables(),
        vec![("Options".to_string(), locale("en"))]
    );
}
