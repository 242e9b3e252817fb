//! End-to-end use through the process-wide resolver and `Display`.
//!
//! Each integration test file runs in its own process, so the single
//! `install` below is the only one this global ever sees.

use std::sync::Once;

use localized_enum::{
    Error, LocalizedEnum, Resolver, ResolverOptions, bundle_dir, global, install, localized_enum,
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

localized_enum! {
    #[derive(Debug)]
    enum Swift {
        Awesome,
        Magic,
        Powerful,
    }
}

static INSTALL: Once = Once::new();

fn setup() {
    INSTALL.call_once(|| {
        let resolver = Resolver::with_options(
            bundle_dir!("tests/data/Resources"),
            ResolverOptions::new().with_locale(Some("en".to_string())),
        );
        install(resolver).unwrap();
    });
}

#[test]
fn test_display_is_localized() {
    setup();
    assert_eq!(Options::LongOption.to_string(), "This is a rather long option");
    assert_eq!(Options::Cancel.to_string(), "Cancel Action");
    assert_eq!(format!("{}", Options::New), "New Document");
}

#[test]
fn test_raw_value_stays_untranslated() {
    setup();
    assert_eq!(Options::LongOption.raw_value(), "This is a long string");
    assert_eq!(Options::Cancel.as_ref(), "Cancel");
}

#[test]
fn test_every_group_uses_its_own_table() {
    setup();
    assert_eq!(Login::Name.localized(), "User name");
    assert_eq!(Swift::Awesome.to_string(), "Swift is awesome");
    assert_eq!(Swift::Magic.to_string(), "Swift is magic");
    assert_eq!(Swift::Powerful.to_string(), "Swift is powerful");
    assert_eq!(Swift::Powerful.raw_value(), "Powerful");
}

#[test]
fn test_explicit_locale_through_global() {
    setup();
    let fr = "fr".parse().unwrap();
    assert_eq!(Options::Cancel.localized_in(global(), &fr), "Cancel");
    assert_eq!(Options::Accept.localized_in(global(), &fr), "Accepter");
    assert_eq!(
        Options::LongOption.localized_in(global(), &fr),
        "Ceci est une longue chaîne"
    );
    assert_eq!(Login::Name.localized_in(global(), &fr), "Nom d'utilisateur");
}

#[test]
fn test_second_install_is_rejected() {
    setup();
    let other = Resolver::new(bundle_dir!("tests/data/Resources"));
    assert!(matches!(install(other), Err(Error::AlreadyInstalled)));
    assert_eq!(global().locale().to_string(), "en");
}
