//! The checked-in fixture must match what the generator produces for
//! `fixtures/Localized.yml`, and must behave as documented once compiled.

use locgen::{CompileOptions, compile};
use pretty_assertions::assert_eq;

mod localized {
    include!("fixtures/localized.rs");
}

use localized::Localized;

const CATALOG: &str = include_str!("fixtures/Localized.yml");
const GENERATED: &str = include_str!("fixtures/localized.rs");

#[test]
fn test_fixture_matches_generator() {
    let code = compile(CATALOG, &CompileOptions::default()).unwrap();
    assert_eq!(code.into_source(), GENERATED);
}

#[test]
fn test_locale_prefix_resolution() {
    assert_eq!(Localized::House.string_for("de_CH"), "Haus");
    assert_eq!(Localized::House.string_for("de"), "Haus");
    assert_eq!(Localized::House.string_for("en_US.UTF-8"), "House");
}

#[test]
fn test_unknown_locale_uses_default_language() {
    assert_eq!(Localized::House.string_for("it"), "House");
    assert_eq!(Localized::House.string_for(""), "House");
}

#[test]
fn test_untranslated_language_falls_back_to_default_text() {
    assert_eq!(Localized::House.string_for("fr_FR"), "House");
    let hello = Localized::Hello {
        name: "Peter".to_string(),
    };
    assert_eq!(hello.fr(), "Hello, Peter!");
}

#[test]
fn test_placeholders_are_substituted() {
    let hello = Localized::Hello {
        name: "Peter".to_string(),
    };
    assert_eq!(hello.en(), "Hello, Peter!");
    assert_eq!(hello.string_for("de_AT"), "Hallo, Peter!");
}

#[test]
fn test_conditionals_select_variant() {
    let one = Localized::Houses {
        count: "1".to_string(),
    };
    let many = Localized::Houses {
        count: "3".to_string(),
    };
    assert_eq!(one.en(), "One house");
    assert_eq!(many.en(), "3 houses");
    assert_eq!(one.de(), "Ein Haus");
    assert_eq!(many.de(), "3 Häuser");
    // fr has no conditional variant for this entry
    assert_eq!(one.fr(), "1 maisons");
}

#[test]
fn test_facade_matches_system_language_accessor() {
    assert_eq!(
        localized::loc::hello("Peter"),
        Localized::Hello {
            name: "Peter".to_string()
        }
        .string()
    );
    assert_eq!(localized::loc::house(), Localized::House.string());
}
