use outcome_rail::domain::{first_name, last_name, name, FirstName, FullName, LastName, Name};
use outcome_rail::Error;

#[test]
fn empty_name_reports_empty() {
    assert_eq!(Name::create("").errors(), [name::errors::EMPTY]);
    assert_eq!(Name::create("   ").errors(), [name::errors::EMPTY]);
}

#[test]
fn overlong_name_reports_too_long() {
    let raw = "n".repeat(Name::MAX_LENGTH + 1);
    assert_eq!(Name::create(&raw).errors(), [name::errors::TOO_LONG]);
    assert!(Name::create(&"n".repeat(Name::MAX_LENGTH)).is_success());
}

#[test]
fn length_counts_characters_after_trimming() {
    let raw = format!("  {}  ", "é".repeat(FirstName::MAX_LENGTH));
    assert!(FirstName::create(&raw).is_success());
}

#[test]
fn names_are_stored_trimmed() {
    assert_eq!(Name::create("  Ada  ").into_value().as_str(), "Ada");
    assert_eq!(LastName::create("\tLovelace\n").into_value().to_string(), "Lovelace");
}

#[test]
fn catalog_agrees_with_factories() {
    assert_eq!(name::errors::EMPTY, Error::empty("Name"));
    assert_eq!(name::errors::TOO_LONG, Error::too_long("Name", Name::MAX_LENGTH));
    assert_eq!(first_name::errors::EMPTY, Error::empty("FirstName"));
    assert_eq!(first_name::errors::TOO_LONG, Error::too_long("FirstName", FirstName::MAX_LENGTH));
    assert_eq!(last_name::errors::EMPTY, Error::empty("LastName"));
    assert_eq!(last_name::errors::TOO_LONG, Error::too_long("LastName", LastName::MAX_LENGTH));
}

#[test]
fn full_name_reports_both_parts() {
    assert_eq!(FullName::create("", "").errors(), [first_name::errors::EMPTY, last_name::errors::EMPTY]);

    let long_last = "l".repeat(LastName::MAX_LENGTH + 1);
    assert_eq!(FullName::create("Ada", &long_last).errors(), [last_name::errors::TOO_LONG]);
}

#[test]
fn full_name_displays_both_parts() {
    let full_name = FullName::create(" Ada ", "Lovelace").into_value();
    assert_eq!(full_name.first().as_str(), "Ada");
    assert_eq!(full_name.last().as_str(), "Lovelace");
    assert_eq!(full_name.to_string(), "Ada Lovelace");
}
