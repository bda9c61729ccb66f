use outcome_rail::domain::{email, Email};
use outcome_rail::Error;

#[test]
fn empty_email_reports_only_empty() {
    assert_eq!(Email::create("").errors(), [email::errors::EMPTY]);
    assert_eq!(Email::create("  ").errors(), [email::errors::EMPTY]);
}

#[test]
fn overlong_malformed_email_reports_both_errors() {
    let raw = "x".repeat(Email::MAX_LENGTH + 1);
    assert_eq!(Email::create(&raw).errors(), [email::errors::TOO_LONG, email::errors::INVALID_FORMAT]);
}

#[test]
fn overlong_well_formed_email_reports_too_long() {
    let raw = format!("{}@example.com", "a".repeat(Email::MAX_LENGTH));
    assert_eq!(Email::create(&raw).errors(), [email::errors::TOO_LONG]);
}

#[test]
fn malformed_email_reports_invalid_format() {
    for raw in ["ada", "ada@", "@example.com", "ada@example", "ada@@example.com", "a da@example.com"] {
        assert_eq!(Email::create(raw).errors(), [email::errors::INVALID_FORMAT], "{raw}");
    }
}

#[test]
fn valid_email_is_trimmed_and_lowercased() {
    let email = Email::create("  Ada.Lovelace@Example.COM ").into_value();
    assert_eq!(email.as_str(), "ada.lovelace@example.com");
    assert_eq!(email, Email::create("ada.lovelace@example.com").into_value());
}

#[test]
fn catalog_agrees_with_factories() {
    assert_eq!(email::errors::EMPTY, Error::empty("Email"));
    assert_eq!(email::errors::TOO_LONG, Error::too_long("Email", Email::MAX_LENGTH));
    assert_eq!(email::errors::INVALID_FORMAT, Error::invalid_format("Email"));
}
