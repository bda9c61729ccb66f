use alloc::string::String;
use core::fmt;

use crate::outcome::{success, Outcome};

/// Error catalog for [`Email`].
pub mod errors {
    use crate::types::Error;

    pub const EMPTY: Error = Error::from_static("Email.Empty", "Email must not be empty.");
    pub const TOO_LONG: Error =
        Error::from_static("Email.TooLong", "Email must be at most 255 characters long.");
    pub const INVALID_FORMAT: Error =
        Error::from_static("Email.InvalidFormat", "Email has an invalid format.");
}

/// A syntactically valid email address, stored trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Email(String);

impl Email {
    pub const MAX_LENGTH: usize = 255;

    /// Validates `raw`.
    ///
    /// An empty input fails with `Email.Empty` alone. Otherwise the length
    /// and format rules are both checked and every violation is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::domain::{email, Email};
    ///
    /// assert_eq!(Email::create(" Ada@Example.COM ").into_value().as_str(), "ada@example.com");
    /// assert_eq!(Email::create("").errors(), [email::errors::EMPTY]);
    /// assert_eq!(Email::create("nope").errors(), [email::errors::INVALID_FORMAT]);
    /// ```
    pub fn create(raw: &str) -> Outcome<Self> {
        let trimmed = raw.trim();
        success(trimmed)
            .ensure(|value| !value.is_empty(), errors::EMPTY)
            .and_then(|value| {
                crate::combine![
                    success(value).ensure(|v| v.chars().count() <= Self::MAX_LENGTH, errors::TOO_LONG),
                    success(value).ensure(|v| is_well_formed(v), errors::INVALID_FORMAT),
                ]
                .then_map(|| Self(value.to_lowercase()))
            })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `@`, a non-empty local part and a dotted domain, without whitespace.
fn is_well_formed(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
