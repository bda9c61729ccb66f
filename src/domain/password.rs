use alloc::string::String;
use core::fmt;

use crate::outcome::{success, Outcome};

/// Error catalog for [`Password`].
pub mod errors {
    use crate::types::Error;

    pub const EMPTY: Error = Error::from_static("Password.Empty", "Password must not be empty.");
    pub const TOO_SHORT: Error =
        Error::from_static("Password.TooShort", "Password must be at least 8 characters long.");
    pub const TOO_LONG: Error =
        Error::from_static("Password.TooLong", "Password must be at most 128 characters long.");
    pub const MISSING_UPPERCASE: Error = Error::from_static(
        "Password.MissingUppercase",
        "Password must contain at least one uppercase letter.",
    );
    pub const MISSING_LOWERCASE: Error = Error::from_static(
        "Password.MissingLowercase",
        "Password must contain at least one lowercase letter.",
    );
    pub const MISSING_DIGIT: Error =
        Error::from_static("Password.MissingDigit", "Password must contain at least one digit.");
}

/// A password that satisfies the strength rules.
///
/// The raw text is kept as given (no trimming) and is never printed by
/// `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 128;

    /// Validates `raw`.
    ///
    /// An empty input fails with `Password.Empty` alone; otherwise every
    /// strength rule is checked and all violations are reported together.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::domain::{password, Password};
    ///
    /// assert!(Password::create("Secr3tPass").is_success());
    /// assert_eq!(
    ///     Password::create("abc").errors(),
    ///     [
    ///         password::errors::TOO_SHORT,
    ///         password::errors::MISSING_UPPERCASE,
    ///         password::errors::MISSING_DIGIT,
    ///     ]
    /// );
    /// ```
    pub fn create(raw: &str) -> Outcome<Self> {
        success(raw).ensure(|value| !value.is_empty(), errors::EMPTY).and_then(|value| {
            let length = value.chars().count();
            crate::combine![
                success(length).ensure(|n| *n >= Self::MIN_LENGTH, errors::TOO_SHORT),
                success(length).ensure(|n| *n <= Self::MAX_LENGTH, errors::TOO_LONG),
                success(value).ensure(|v| v.chars().any(char::is_uppercase), errors::MISSING_UPPERCASE),
                success(value).ensure(|v| v.chars().any(char::is_lowercase), errors::MISSING_LOWERCASE),
                success(value).ensure(|v| v.chars().any(|c| c.is_ascii_digit()), errors::MISSING_DIGIT),
            ]
            .then_map(|| Self(value.into()))
        })
    }

    /// Returns the raw password text.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
