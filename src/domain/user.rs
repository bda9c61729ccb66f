//! The `User` aggregate and its identifier.
use core::fmt;

use crate::outcome::{success, Outcome};
use crate::traits::ResultOutcomeExt;

use super::{Email, FullName, Password};

/// Error catalog for [`User`] and [`UserId`].
pub mod errors {
    use crate::types::Error;

    pub const NOT_FOUND: Error = Error::from_static("User.NotFound", "User was not found.");
    pub const CONFLICT: Error = Error::from_static("User.Conflict", "User already exists.");
    pub const EMAIL_NOT_UNIQUE: Error =
        Error::from_static("User.EmailNotUnique", "The email is already in use.");
    pub const EMAIL_UNCHANGED: Error =
        Error::from_static("User.EmailUnchanged", "The new email is the same as the current one.");
    pub const PERSISTENCE_FAILED: Error =
        Error::from_static("User.PersistenceFailed", "The user could not be saved.");
    pub const INVALID_ID: Error = Error::from_static("UserId.InvalidFormat", "UserId has an invalid format.");
}

/// Positive numeric identifier of a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(u64);

impl UserId {
    /// Wraps a raw identifier, rejecting zero.
    pub fn new(raw: u64) -> Outcome<Self> {
        success(raw).ensure(|id| *id != 0, errors::INVALID_ID).map(Self)
    }

    /// Parses a decimal identifier such as one taken from a request path.
    ///
    /// ```
    /// use outcome_rail::domain::{user, UserId};
    ///
    /// assert_eq!(UserId::parse(" 42 ").into_value().get(), 42);
    /// assert_eq!(UserId::parse("abc").errors(), [user::errors::INVALID_ID]);
    /// assert_eq!(UserId::parse("0").errors(), [user::errors::INVALID_ID]);
    /// ```
    pub fn parse(raw: &str) -> Outcome<Self> {
        raw.trim().parse::<u64>().or_error(errors::INVALID_ID).and_then(Self::new)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user.
///
/// Every field is an already validated value object, so building a `User`
/// cannot fail. Changes go through [`update_name`](Self::update_name) and
/// [`update_email`](Self::update_email), which return a new `User`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    full_name: FullName,
    email: Email,
    password: Password,
}

impl User {
    #[must_use]
    pub fn create(id: UserId, full_name: FullName, email: Email, password: Password) -> Self {
        Self { id, full_name, email, password }
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Replaces both name parts, reporting the errors of both on failure.
    pub fn update_name(self, first: &str, last: &str) -> Outcome<Self> {
        FullName::create(first, last).map(|full_name| Self { full_name, ..self })
    }

    /// Replaces the email. Fails with `User.EmailUnchanged` when the
    /// normalized address equals the current one.
    ///
    /// ```
    /// # use outcome_rail::domain::*;
    /// let user = User::create(
    ///     UserId::new(1).into_value(),
    ///     FullName::create("Ada", "Lovelace").into_value(),
    ///     Email::create("ada@example.com").into_value(),
    ///     Password::create("Secr3tPass").into_value(),
    /// );
    /// assert_eq!(user.update_email("ADA@example.com").errors(), [user::errors::EMAIL_UNCHANGED]);
    /// ```
    pub fn update_email(self, raw: &str) -> Outcome<Self> {
        Email::create(raw)
            .ensure(|email| *email != self.email, errors::EMAIL_UNCHANGED)
            .map(|email| Self { email, ..self })
    }
}
