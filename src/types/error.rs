//! The `(code, message)` error value carried by failed outcomes.
//!
//! Errors are plain data: two strings compared structurally. Domain concepts
//! declare their catalogs as `const` tables built with [`Error::from_static`];
//! the subject-based factories ([`Error::empty`], [`Error::too_long`], ...)
//! produce the same values for subjects only known at runtime.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Error;
//!
//! const EMPTY: Error = Error::from_static("Name.Empty", "Name must not be empty.");
//!
//! assert_eq!(EMPTY, Error::empty("Name"));
//! assert_eq!(EMPTY.to_string(), "Name.Empty: Name must not be empty.");
//! ```
use alloc::borrow::Cow;
use alloc::format;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One violated rule or failed operation, identified by a stable dotted code.
///
/// Equality, ordering and hashing are structural over `(code, message)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Error {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl Error {
    /// Creates an error from owned or borrowed strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = Error::new("Order.Locked", format!("Order {} is locked.", 7));
    /// assert_eq!(err.code(), "Order.Locked");
    /// assert_eq!(err.message(), "Order 7 is locked.");
    /// ```
    #[inline]
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self { code: code.into(), message: message.into() }
    }

    /// Creates an error in a `const` context, for static catalogs.
    #[must_use]
    #[inline]
    pub const fn from_static(code: &'static str, message: &'static str) -> Self {
        Self { code: Cow::Borrowed(code), message: Cow::Borrowed(message) }
    }

    /// The stable identifier, e.g. `"Email.InvalidFormat"`.
    #[must_use]
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable description.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// `{subject}.Empty`: a required value was blank.
    #[must_use]
    pub fn empty(subject: &str) -> Self {
        Self::new(format!("{subject}.Empty"), format!("{subject} must not be empty."))
    }

    /// `{subject}.TooLong`: a value exceeded `max` characters.
    #[must_use]
    pub fn too_long(subject: &str, max: usize) -> Self {
        Self::new(
            format!("{subject}.TooLong"),
            format!("{subject} must be at most {max} characters long."),
        )
    }

    /// `{subject}.TooShort`: a value had fewer than `min` characters.
    #[must_use]
    pub fn too_short(subject: &str, min: usize) -> Self {
        Self::new(
            format!("{subject}.TooShort"),
            format!("{subject} must be at least {min} characters long."),
        )
    }

    /// `{subject}.InvalidFormat`: a value was not shaped as expected.
    #[must_use]
    pub fn invalid_format(subject: &str) -> Self {
        Self::new(format!("{subject}.InvalidFormat"), format!("{subject} has an invalid format."))
    }

    /// `{subject}.InvalidValue`: a value was outside an enumerated set.
    #[must_use]
    pub fn invalid_value(subject: &str) -> Self {
        Self::new(format!("{subject}.InvalidValue"), format!("{subject} has an invalid value."))
    }

    /// `{subject}.NotFound`: a lookup found nothing.
    #[must_use]
    pub fn not_found(subject: &str) -> Self {
        Self::new(format!("{subject}.NotFound"), format!("{subject} was not found."))
    }

    /// `{subject}.Conflict`: a uniqueness rule was violated.
    #[must_use]
    pub fn conflict(subject: &str) -> Self {
        Self::new(format!("{subject}.Conflict"), format!("{subject} already exists."))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl core::error::Error for Error {}
