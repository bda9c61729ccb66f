//! A general-purpose display name.
use alloc::string::String;
use core::fmt;

use crate::outcome::Outcome;

use super::text;

/// Error catalog for [`Name`].
pub mod errors {
    use crate::types::Error;

    pub const EMPTY: Error = Error::from_static("Name.Empty", "Name must not be empty.");
    pub const TOO_LONG: Error =
        Error::from_static("Name.TooLong", "Name must be at most 100 characters long.");
}

/// A non-blank name of at most [`Name::MAX_LENGTH`] characters, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub const MAX_LENGTH: usize = 100;

    /// Validates `raw`, reporting both `Name.Empty` and `Name.TooLong` when they apply.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::domain::{name, Name};
    ///
    /// assert_eq!(Name::create("  Ada ").into_value().as_str(), "Ada");
    /// assert_eq!(Name::create("").errors(), [name::errors::EMPTY]);
    /// ```
    pub fn create(raw: &str) -> Outcome<Self> {
        text::bounded(raw, Self::MAX_LENGTH, errors::EMPTY, errors::TOO_LONG).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
