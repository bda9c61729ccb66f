use alloc::string::String;
use core::fmt;

use crate::outcome::Outcome;

use super::text;

/// Error catalog for [`FirstName`].
pub mod errors {
    use crate::types::Error;

    pub const EMPTY: Error = Error::from_static("FirstName.Empty", "FirstName must not be empty.");
    pub const TOO_LONG: Error =
        Error::from_static("FirstName.TooLong", "FirstName must be at most 50 characters long.");
}

/// A person's given name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FirstName(String);

impl FirstName {
    pub const MAX_LENGTH: usize = 50;

    pub fn create(raw: &str) -> Outcome<Self> {
        text::bounded(raw, Self::MAX_LENGTH, errors::EMPTY, errors::TOO_LONG).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FirstName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
