use core::fmt;

use crate::outcome::Outcome;

use super::{FirstName, LastName};

/// A first and last name validated together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName {
    first: FirstName,
    last: LastName,
}

impl FullName {
    /// Validates both parts and reports the errors of both.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::domain::{first_name, last_name, FullName};
    ///
    /// assert_eq!(
    ///     FullName::create("", "").errors(),
    ///     [first_name::errors::EMPTY, last_name::errors::EMPTY]
    /// );
    /// assert_eq!(FullName::create("Ada", "Lovelace").into_value().to_string(), "Ada Lovelace");
    /// ```
    pub fn create(first: &str, last: &str) -> Outcome<Self> {
        FirstName::create(first).zip_with(LastName::create(last), |first, last| Self { first, last })
    }

    #[must_use]
    pub fn first(&self) -> &FirstName {
        &self.first
    }

    #[must_use]
    pub fn last(&self) -> &LastName {
        &self.last
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}
