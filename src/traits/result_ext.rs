//! Extension traits for moving `Result` and `Option` values onto the rail.
//!
//! Infrastructure code reports failures through its own error types. At the
//! workflow boundary those are translated into a single domain [`Error`]:
//! the technical detail is dropped so it never reaches the surface.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, ResultOutcomeExt};
//!
//! const UNAVAILABLE: Error = Error::from_static("Storage.Unavailable", "Storage is unavailable.");
//!
//! let write: Result<(), std::io::Error> = Err(std::io::Error::other("connection reset"));
//! let outcome = write.or_error(UNAVAILABLE);
//!
//! assert_eq!(outcome.errors(), [UNAVAILABLE]);
//! assert!(!outcome.display_errors().to_string().contains("connection reset"));
//! ```

use crate::outcome::Outcome;
use crate::types::Error;

/// Extension trait translating `Result<T, E>` into [`Outcome<T>`].
pub trait ResultOutcomeExt<T, E> {
    /// Replaces any `Err` with `error`.
    fn or_error(self, error: Error) -> Outcome<T>;

    /// Chooses the domain error from the technical one.
    ///
    /// `f` is only called on `Err`. It decides which domain error applies,
    /// for instance a conflict versus a generic write failure; the technical
    /// error itself is dropped afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::ErrorKind;
    /// use outcome_rail::{Error, ResultOutcomeExt};
    ///
    /// let write: Result<(), std::io::Error> = Err(ErrorKind::AlreadyExists.into());
    /// let outcome = write.or_error_with(|err| match err.kind() {
    ///     ErrorKind::AlreadyExists => Error::conflict("Document"),
    ///     _ => Error::new("Document.WriteFailed", "The document could not be written."),
    /// });
    /// assert_eq!(outcome.errors()[0].code(), "Document.Conflict");
    /// ```
    fn or_error_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&E) -> Error;
}

impl<T, E> ResultOutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn or_error(self, error: Error) -> Outcome<T> {
        Outcome::from_result_or(self, error)
    }

    #[inline]
    fn or_error_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&E) -> Error,
    {
        match self {
            Ok(value) => Outcome::success(value),
            Err(err) => Outcome::failure(f(&err)),
        }
    }
}

/// Extension trait turning `Option<T>` into [`Outcome<T>`].
pub trait OptionOutcomeExt<T> {
    /// Fails with `error` on `None`.
    fn ok_or_error(self, error: Error) -> Outcome<T>;
}

impl<T> OptionOutcomeExt<T> for Option<T> {
    #[inline]
    fn ok_or_error(self, error: Error) -> Outcome<T> {
        Outcome::from_option(self, error)
    }
}
