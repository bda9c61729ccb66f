//! Lifting plain values onto the success track.

use crate::outcome::Outcome;

/// Wraps any value in a successful [`Outcome`].
///
/// The method form of [`success`](crate::success), handy at the end of a
/// method chain.
///
/// # Examples
///
/// ```
/// use outcome_rail::IntoOutcome;
///
/// let outcome = "ada".to_uppercase().into_outcome();
/// assert_eq!(outcome.into_value(), "ADA");
/// ```
pub trait IntoOutcome: Sized {
    #[inline]
    fn into_outcome(self) -> Outcome<Self> {
        Outcome::success(self)
    }
}

impl<T> IntoOutcome for T {}
