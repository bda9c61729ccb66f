use crate::outcome::Outcome;
use crate::types::Error;

/// Anything that can report the errors of an outcome, regardless of its value type.
///
/// This lets [`combine`](crate::combine()) accept outcomes of different value
/// types through `&dyn Failable`; the [`combine!`](crate::combine!) macro
/// does that cast for you.
///
/// # Examples
///
/// ```
/// use outcome_rail::{combine, Error, Failable, Outcome};
///
/// let id = Outcome::success(7_u64);
/// let name = Outcome::<String>::failure(Error::empty("Name"));
///
/// let checks: [&dyn Failable; 2] = [&id, &name];
/// assert_eq!(combine(checks).errors(), [Error::empty("Name")]);
/// ```
pub trait Failable {
    /// The errors of a failure; empty on success.
    fn errors(&self) -> &[Error];

    fn is_failure(&self) -> bool {
        !self.errors().is_empty()
    }
}

impl<T> Failable for Outcome<T> {
    #[inline]
    fn errors(&self) -> &[Error] {
        Outcome::errors(self)
    }
}

impl<F: Failable + ?Sized> Failable for &F {
    #[inline]
    fn errors(&self) -> &[Error] {
        (**self).errors()
    }
}
