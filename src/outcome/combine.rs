//! Aggregating combinators.
//!
//! These take several independent outcomes, inspect every one of them, and
//! report the union of their errors in input order. They are how a value
//! object reports "empty and too long" in one go instead of stopping at the
//! first violated rule.
use crate::outcome::{Outcome, State};
use crate::traits::Failable;
use crate::types::ErrorAccumulator;

/// Combines independent outcomes into one untyped outcome.
///
/// Every input is inspected. The result succeeds iff all inputs succeeded;
/// otherwise its errors are the concatenation, in input order, of the errors
/// of each failing input.
///
/// # Examples
///
/// ```
/// use outcome_rail::{combine, Error, Outcome};
///
/// let first = Outcome::<&str>::failure(Error::empty("FirstName"));
/// let last = Outcome::<&str>::failure(Error::empty("LastName"));
///
/// let combined = combine([&first, &last]);
/// assert_eq!(combined.errors(), [Error::empty("FirstName"), Error::empty("LastName")]);
/// ```
pub fn combine<I>(outcomes: I) -> Outcome
where
    I: IntoIterator,
    I::Item: Failable,
{
    let mut acc = ErrorAccumulator::new();
    for outcome in outcomes {
        acc.extend(outcome.errors().iter().cloned());
    }
    acc.finish()
}

impl<A> Outcome<A> {
    /// Pairs two outcomes, aggregating the errors of both on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let pair = Outcome::success(1).zip(Outcome::success("a"));
    /// assert_eq!(pair.into_value(), (1, "a"));
    ///
    /// let both = Outcome::<i32>::failure(Error::empty("Left"))
    ///     .zip(Outcome::<i32>::failure(Error::empty("Right")));
    /// assert_eq!(both.errors().len(), 2);
    /// ```
    #[inline]
    pub fn zip<B>(self, other: Outcome<B>) -> Outcome<(A, B)> {
        match (self.state, other.state) {
            (State::Success(a), State::Success(b)) => Outcome::success((a, b)),
            (State::Failure(errors), State::Success(_)) | (State::Success(_), State::Failure(errors)) => {
                Outcome::from_failed(errors)
            },
            (State::Failure(mut first), State::Failure(second)) => {
                first.extend(second);
                Outcome::from_failed(first)
            },
        }
    }

    /// Pairs two outcomes and merges their values with `combiner`.
    ///
    /// The combiner runs only if both succeeded.
    #[inline]
    pub fn zip_with<B, C, F>(self, other: Outcome<B>, combiner: F) -> Outcome<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(a, b)| combiner(a, b))
    }
}

/// N-ary zip over a tuple of outcomes.
///
/// Implemented for tuples of 2 to 8 outcomes.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Outcome, ZipAll};
///
/// let total = (Outcome::success(1), Outcome::success(2), Outcome::success(3))
///     .zip_with(|(a, b, c)| a + b + c);
/// assert_eq!(total.into_value(), 6);
///
/// let failed = (
///     Outcome::<i32>::failure(Error::empty("A")),
///     Outcome::success(2),
///     Outcome::<i32>::failure(Error::empty("C")),
/// )
///     .zip_all();
/// let codes: Vec<_> = failed.errors().iter().map(Error::code).collect();
/// assert_eq!(codes, ["A.Empty", "C.Empty"]);
/// ```
pub trait ZipAll: Sized {
    /// The tuple of success values.
    type Values;

    /// Collects every value, or every error, of the tuple.
    fn zip_all(self) -> Outcome<Self::Values>;

    /// Zips the tuple and merges the values with `combiner`.
    #[inline]
    fn zip_with<C, F>(self, combiner: F) -> Outcome<C>
    where
        F: FnOnce(Self::Values) -> C,
    {
        self.zip_all().map(combiner)
    }
}

macro_rules! impl_zip_all {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty),+> ZipAll for ($(Outcome<$ty>,)+) {
            type Values = ($($ty,)+);

            fn zip_all(self) -> Outcome<Self::Values> {
                let ($($var,)+) = self;
                let mut acc = ErrorAccumulator::new();
                $(let $var = acc.absorb($var);)+
                match ($($var,)+) {
                    ($(Some($var),)+) => Outcome::success(($($var,)+)),
                    _ => Outcome::from_failed(acc.into_inner()),
                }
            }
        }
    };
}

impl_zip_all!(A a, B b);
impl_zip_all!(A a, B b, C c);
impl_zip_all!(A a, B b, C c, D d);
impl_zip_all!(A a, B b, C c, D d, E e);
impl_zip_all!(A a, B b, C c, D d, E e, F f);
impl_zip_all!(A a, B b, C c, D d, E e, F f, G g);
impl_zip_all!(A a, B b, C c, D d, E e, F f, G g, H h);

/// Collects an iterator of outcomes, aggregating every error.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Outcome};
///
/// let all: Outcome<Vec<i32>> = vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all.into_value(), vec![1, 2]);
///
/// let some: Outcome<Vec<i32>> = vec![
///     Outcome::failure(Error::empty("A")),
///     Outcome::success(2),
///     Outcome::failure(Error::empty("B")),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(some.errors().len(), 2);
/// ```
impl<T, V> FromIterator<Outcome<T>> for Outcome<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut acc = ErrorAccumulator::new();
        let mut values = alloc::vec::Vec::new();
        for outcome in iter {
            if let Some(value) = acc.absorb(outcome) {
                if acc.is_empty() {
                    values.push(value);
                }
            }
        }
        acc.finish_with(|| values.into_iter().collect())
    }
}
