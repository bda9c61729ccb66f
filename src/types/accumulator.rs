use crate::outcome::Outcome;
use crate::types::{Error, ErrorVec};

/// Collects errors from several outcomes in the order they are absorbed.
///
/// This is the shared aggregation step behind [`combine`](crate::combine),
/// [`ZipAll`](crate::ZipAll) and collecting an iterator of outcomes: every
/// input is inspected, failures contribute their errors, and the finished
/// outcome succeeds only if nothing was collected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorAccumulator {
    errors: ErrorVec<Error>,
}

impl ErrorAccumulator {
    /// Creates a new empty accumulator.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self { errors: ErrorVec::new() }
    }

    /// Adds a single error.
    #[inline]
    pub fn push(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Extends the accumulator with errors from an iterator.
    #[inline]
    pub fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }

    /// Takes the value out of a successful outcome, or records its errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, ErrorAccumulator, Outcome};
    ///
    /// let mut acc = ErrorAccumulator::new();
    /// assert_eq!(acc.absorb(Outcome::success(1)), Some(1));
    /// assert_eq!(acc.absorb(Outcome::<i32>::failure(Error::empty("Name"))), None);
    /// assert_eq!(acc.len(), 1);
    /// ```
    #[inline]
    pub fn absorb<T>(&mut self, outcome: Outcome<T>) -> Option<T> {
        match outcome.into_result() {
            Ok(value) => Some(value),
            Err(errors) => {
                self.errors.extend(errors);
                None
            },
        }
    }

    /// Returns true if nothing has been collected.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of collected errors.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns an iterator over the collected errors.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Succeeds with `value` if nothing was collected, fails otherwise.
    ///
    /// `value` is only called on the success path.
    #[inline]
    pub fn finish_with<T, F>(self, value: F) -> Outcome<T>
    where
        F: FnOnce() -> T,
    {
        if self.errors.is_empty() {
            Outcome::success(value())
        } else {
            Outcome::from_failed(self.errors)
        }
    }

    /// Finishes as an untyped outcome.
    #[inline]
    pub fn finish(self) -> Outcome {
        self.finish_with(|| ())
    }

    /// Consumes the accumulator and returns the underlying `ErrorVec`.
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> ErrorVec<Error> {
        self.errors
    }
}

impl Extend<Error> for ErrorAccumulator {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl FromIterator<Error> for ErrorAccumulator {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self { errors: iter.into_iter().collect() }
    }
}

impl IntoIterator for ErrorAccumulator {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
