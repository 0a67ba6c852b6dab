use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use derive_more::IsVariant;

use crate::outcome::error::{Cause, ErrorHandle, OperationFailed};
use crate::outcome::iter::{IntoIter, Iter};
use crate::outcome::status::Status;
use crate::outcome::typed::TypedOutcome;

/// The outcome of an operation producing a `T`: either ok with the value, or failed
/// with an optionally-captured cause.
///
/// Unlike [`Result`], the error side is untyped (a dynamic [`ErrorHandle`]) and
/// optional: a failure can exist without any error having been allocated, in which
/// case [`OperationFailed`] is synthesized at the moment of observation. The sum
/// representation means a failed `Outcome` holds no value slot at all - there is no
/// "default value you must not look at".
///
/// The default for any `T` (no `T: Default` required) is a causeless failure.
///
/// # Examples
/// ```
/// # use outcome_types::outcome::Outcome;
/// let found = Outcome::ok(5);
/// assert_eq!(found, 5);
/// assert_eq!(found.into_option(), Some(5));
///
/// let missing = Outcome::<i32>::failed();
/// assert!(missing.is_failed());
/// assert_eq!(missing, Outcome::<i32>::failed_with(std::fmt::Error));
/// ```
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    pub(crate) state: State<T>,
}

#[derive(Debug, Clone, IsVariant)]
pub(crate) enum State<T> {
    Ok(T),
    Failed(Option<Cause>),
}

impl<T> Outcome<T> {
    /// Creates an ok `Outcome` holding `value`.
    pub const fn ok(value: T) -> Outcome<T> {
        Outcome {
            state: State::Ok(value),
        }
    }

    /// Creates a failed `Outcome` without capturing a cause.
    pub const fn failed() -> Outcome<T> {
        Outcome {
            state: State::Failed(None),
        }
    }

    /// Creates a failed `Outcome` carrying `error` as its cause.
    pub fn failed_with<E: Error + Send + Sync + 'static>(error: E) -> Outcome<T> {
        Outcome {
            state: State::Failed(Some(Cause::new(error))),
        }
    }

    /// Returns `true` if the `Outcome` is ok.
    pub const fn is_ok(&self) -> bool {
        self.state.is_ok()
    }

    /// Returns `true` if the `Outcome` is failed.
    pub const fn is_failed(&self) -> bool {
        self.state.is_failed()
    }

    /// Returns the held value, or [`None`] if failed.
    pub const fn value(&self) -> Option<&T> {
        match &self.state {
            State::Ok(value) => Some(value),
            State::Failed(_) => None,
        }
    }

    /// Returns the error behind a failed `Outcome`, or [`None`] if ok.
    ///
    /// A failure always produces an error here: when no cause was captured, a
    /// shared [`OperationFailed`] stands in.
    pub fn error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match &self.state {
            State::Ok(_) => None,
            State::Failed(Some(cause)) => Some(cause.error.as_ref()),
            State::Failed(None) => Some(&OperationFailed),
        }
    }

    /// Returns a shareable handle to the error behind a failed `Outcome`, or
    /// [`None`] if ok.
    ///
    /// When no cause was captured, a fresh [`OperationFailed`] handle is synthesized
    /// on every call.
    pub fn cause(&self) -> Option<ErrorHandle> {
        match &self.state {
            State::Ok(_) => None,
            State::Failed(Some(cause)) => Some(cause.error.clone()),
            State::Failed(None) => Some(Cause::unspecified().error),
        }
    }

    /// Calls exactly one of the two branches: `on_ok` with the value if ok,
    /// otherwise `on_failed` with the (materialized) error handle.
    ///
    /// This is the primary way to turn an `Outcome` into any other representation.
    /// Nothing raised inside a branch is caught.
    ///
    /// # Examples
    /// ```
    /// # use outcome_types::outcome::Outcome;
    /// let text = Outcome::ok(5).fold(|n| n.to_string(), |e| e.to_string());
    /// assert_eq!(text, "5");
    /// ```
    pub fn fold<R>(
        self,
        on_ok: impl FnOnce(T) -> R,
        on_failed: impl FnOnce(ErrorHandle) -> R,
    ) -> R {
        match self.state {
            State::Ok(value) => on_ok(value),
            State::Failed(cause) => {
                on_failed(cause.unwrap_or_else(Cause::unspecified).error)
            },
        }
    }

    /// Maps the held value with `op`, passing a failure through untouched (the
    /// captured cause, or its absence, is preserved).
    pub fn map<U>(self, op: impl FnOnce(T) -> U) -> Outcome<U> {
        match self.state {
            State::Ok(value) => Outcome::ok(op(value)),
            State::Failed(cause) => Outcome {
                state: State::Failed(cause),
            },
        }
    }

    /// Projects into an [`Option`], discarding any failure information.
    pub fn into_option(self) -> Option<T> {
        match self.state {
            State::Ok(value) => Some(value),
            State::Failed(_) => None,
        }
    }

    /// Converts into a [`Result`], materializing the error for the failed branch.
    pub fn into_result(self) -> Result<T, ErrorHandle> {
        self.fold(Ok, Err)
    }

    /// Returns the held value; panics with the failure's message otherwise.
    ///
    /// This is the sanctioned escape hatch back into panic-based control flow. Code
    /// that wants to recover should use [`Outcome::into_result`] instead.
    ///
    /// # Panics
    /// Panics if the `Outcome` is failed, with the message of the (possibly
    /// synthesized) error.
    pub fn throw(self) -> T {
        match self.state {
            State::Ok(value) => value,
            State::Failed(cause) => {
                panic!("{}", cause.unwrap_or_else(Cause::unspecified).error)
            },
        }
    }

    /// Borrowed iteration: one element when ok, none when failed.
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter { item: self.value() }
    }
}

impl<T> Default for Outcome<T> {
    /// Failed, with no cause captured. Note that no `T: Default` is required; a
    /// failed `Outcome` stores no value at all.
    fn default() -> Outcome<T> {
        Outcome::failed()
    }
}

impl<T, E: Error + Send + Sync + 'static> From<Result<T, E>> for Outcome<T> {
    /// Captures an [`Err`] as the outcome's cause, preserving the error object.
    fn from(result: Result<T, E>) -> Outcome<T> {
        match result {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::failed_with(error),
        }
    }
}

impl<T> From<Outcome<T>> for Status {
    /// Narrows by dropping the value; a captured cause survives the conversion.
    fn from(outcome: Outcome<T>) -> Status {
        match outcome.state {
            State::Ok(_) => Status::ok(),
            State::Failed(cause) => Status::from_cause(cause),
        }
    }
}

impl<T: PartialEq> PartialEq for Outcome<T> {
    /// Ok outcomes are equal iff their values are; failed outcomes are always equal
    /// to each other, whatever their causes.
    fn eq(&self, other: &Outcome<T>) -> bool {
        match (&self.state, &other.state) {
            (State::Ok(a), State::Ok(b)) => a == b,
            (State::Failed(_), State::Failed(_)) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Outcome<T> {}

impl<T: PartialEq> PartialEq<T> for Outcome<T> {
    /// Equal to a raw value iff ok and holding an equal value.
    fn eq(&self, other: &T) -> bool {
        self.value() == Some(other)
    }
}

impl<T: PartialEq, E> PartialEq<TypedOutcome<T, E>> for Outcome<T> {
    /// Both arities carry a `T`, so the comparison is value-aware, with failures
    /// interchangeable as usual.
    fn eq(&self, other: &TypedOutcome<T, E>) -> bool {
        match (self.value(), other.value()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Hash> Hash for Outcome<T> {
    /// Ok hashes a discriminant byte plus the value; every failure hashes to the
    /// same fixed sentinel, matching the equality contract.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.state {
            State::Ok(value) => {
                state.write_u8(1);
                value.hash(state);
            },
            State::Failed(_) => state.write_u8(0),
        }
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Yields the value when ok, nothing when failed. Useful for flattening a
    /// collection of outcomes down to its successful values.
    ///
    /// # Examples
    /// ```
    /// # use outcome_types::outcome::Outcome;
    /// let outcomes = [Outcome::ok(1), Outcome::failed(), Outcome::ok(3)];
    /// let values: Vec<i32> = outcomes.into_iter().flatten().collect();
    /// assert_eq!(values, [1, 3]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            item: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Debug> Display for Outcome<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Ok(value) => write!(f, "Ok({value:?})"),
            State::Failed(Some(cause)) => Display::fmt(cause, f),
            State::Failed(None) => Display::fmt(&Cause::unspecified(), f),
        }
    }
}
