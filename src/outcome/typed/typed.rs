use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use derive_more::IsVariant;

use crate::outcome::iter::{IntoIter, Iter};
use crate::outcome::status::Status;
use crate::outcome::value::Outcome;
use crate::util::fmt::short_type_name;

/// The outcome of an operation producing a `T`, failing with a typed error `E`.
///
/// This is the most general arity: the error keeps its concrete type instead of
/// being erased into an [`ErrorHandle`](crate::outcome::ErrorHandle). In exchange,
/// the error is mandatory - a failed `TypedOutcome` always holds an `E`, so there is
/// no lazy materialization on this arity. `E` is expected to implement
/// [`Error`]; the bound is applied where it matters (widening, rendering, `throw`)
/// rather than on the type itself.
///
/// A `TypedOutcome<T, E>` narrows losslessly into an [`Outcome<T>`] (erasing the
/// error type) or a [`Status`] (dropping the value too). The reverse widening does
/// not exist: going from an erased error back to a concrete `E` would need a cast
/// the caller has to justify.
///
/// # Examples
/// ```
/// # use outcome_types::outcome::{Outcome, Status, TypedOutcome};
/// # use std::num::ParseIntError;
/// let parsed: TypedOutcome<i32, ParseIntError> = "17".parse::<i32>().into();
/// assert_eq!(parsed, 17);
///
/// let widened = Outcome::from(parsed.clone());
/// assert_eq!(widened, 17);
/// assert!(Status::from(parsed).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TypedOutcome<T, E> {
    pub(crate) state: State<T, E>,
}

#[derive(Debug, Clone, IsVariant)]
pub(crate) enum State<T, E> {
    Ok(T),
    Failed(E),
}

impl<T, E> TypedOutcome<T, E> {
    /// Creates an ok `TypedOutcome` holding `value`.
    pub const fn ok(value: T) -> TypedOutcome<T, E> {
        TypedOutcome {
            state: State::Ok(value),
        }
    }

    /// Creates a failed `TypedOutcome` carrying `error`.
    ///
    /// The error is taken by value and is always present; this arity has no
    /// causeless failure.
    pub const fn failed(error: E) -> TypedOutcome<T, E> {
        TypedOutcome {
            state: State::Failed(error),
        }
    }

    /// Returns `true` if the `TypedOutcome` is ok.
    pub const fn is_ok(&self) -> bool {
        self.state.is_ok()
    }

    /// Returns `true` if the `TypedOutcome` is failed.
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

    /// Returns the held error, or [`None`] if ok.
    pub const fn error(&self) -> Option<&E> {
        match &self.state {
            State::Ok(_) => None,
            State::Failed(error) => Some(error),
        }
    }

    /// Consumes the `TypedOutcome`, returning the held error if failed.
    pub fn into_error(self) -> Option<E> {
        match self.state {
            State::Ok(_) => None,
            State::Failed(error) => Some(error),
        }
    }

    /// Calls exactly one of the two branches: `on_ok` with the value if ok,
    /// otherwise `on_failed` with the error.
    ///
    /// Nothing raised inside a branch is caught.
    pub fn fold<R>(self, on_ok: impl FnOnce(T) -> R, on_failed: impl FnOnce(E) -> R) -> R {
        match self.state {
            State::Ok(value) => on_ok(value),
            State::Failed(error) => on_failed(error),
        }
    }

    /// Maps the held value with `op`, passing a failure through untouched.
    pub fn map<U>(self, op: impl FnOnce(T) -> U) -> TypedOutcome<U, E> {
        match self.state {
            State::Ok(value) => TypedOutcome::ok(op(value)),
            State::Failed(error) => TypedOutcome::failed(error),
        }
    }

    /// Maps the held error with `op`, passing an ok value through untouched.
    pub fn map_err<F>(self, op: impl FnOnce(E) -> F) -> TypedOutcome<T, F> {
        match self.state {
            State::Ok(value) => TypedOutcome::ok(value),
            State::Failed(error) => TypedOutcome::failed(op(error)),
        }
    }

    /// Projects into an [`Option`], discarding the error.
    pub fn into_option(self) -> Option<T> {
        match self.state {
            State::Ok(value) => Some(value),
            State::Failed(_) => None,
        }
    }

    /// Converts into a [`Result`] with the typed error.
    pub fn into_result(self) -> Result<T, E> {
        self.fold(Ok, Err)
    }

    /// Borrowed iteration: one element when ok, none when failed.
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter { item: self.value() }
    }
}

impl<T, E: Display> TypedOutcome<T, E> {
    /// Returns the held value; panics with the error's message otherwise.
    ///
    /// This is the sanctioned escape hatch back into panic-based control flow. Code
    /// that wants to recover should use [`TypedOutcome::into_result`] instead.
    ///
    /// # Panics
    /// Panics if the `TypedOutcome` is failed, with the message of its error.
    pub fn throw(self) -> T {
        match self.state {
            State::Ok(value) => value,
            State::Failed(error) => panic!("{error}"),
        }
    }
}

impl<T, E: Default> Default for TypedOutcome<T, E> {
    /// Failed with `E::default()`. Unlike the other arities, a default failure here
    /// must hold a real error value - this arity never has an absent cause.
    fn default() -> TypedOutcome<T, E> {
        TypedOutcome::failed(E::default())
    }
}

impl<T, E> From<Result<T, E>> for TypedOutcome<T, E> {
    fn from(result: Result<T, E>) -> TypedOutcome<T, E> {
        match result {
            Ok(value) => TypedOutcome::ok(value),
            Err(error) => TypedOutcome::failed(error),
        }
    }
}

impl<T, E> From<TypedOutcome<T, E>> for Result<T, E> {
    fn from(outcome: TypedOutcome<T, E>) -> Result<T, E> {
        outcome.into_result()
    }
}

impl<T, E: Error + Send + Sync + 'static> From<TypedOutcome<T, E>> for Outcome<T> {
    /// Widens the error into a dynamic handle, preserving the error object and
    /// recording its type name for rendering.
    fn from(outcome: TypedOutcome<T, E>) -> Outcome<T> {
        outcome.fold(Outcome::ok, Outcome::failed_with)
    }
}

impl<T, E: Error + Send + Sync + 'static> From<TypedOutcome<T, E>> for Status {
    /// Narrows by dropping the value; the error survives as the status's cause.
    fn from(outcome: TypedOutcome<T, E>) -> Status {
        outcome.fold(|_| Status::ok(), Status::failed_with)
    }
}

impl<T: PartialEq, E> PartialEq for TypedOutcome<T, E> {
    /// Ok outcomes are equal iff their values are; failed outcomes are always equal
    /// to each other, whatever their errors hold.
    fn eq(&self, other: &TypedOutcome<T, E>) -> bool {
        match (&self.state, &other.state) {
            (State::Ok(a), State::Ok(b)) => a == b,
            (State::Failed(_), State::Failed(_)) => true,
            _ => false,
        }
    }
}

impl<T: Eq, E> Eq for TypedOutcome<T, E> {}

impl<T: PartialEq, E> PartialEq<T> for TypedOutcome<T, E> {
    /// Equal to a raw value iff ok and holding an equal value.
    fn eq(&self, other: &T) -> bool {
        self.value() == Some(other)
    }
}

impl<T: PartialEq, E> PartialEq<Outcome<T>> for TypedOutcome<T, E> {
    /// Both arities carry a `T`, so the comparison is value-aware, with failures
    /// interchangeable as usual.
    fn eq(&self, other: &Outcome<T>) -> bool {
        match (self.value(), other.value()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Hash, E> Hash for TypedOutcome<T, E> {
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

impl<T, E> IntoIterator for TypedOutcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Yields the value when ok, nothing when failed.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            item: self.into_option(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a TypedOutcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Debug, E: Error> Display for TypedOutcome<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Ok(value) => write!(f, "Ok({value:?})"),
            State::Failed(error) => {
                write!(f, "Error({}): {}", short_type_name::<E>(), error)
            },
        }
    }
}
