use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use derive_more::IsVariant;

use crate::outcome::error::{Cause, ErrorHandle, OperationFailed};
use crate::outcome::typed::TypedOutcome;
use crate::outcome::value::Outcome;

/// The outcome of an operation with no success payload: either ok, or failed with an
/// optionally-captured cause.
///
/// A `Status` behaves like a [`bool`] that can explain itself. It converts from and
/// to `bool`, composes with other outcomes under `&`, `|` and `^`, and - unlike a
/// bare flag - can carry the error that made it false. The cause is optional and
/// lazy: [`Status::failed`] allocates nothing, and a default error is synthesized
/// only if someone actually asks for it.
///
/// The default value is failed, so a zero-information `Status` is never mistaken for
/// success.
///
/// # Examples
/// ```
/// # use outcome_types::outcome::Status;
/// let done = Status::ok() & Status::from(2 + 2 == 4);
/// assert!(done.is_ok());
///
/// let failed = Status::failed();
/// assert_eq!(failed, Status::from(false));
/// assert_eq!(failed.error().map(ToString::to_string).as_deref(), Some("Operation Failed"));
/// ```
#[derive(Debug, Clone)]
pub struct Status {
    pub(crate) state: State,
}

#[derive(Debug, Clone, IsVariant)]
pub(crate) enum State {
    Ok,
    Failed(Option<Cause>),
}

impl Default for Status {
    /// Failed, with no cause captured.
    fn default() -> Status {
        Status::failed()
    }
}

impl Status {
    /// Creates an ok `Status`.
    pub const fn ok() -> Status {
        Status { state: State::Ok }
    }

    /// Creates a failed `Status` without capturing a cause.
    ///
    /// No error object exists until one is observed through [`Status::error`],
    /// [`Status::cause`], [`Status::fold`] or rendering.
    pub const fn failed() -> Status {
        Status {
            state: State::Failed(None),
        }
    }

    /// Creates a failed `Status` carrying `error` as its cause.
    ///
    /// # Examples
    /// ```
    /// # use outcome_types::outcome::Status;
    /// # use std::fmt;
    /// #[derive(Debug)]
    /// struct Offline;
    /// impl fmt::Display for Offline {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         write!(f, "host is offline")
    ///     }
    /// }
    /// impl std::error::Error for Offline {}
    ///
    /// let status = Status::failed_with(Offline);
    /// assert_eq!(status.to_string(), "Error(Offline): host is offline");
    /// ```
    pub fn failed_with<E: Error + Send + Sync + 'static>(error: E) -> Status {
        Status {
            state: State::Failed(Some(Cause::new(error))),
        }
    }

    pub(crate) const fn from_cause(cause: Option<Cause>) -> Status {
        Status {
            state: State::Failed(cause),
        }
    }

    /// Returns `true` if the `Status` is ok.
    pub const fn is_ok(&self) -> bool {
        self.state.is_ok()
    }

    /// Returns `true` if the `Status` is failed.
    pub const fn is_failed(&self) -> bool {
        self.state.is_failed()
    }

    /// Returns the error behind a failed `Status`, or [`None`] if ok.
    ///
    /// A failure always produces an error here: when no cause was captured, a
    /// shared [`OperationFailed`] stands in.
    pub fn error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match &self.state {
            State::Ok => None,
            State::Failed(Some(cause)) => Some(cause.error.as_ref()),
            State::Failed(None) => Some(&OperationFailed),
        }
    }

    /// Returns a shareable handle to the error behind a failed `Status`, or [`None`]
    /// if ok.
    ///
    /// When no cause was captured, a fresh [`OperationFailed`] handle is synthesized
    /// on every call; callers holding handles from separate calls may therefore see
    /// distinct (but equal-ranking) error objects.
    pub fn cause(&self) -> Option<ErrorHandle> {
        match &self.state {
            State::Ok => None,
            State::Failed(Some(cause)) => Some(cause.error.clone()),
            State::Failed(None) => Some(Cause::unspecified().error),
        }
    }

    /// Calls exactly one of the two branches: `on_ok` if the `Status` is ok,
    /// otherwise `on_failed` with the (materialized) error handle.
    ///
    /// Nothing raised inside a branch is caught.
    ///
    /// # Examples
    /// ```
    /// # use outcome_types::outcome::Status;
    /// let level = Status::failed().fold(|| "info", |_| "warn");
    /// assert_eq!(level, "warn");
    /// ```
    pub fn fold<R>(self, on_ok: impl FnOnce() -> R, on_failed: impl FnOnce(ErrorHandle) -> R) -> R {
        match self.state {
            State::Ok => on_ok(),
            State::Failed(cause) => {
                on_failed(cause.unwrap_or_else(Cause::unspecified).error)
            },
        }
    }

    /// Converts into a [`Result`], materializing the error for the failed branch.
    pub fn into_result(self) -> Result<(), ErrorHandle> {
        self.fold(|| Ok(()), Err)
    }

    /// Does nothing if ok; panics with the failure's message otherwise.
    ///
    /// This is the sanctioned escape hatch back into panic-based control flow. Code
    /// that wants to recover should use [`Status::into_result`] instead.
    ///
    /// # Panics
    /// Panics if the `Status` is failed, with the message of the (possibly
    /// synthesized) error.
    pub fn throw(self) {
        if let State::Failed(cause) = self.state {
            panic!("{}", cause.unwrap_or_else(Cause::unspecified).error)
        }
    }
}

impl From<bool> for Status {
    /// `true` becomes ok; `false` becomes a failure with no cause captured.
    fn from(ok: bool) -> Status {
        if ok { Status::ok() } else { Status::failed() }
    }
}

impl From<Status> for bool {
    fn from(status: Status) -> bool {
        status.is_ok()
    }
}

impl PartialEq for Status {
    /// Flag equality. All failures are interchangeable: why two statuses failed
    /// never affects whether they are equal.
    fn eq(&self, other: &Status) -> bool {
        self.is_ok() == other.is_ok()
    }
}

impl Eq for Status {}

impl PartialEq<bool> for Status {
    fn eq(&self, other: &bool) -> bool {
        self.is_ok() == *other
    }
}

impl PartialEq<Status> for bool {
    fn eq(&self, other: &Status) -> bool {
        *self == other.is_ok()
    }
}

impl<T> PartialEq<Outcome<T>> for Status {
    /// Cross-arity comparisons read ok-flags only.
    fn eq(&self, other: &Outcome<T>) -> bool {
        self.is_ok() == other.is_ok()
    }
}

impl<T, E> PartialEq<TypedOutcome<T, E>> for Status {
    /// Cross-arity comparisons read ok-flags only.
    fn eq(&self, other: &TypedOutcome<T, E>) -> bool {
        self.is_ok() == other.is_ok()
    }
}

impl Hash for Status {
    /// Ok hashes to one fixed byte, failed to another; every failure hashes
    /// identically, matching the equality contract.
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.is_ok() as u8);
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Ok => write!(f, "Ok"),
            State::Failed(Some(cause)) => Display::fmt(cause, f),
            State::Failed(None) => Display::fmt(&Cause::unspecified(), f),
        }
    }
}
