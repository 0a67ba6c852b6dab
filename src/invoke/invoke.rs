use std::panic::{self, AssertUnwindSafe};

use crate::invoke::error::CaughtPanic;
use crate::outcome::{Outcome, Status};
use crate::util::panic::payload_message;

/// Invokes `operation`, capturing a panic as a failed [`Outcome`] instead of
/// unwinding.
///
/// On normal return the outcome is ok with the returned value; on panic it is
/// failed with a [`CaughtPanic`] holding the panic's message. Contrast with
/// [`invoke_or`], which discards the panic entirely.
///
/// # Examples
/// ```
/// # use outcome_types::invoke::try_invoke;
/// let ok = try_invoke(|| 42);
/// assert_eq!(ok, 42);
///
/// let failed = try_invoke(|| -> u32 { panic!("out of range") });
/// assert_eq!(failed.error().map(ToString::to_string).as_deref(), Some("out of range"));
/// ```
pub fn try_invoke<T>(operation: impl FnOnce() -> T) -> Outcome<T> {
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(value) => Outcome::ok(value),
        Err(payload) => {
            Outcome::failed_with(CaughtPanic::new(payload_message(payload.as_ref())))
        },
    }
}

/// The zero-payload form of [`try_invoke`]: runs `action` and reports whether it
/// completed without panicking.
pub fn try_run(action: impl FnOnce()) -> Status {
    try_invoke(action).into()
}

/// Invokes `operation` and returns its value, or `fallback` if it panics.
///
/// The panic is discarded without a trace - no error is captured, nothing is
/// reported. This is an explicitly best-effort, no-diagnostics helper; use
/// [`try_invoke`] when the failure matters.
pub fn invoke_or<T>(operation: impl FnOnce() -> T, fallback: T) -> T {
    panic::catch_unwind(AssertUnwindSafe(operation)).unwrap_or(fallback)
}

/// Runs `actions` in order, stopping at the first one that panics and returning
/// that failure; [`Status::ok`] if every action completes.
///
/// Actions after the failing one are never invoked. Heterogeneous action lists can
/// be passed as `Box<dyn FnOnce()>` items.
///
/// # Examples
/// ```
/// # use outcome_types::invoke::invoke_until_failure;
/// # fn check_config() {}
/// # fn warm_cache() {}
/// let status = invoke_until_failure([check_config as fn(), warm_cache]);
/// assert!(status.is_ok());
/// ```
pub fn invoke_until_failure<F: FnOnce()>(actions: impl IntoIterator<Item = F>) -> Status {
    for action in actions {
        let status = try_run(action);

        if status.is_failed() {
            return status;
        }
    }

    Status::ok()
}
