//! Bridges between panicking code and the outcome algebra.
//!
//! [`try_invoke`] and [`try_run`] capture a panic as a failure (keeping its
//! message), [`invoke_or`] trades a panic for a fallback value with no diagnostics
//! at all, and [`invoke_until_failure`] runs a sequence of actions with
//! short-circuiting.
//!
//! All of these execute their callbacks synchronously and report only through their
//! return value; none of them log, print or re-raise.

#![warn(missing_docs)]

mod error;
mod invoke;

pub use error::CaughtPanic;
pub use invoke::{invoke_or, invoke_until_failure, try_invoke, try_run};
