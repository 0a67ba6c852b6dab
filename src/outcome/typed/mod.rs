//! A module containing [`TypedOutcome`], the typed-error arity of the outcome
//! algebra.
//!
//! [`TypedOutcome`] is also re-exported under the parent module.

mod tests;
mod typed;

pub use typed::TypedOutcome;
