//! A module containing [`Outcome`], the value-carrying arity of the outcome algebra
//! with a dynamic error side.
//!
//! [`Outcome`] is also re-exported under the parent module.

mod outcome;

pub use outcome::Outcome;
