//! A module containing [`Status`], the zero-payload arity of the outcome algebra.
//!
//! [`Status`] is also re-exported under the parent module.

mod status;

pub use status::Status;
