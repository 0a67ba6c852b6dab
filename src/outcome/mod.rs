//! The outcome algebra: [`Status`], [`Outcome`] and [`TypedOutcome`].
//!
//! All three types share one shape - an immutable two-state value fixed at
//! construction, either ok (optionally carrying a payload) or failed (optionally
//! carrying a cause) - and one contract:
//!
//! - A default-constructed outcome of any arity is failed. "No information" and
//!   "failed" are deliberately the same thing, mirroring `bool::default()`.
//! - A failure observed for its error always produces one, synthesizing
//!   [`OperationFailed`] if nothing was captured. Code that never looks at the error
//!   never allocates it.
//! - Two failures are always equal to each other, whatever their causes; two ok
//!   outcomes are equal iff their values are. Hashing follows the same rule.
//! - Outcomes compose like booleans over their ok-flags (see [`Truthy`]); composing
//!   never merges values or synthesizes errors.
//!
//! [`TypedOutcome<T, E>`](TypedOutcome) is the most general arity and narrows losslessly into
//! [`Outcome<T>`](Outcome) (error type widened to a dynamic [`ErrorHandle`]) and
//! [`Status`] (value dropped). There is no automatic widening in the other
//! direction.

#![warn(missing_docs)]

pub mod error;
pub mod iter;
pub mod status;
pub mod truthy;
pub mod typed;
pub mod value;

#[doc(inline)]
pub use error::{ErrorHandle, OperationFailed};
#[doc(inline)]
pub use status::Status;
#[doc(inline)]
pub use truthy::Truthy;
#[doc(inline)]
pub use typed::TypedOutcome;
#[doc(inline)]
pub use value::Outcome;
