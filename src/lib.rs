//! A small value-type library for representing the outcome of fallible operations
//! without unwinding: [`Status`](outcome::Status), [`Outcome<T>`](outcome::Outcome) and
//! [`TypedOutcome<T, E>`](outcome::TypedOutcome).
//!
//! # Purpose
//! [`Result`] already covers most fallible code, but it forces a decision about the
//! error type at every boundary and makes "did it work" checks noisier than they need
//! to be. The types here model an outcome as a value that behaves like a boolean:
//! it can be combined with `&`, `|` and `^` across arities without unwrapping, it
//! compares equal to a raw value when ok, and any two failures compare equal to each
//! other regardless of what went wrong. The failure cause is attached lazily - code
//! that only ever asks "ok or not" never pays for an error allocation.
//!
//! # Error Handling
//! An outcome never panics from construction, comparison, composition or projection.
//! The only sanctioned escape hatches back into panic-based flow are the `throw`
//! methods, which panic with the failure's own message. Code that wants `?` instead
//! uses `into_result`.
//!
//! Concrete error types in this crate are plain structs implementing
//! [`Error`](std::error::Error), derived with `derive_more`.
//!
//! # Dependencies
//! `derive_more` removes the repetitive parts of writing error types and state
//! enums. `futures` is only pulled in by the `async` feature, for the asynchronous
//! disposal helper.
//!
//! # Features
//! - `invoke`: panic-capturing invocation utilities ([`invoke`]).
//! - `dispose`: scoped-disposal helpers ([`dispose`]).
//! - `async`: asynchronous disposal on top of `dispose` (adds `futures`).

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::missing_const_for_fn)]
#![allow(clippy::module_inception)]

pub mod outcome;

#[cfg(feature = "dispose")]
pub mod dispose;
#[cfg(feature = "invoke")]
pub mod invoke;

pub(crate) mod util;
