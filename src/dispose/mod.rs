//! Scoped-disposal helpers with best-effort semantics.
//!
//! [`Dispose`] (and, with the `async` feature, [`AsyncDispose`]) is an explicit
//! capability a type opts into; the [`dispose`]/[`dispose_async`] helpers run it
//! while guaranteeing that a panic raised during cleanup never escapes.

#![warn(missing_docs)]

mod dispose;
mod tests;

#[cfg(feature = "async")]
pub use dispose::{AsyncDispose, SyncDispose, dispose_async};
pub use dispose::{Dispose, dispose};
