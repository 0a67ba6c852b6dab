use derive_more::{Display, Error};

/// The error captured when an invoked operation panics.
///
/// Rust panics carry an arbitrary payload rather than an error object, so the
/// payload's message is extracted and kept; it is the panic's own text, verbatim,
/// when the panic was raised with a literal or a formatted string.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{message}")]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    pub(crate) const fn new(message: String) -> CaughtPanic {
        CaughtPanic { message }
    }

    /// The message of the captured panic.
    pub fn message(&self) -> &str {
        &self.message
    }
}
