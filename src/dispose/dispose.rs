use std::panic::{self, AssertUnwindSafe};

/// An opt-in capability for values that need an explicit cleanup step beyond
/// [`Drop`] - flushing, handshakes, releasing external handles.
///
/// Implementors are consumed by disposal; [`dispose`] additionally guarantees that
/// a panic raised during cleanup never propagates.
pub trait Dispose {
    /// Performs the cleanup, consuming the value.
    fn dispose(self);
}

/// Disposes `value`, swallowing any panic raised during cleanup.
///
/// Disposal is best-effort by contract: a secondary failure while releasing a
/// resource must never displace the primary control flow, so nothing is captured,
/// reported or re-raised.
///
/// # Examples
/// ```
/// # use outcome_types::dispose::{dispose, Dispose};
/// struct Session;
/// impl Dispose for Session {
///     fn dispose(self) {
///         panic!("remote already closed the session");
///     }
/// }
///
/// dispose(Session); // the panic does not escape
/// ```
pub fn dispose(value: impl Dispose) {
    let _ = panic::catch_unwind(AssertUnwindSafe(move || value.dispose()));
}

/// The asynchronous counterpart of [`Dispose`].
///
/// Implement this when the cleanup genuinely needs to await; types whose cleanup is
/// synchronous stay on [`Dispose`] and opt into async contexts through
/// [`SyncDispose`]. (A blanket impl over every `Dispose` type would be the obvious
/// fallback, but it would make any direct `AsyncDispose` impl a coherence error.)
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait AsyncDispose {
    /// Performs the cleanup, consuming the value.
    async fn dispose_async(self);
}

/// Adapts a [`Dispose`] into an [`AsyncDispose`] that completes inline: the
/// synchronous fallback for async contexts.
#[cfg(feature = "async")]
#[derive(Debug)]
pub struct SyncDispose<D: Dispose>(pub D);

#[cfg(feature = "async")]
impl<D: Dispose> AsyncDispose for SyncDispose<D> {
    async fn dispose_async(self) {
        self.0.dispose();
    }
}

/// Disposes `value` asynchronously, swallowing any panic raised during cleanup,
/// with the same discipline as [`dispose`].
#[cfg(feature = "async")]
pub async fn dispose_async(value: impl AsyncDispose) {
    use futures::FutureExt;

    let _ = AssertUnwindSafe(value.dispose_async()).catch_unwind().await;
}
