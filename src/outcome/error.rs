use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use crate::util::fmt::short_type_name;

/// A shareable handle to the error behind a failed outcome.
///
/// Outcomes are copied by value, but copies of the same failure refer to the same
/// error object; [`Arc`] keeps that sharing cheap and preserves the identity of a
/// captured error across clones and narrowing conversions.
pub type ErrorHandle = Arc<dyn Error + Send + Sync + 'static>;

/// The error synthesized for a failure that captured no cause.
///
/// [`Status::failed`](super::Status::failed) and friends allocate nothing; this type
/// only comes into existence when such a failure is actually asked for its error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Operation Failed")]
pub struct OperationFailed;

/// A captured error together with the unqualified name of its concrete type.
///
/// The name is recorded at capture time because a `dyn Error` cannot recover it
/// later; it exists solely so failures can render as `Error(TypeName): message`.
#[derive(Debug, Clone)]
pub(crate) struct Cause {
    pub(crate) name: &'static str,
    pub(crate) error: ErrorHandle,
}

impl Cause {
    pub(crate) fn new<E: Error + Send + Sync + 'static>(error: E) -> Cause {
        Cause {
            name: short_type_name::<E>(),
            error: Arc::new(error),
        }
    }

    /// A fresh default cause. Called once per observation of an absent cause rather
    /// than memoized; failures compare equal regardless of identity, so handing out
    /// distinct default errors is harmless.
    pub(crate) fn unspecified() -> Cause {
        Cause::new(OperationFailed)
    }
}

impl Display for Cause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Error({}): {}", self.name, self.error)
    }
}
