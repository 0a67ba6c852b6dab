#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

struct Session {
    closed: Rc<Cell<bool>>,
    panics: bool,
}

impl Dispose for Session {
    fn dispose(self) {
        self.closed.set(true);

        if self.panics {
            panic!("remote already closed the session");
        }
    }
}

#[test]
fn test_dispose_runs_cleanup() {
    let closed = Rc::new(Cell::new(false));

    dispose(Session {
        closed: closed.clone(),
        panics: false,
    });

    assert!(closed.get(), "Dispose should invoke the cleanup.");
}

#[test]
fn test_dispose_swallows_panic() {
    let closed = Rc::new(Cell::new(false));

    dispose(Session {
        closed: closed.clone(),
        panics: true,
    });

    assert!(
        closed.get(),
        "Cleanup should have run up to the point of the panic."
    );
    // Reaching this assert at all proves the panic did not escape.
}

#[cfg(feature = "async")]
mod async_dispose {
    use futures::executor::block_on;

    use super::*;

    struct Stream {
        flushed: Rc<Cell<bool>>,
        panics: bool,
    }

    impl AsyncDispose for Stream {
        async fn dispose_async(self) {
            futures::future::ready(()).await;
            self.flushed.set(true);

            if self.panics {
                panic!("flush failed");
            }
        }
    }

    #[test]
    fn test_async_dispose_awaits_cleanup() {
        let flushed = Rc::new(Cell::new(false));

        block_on(dispose_async(Stream {
            flushed: flushed.clone(),
            panics: false,
        }));

        assert!(flushed.get(), "Async dispose should await the cleanup.");
    }

    #[test]
    fn test_async_dispose_swallows_panic() {
        let flushed = Rc::new(Cell::new(false));

        block_on(dispose_async(Stream {
            flushed: flushed.clone(),
            panics: true,
        }));

        assert!(flushed.get());
    }

    #[test]
    fn test_sync_fallback() {
        let closed = Rc::new(Cell::new(false));

        // Session only implements Dispose; SyncDispose carries it into the async
        // path.
        block_on(dispose_async(SyncDispose(Session {
            closed: closed.clone(),
            panics: true,
        })));

        assert!(
            closed.get(),
            "A Dispose-only type should fall back to synchronous cleanup."
        );
    }
}
