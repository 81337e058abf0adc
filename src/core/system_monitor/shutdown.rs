use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cloneable stop request shared between the sampling loop and the Ctrl+C handler.
///
/// Waiting on it is an interruptible sleep: [`ShutdownSignal::wait_timeout`]
/// returns as soon as [`ShutdownSignal::trigger`] is called from any clone.
#[derive(Clone, Default)]
pub struct ShutdownSignal {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    requested: Mutex<bool>,
    cvar: Condvar,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown and wake every waiter
    pub fn trigger(&self) {
        let mut requested = self.inner.requested.lock();
        *requested = true;
        self.inner.cvar.notify_all();
    }

    pub fn is_triggered(&self) -> bool {
        *self.inner.requested.lock()
    }

    /// Sleep for `timeout` unless shutdown is requested first.
    ///
    /// Returns `true` if shutdown was requested.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        // Past the representable range the wait only ends on trigger
        let deadline = Instant::now().checked_add(timeout);
        let mut requested = self.inner.requested.lock();

        // Loop guards against spurious wake-ups
        while !*requested {
            match deadline {
                Some(deadline) => {
                    if self.inner.cvar.wait_until(&mut requested, deadline).timed_out() {
                        break;
                    }
                }
                None => self.inner.cvar.wait(&mut requested),
            }
        }

        *requested
    }
}

impl std::fmt::Debug for ShutdownSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShutdownSignal")
            .field("triggered", &self.is_triggered())
            .finish()
    }
}
