//! Cancellation support for blocking backoff waits.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Cooperative cancellation token for blocking retry waits.
///
/// The resilient executor blocks its worker thread while waiting before a
/// retry. A shutdown path (or a job cancellation) calls [`cancel`] on the
/// executor's token, which wakes any blocked wait immediately; the
/// executor then fails the call with a distinguishable cancellation error
/// instead of retrying.
///
/// Cloning the token shares the underlying state.
///
/// [`cancel`]: CancellationToken::cancel
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: Mutex<bool>,
    condvar: Condvar,
}

impl CancellationToken {
    /// Create a new, not yet cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the token, waking every wait currently blocked on it.
    ///
    /// Cancellation is permanent: later waits return immediately.
    pub fn cancel(&self) {
        let mut cancelled =
            self.inner.cancelled.lock().unwrap_or_else(PoisonError::into_inner);
        *cancelled = true;
        self.inner.condvar.notify_all();
    }

    /// Whether the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        *self.inner.cancelled.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block the calling thread for `duration` or until cancelled.
    ///
    /// Returns `true` if the wait ended because of cancellation.
    pub fn wait_for(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        let mut cancelled =
            self.inner.cancelled.lock().unwrap_or_else(PoisonError::into_inner);

        loop {
            if *cancelled {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let (guard, _timeout) = self
                .inner
                .condvar
                .wait_timeout(cancelled, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            cancelled = guard;
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for resilience::cancellation.
    use std::thread;

    use super::*;

    /// Validates `CancellationToken::wait_for` behavior for the uncancelled
    /// timed wait scenario.
    ///
    /// Assertions:
    /// - Ensures `!token.wait_for(..)` evaluates to true (wait ran out).
    /// - Ensures at least the requested duration elapsed.
    #[test]
    fn test_wait_for_times_out_when_not_cancelled() {
        let token = CancellationToken::new();
        let start = Instant::now();

        let cancelled = token.wait_for(Duration::from_millis(20));

        assert!(!cancelled);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    /// Validates `CancellationToken::cancel` behavior for the wake blocked
    /// waiter scenario.
    ///
    /// Assertions:
    /// - Ensures the blocked wait returns `true` well before its deadline.
    #[test]
    fn test_cancel_wakes_blocked_wait() {
        let token = CancellationToken::new();
        let waiter = token.clone();

        let handle = thread::spawn(move || waiter.wait_for(Duration::from_secs(10)));

        // Give the waiter a moment to block
        thread::sleep(Duration::from_millis(20));
        token.cancel();

        let start = Instant::now();
        assert!(handle.join().unwrap());
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    /// Validates `CancellationToken::wait_for` behavior for the already
    /// cancelled scenario.
    ///
    /// Assertions:
    /// - Ensures `token.is_cancelled()` evaluates to true.
    /// - Ensures a subsequent wait returns immediately with `true`.
    #[test]
    fn test_cancelled_token_short_circuits_wait() {
        let token = CancellationToken::new();
        token.cancel();

        assert!(token.is_cancelled());
        assert!(token.wait_for(Duration::from_secs(10)));
    }
}
