//! Time-boxed fail-fast state shared by all calls through one executor.

use std::time::{Duration, Instant};

/// Fallthrough window state.
///
/// Armed means: `last_error` is set and `now` is before the stored end
/// instant. Checking is lazily self-clearing: once the window has
/// expired, the check itself resets the state; there is no separate timer
/// thread. Arming always overwrites any previous state (last writer
/// wins, windows do not stack).
///
/// The owning executor guards this state with a single mutex; the
/// check-then-clear is a compound operation and must not be attempted
/// lock-free.
#[derive(Debug)]
pub(crate) struct FallthroughState<E> {
    last_error: Option<E>,
    info: Option<String>,
    fall_through_end: Option<Instant>,
}

impl<E: Clone> FallthroughState<E> {
    pub(crate) fn new() -> Self {
        Self { last_error: None, info: None, fall_through_end: None }
    }

    /// Arm the window: reject calls until `now + window` with `error`.
    pub(crate) fn arm(&mut self, error: E, info: String, now: Instant, window: Duration) {
        self.last_error = Some(error);
        self.info = Some(info);
        self.fall_through_end = Some(now + window);
    }

    /// Gate check. While armed, returns the stored error together with the
    /// info label and the remaining window. An expired window is cleared
    /// as a side effect and `None` is returned.
    pub(crate) fn check(&mut self, now: Instant) -> Option<(E, String, Duration)> {
        let end = self.fall_through_end?;
        let error = self.last_error.as_ref()?;

        if now < end {
            let info = self.info.clone().unwrap_or_default();
            return Some((error.clone(), info, end - now));
        }

        // Window expired: reset
        self.last_error = None;
        self.info = None;
        self.fall_through_end = None;
        None
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for resilience::fallthrough.
    use super::*;

    /// Validates `FallthroughState::check` behavior for the unarmed state
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures `state.check(now).is_none()` evaluates to true.
    #[test]
    fn test_unarmed_state_lets_calls_pass() {
        let mut state: FallthroughState<String> = FallthroughState::new();

        assert!(state.check(Instant::now()).is_none());
    }

    /// Validates `FallthroughState::arm` behavior for the armed window
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms the stored error is returned while inside the window.
    /// - Confirms the remaining window shrinks with later check instants.
    #[test]
    fn test_armed_state_returns_stored_error() {
        let mut state = FallthroughState::new();
        let now = Instant::now();

        state.arm("boom".to_string(), "backend down".to_string(), now, Duration::from_secs(1));

        let (error, info, remaining) =
            state.check(now + Duration::from_millis(100)).unwrap();
        assert_eq!(error, "boom");
        assert_eq!(info, "backend down");
        assert_eq!(remaining, Duration::from_millis(900));
    }

    /// Validates `FallthroughState::check` behavior for the lazy
    /// self-clearing scenario.
    ///
    /// Assertions:
    /// - Ensures the first check after expiry returns `None`.
    /// - Ensures the state stays cleared for checks inside the old window.
    #[test]
    fn test_expired_window_clears_itself() {
        let mut state = FallthroughState::new();
        let now = Instant::now();

        state.arm("boom".to_string(), "down".to_string(), now, Duration::from_secs(1));

        assert!(state.check(now + Duration::from_secs(2)).is_none());
        // cleared, even a check back inside the old window passes
        assert!(state.check(now + Duration::from_millis(500)).is_none());
    }

    /// Validates `FallthroughState::arm` behavior for the last writer wins
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms re-arming replaces error, info and end instant.
    #[test]
    fn test_rearming_overwrites_previous_window() {
        let mut state = FallthroughState::new();
        let now = Instant::now();

        state.arm("first".to_string(), "a".to_string(), now, Duration::from_secs(10));
        state.arm("second".to_string(), "b".to_string(), now, Duration::from_secs(1));

        let (error, info, _) = state.check(now + Duration::from_millis(10)).unwrap();
        assert_eq!(error, "second");
        assert_eq!(info, "b");
        assert!(state.check(now + Duration::from_secs(2)).is_none());
    }
}
