//! Per-call state handed to consultants and callbacks.

use std::collections::HashMap;

use serde_json::Value;

/// Mutable state for one `execute_resilient` invocation.
///
/// Created fresh per call and mutated only by the executor during the
/// retry loop; consultants and callbacks see it by reference. The scratch
/// store lets consultants (and the caller's callback) communicate within
/// one call, e.g. a consultant marking that a login must be refreshed
/// before the next attempt.
#[derive(Debug)]
pub struct ResilienceContext<E> {
    current_error: Option<E>,
    retries_done: u32,
    scratch: HashMap<String, Value>,
}

impl<E> ResilienceContext<E> {
    pub(crate) fn new() -> Self {
        Self { current_error: None, retries_done: 0, scratch: HashMap::with_capacity(1) }
    }

    /// The error of the most recent failed attempt, `None` before the
    /// first failure.
    pub fn current_error(&self) -> Option<&E> {
        self.current_error.as_ref()
    }

    /// Number of retries already granted within this call. Starts at 0
    /// and is incremented only when a retry proposal is accepted.
    pub fn already_done_retries(&self) -> u32 {
        self.retries_done
    }

    /// Store a scratch value under `key`, replacing any previous value.
    pub fn set_value(&mut self, key: impl Into<String>, value: Value) {
        self.scratch.insert(key.into(), value);
    }

    /// Look up a scratch value previously stored under `key`.
    pub fn value_of(&self, key: &str) -> Option<&Value> {
        self.scratch.get(key)
    }

    pub(crate) fn record_failure(&mut self, error: E) {
        self.current_error = Some(error);
    }

    pub(crate) fn mark_retry(&mut self) {
        self.retries_done += 1;
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for resilience::context.
    use serde_json::json;

    use super::*;

    /// Validates `ResilienceContext::new` behavior for the fresh context
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures `context.current_error().is_none()` evaluates to true.
    /// - Confirms `context.already_done_retries()` equals `0`.
    #[test]
    fn test_fresh_context_is_empty() {
        let context: ResilienceContext<std::io::Error> = ResilienceContext::new();

        assert!(context.current_error().is_none());
        assert_eq!(context.already_done_retries(), 0);
    }

    /// Validates `ResilienceContext::record_failure` behavior for the
    /// current error replacement scenario.
    ///
    /// Assertions:
    /// - Confirms the latest recorded error is the one visible.
    #[test]
    fn test_record_failure_replaces_current_error() {
        let mut context: ResilienceContext<String> = ResilienceContext::new();

        context.record_failure("first".to_string());
        context.record_failure("second".to_string());

        assert_eq!(context.current_error(), Some(&"second".to_string()));
    }

    /// Validates `ResilienceContext::set_value` behavior for the scratch
    /// store scenario.
    ///
    /// Assertions:
    /// - Confirms `context.value_of("login.refresh")` equals the stored value.
    /// - Ensures an unknown key yields `None`.
    #[test]
    fn test_scratch_store_round_trip() {
        let mut context: ResilienceContext<String> = ResilienceContext::new();

        context.set_value("login.refresh", json!(true));

        assert_eq!(context.value_of("login.refresh"), Some(&json!(true)));
        assert!(context.value_of("unknown").is_none());
    }

    /// Validates `ResilienceContext::mark_retry` behavior for the retry
    /// counter scenario.
    ///
    /// Assertions:
    /// - Confirms `context.already_done_retries()` equals `2` after two
    ///   granted retries.
    #[test]
    fn test_mark_retry_increments_counter() {
        let mut context: ResilienceContext<String> = ResilienceContext::new();

        context.mark_retry();
        context.mark_retry();

        assert_eq!(context.already_done_retries(), 2);
    }
}
