//! Consultant trait and stock predicate-based consultants.

use std::sync::Arc;
use std::time::Duration;

use super::constants::{
    DEFAULT_FALLTHROUGH_WINDOW, DEFAULT_MAXIMUM_AMOUNT_OF_RETRIES, DEFAULT_WAIT_BEFORE_RETRY,
};
use super::context::ResilienceContext;
use super::proposal::ResilienceProposal;

/// Type alias for error predicate function to reduce complexity
type ErrorPredicate<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// Pluggable policy inspecting a failure and proposing how to handle it.
///
/// Multiple consultants may be registered on one executor; they are asked
/// in registration order and the first proposal wins, so more specific
/// consultants should be registered before generic fallback ones.
/// Consultants are consulted fresh on every failure, never cached.
pub trait ResilienceConsultant<E>: Send + Sync {
    /// Inspect the context of the current failure and return a proposal,
    /// or `None` when this consultant has nothing to say about it.
    fn consult_for(&self, context: &ResilienceContext<E>) -> Option<ResilienceProposal>;
}

/// Stock consultant proposing a bounded retry for matching errors.
///
/// Holds its own configuration, e.g. "retry network errors up to 3 times
/// with 500ms backoff".
pub struct RetryConsultant<E> {
    info: String,
    maximum_amount_of_retries: u32,
    wait_before_retry: Duration,
    applies_to: ErrorPredicate<E>,
}

impl<E> RetryConsultant<E> {
    /// Create a retry consultant for errors matching `applies_to`.
    pub fn new(
        info: impl Into<String>,
        maximum_amount_of_retries: u32,
        wait_before_retry: Duration,
        applies_to: impl Fn(&E) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            info: info.into(),
            maximum_amount_of_retries,
            wait_before_retry,
            applies_to: Arc::new(applies_to),
        }
    }

    /// Create a retry consultant with the documented default budget and
    /// wait.
    pub fn with_defaults(
        info: impl Into<String>,
        applies_to: impl Fn(&E) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::new(info, DEFAULT_MAXIMUM_AMOUNT_OF_RETRIES, DEFAULT_WAIT_BEFORE_RETRY, applies_to)
    }
}

impl<E> ResilienceConsultant<E> for RetryConsultant<E>
where
    E: Send + Sync,
{
    fn consult_for(&self, context: &ResilienceContext<E>) -> Option<ResilienceProposal> {
        let error = context.current_error()?;
        if (self.applies_to)(error) {
            Some(ResilienceProposal::retry(
                self.info.clone(),
                self.maximum_amount_of_retries,
                self.wait_before_retry,
            ))
        } else {
            None
        }
    }
}

/// Stock consultant arming a fail-fast window for matching errors.
///
/// Used for systemic failures where every further call against the same
/// target would just pay the same timeout again, e.g. "backend completely
/// unreachable".
pub struct FallthroughConsultant<E> {
    info: String,
    fall_through_window: Duration,
    applies_to: ErrorPredicate<E>,
}

impl<E> FallthroughConsultant<E> {
    /// Create a fallthrough consultant for errors matching `applies_to`.
    pub fn new(
        info: impl Into<String>,
        fall_through_window: Duration,
        applies_to: impl Fn(&E) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self { info: info.into(), fall_through_window, applies_to: Arc::new(applies_to) }
    }

    /// Create a fallthrough consultant with the documented default window.
    pub fn with_defaults(
        info: impl Into<String>,
        applies_to: impl Fn(&E) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::new(info, DEFAULT_FALLTHROUGH_WINDOW, applies_to)
    }
}

impl<E> ResilienceConsultant<E> for FallthroughConsultant<E>
where
    E: Send + Sync,
{
    fn consult_for(&self, context: &ResilienceContext<E>) -> Option<ResilienceProposal> {
        let error = context.current_error()?;
        if (self.applies_to)(error) {
            Some(ResilienceProposal::fallthrough(self.info.clone(), self.fall_through_window))
        } else {
            None
        }
    }
}
