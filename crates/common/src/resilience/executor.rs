//! Generic retry/fallthrough engine wrapping one fallible action.

use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::cancellation::CancellationToken;
use super::clock::{Clock, SystemClock};
use super::consultant::ResilienceConsultant;
use super::context::ResilienceContext;
use super::fallthrough::FallthroughState;
use super::proposal::ResilienceProposal;

/// Errors surfaced by [`ResilientActionExecutor::execute_resilient`].
///
/// The action's own error is never wrapped in an opaque message: the
/// `Action` variant is transparent and preserves it unchanged, whether it
/// was propagated directly, after an exhausted retry budget, or out of an
/// armed fallthrough window.
#[derive(Debug, Error)]
pub enum ResilienceError<E> {
    /// The action failed and the failure was propagated.
    #[error(transparent)]
    Action(E),

    /// A backoff wait was interrupted by cancellation; the action was not
    /// retried.
    #[error("Resilient action cancelled while waiting before retry")]
    Interrupted,
}

impl<E> ResilienceError<E> {
    /// Consume the error and return the action error, if any.
    pub fn into_action_error(self) -> Option<E> {
        match self {
            Self::Action(error) => Some(error),
            Self::Interrupted => None,
        }
    }

    /// Whether this error is a cancelled backoff wait.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

/// Result type for resilient executions
pub type ResilienceResult<R, E> = Result<R, ResilienceError<E>>;

/// Hook invoked synchronously just before each retried attempt.
pub trait ResilienceCallback<E>: Send {
    /// Called after the backoff wait, immediately before the action is
    /// re-invoked. The context can be inspected and its scratch store
    /// mutated (e.g. to refresh a login for the next attempt).
    fn before_retry(&mut self, context: &mut ResilienceContext<E>);
}

/// Executes one kind of fallible action with resilience, guided by
/// registered consultants.
///
/// One executor instance must always be used for the same kind of action.
/// For dedicated actions you need different executors: when connecting to
/// two different servers, a fallthrough armed for server 1 must not
/// reject calls against server 2.
///
/// The executor blocks the calling thread during backoff waits. Each job
/// execution owns a dedicated worker thread, so blocking only delays that
/// job, never the scheduler. Cancelling the executor's
/// [`CancellationToken`] wakes a blocked wait and fails the call with
/// [`ResilienceError::Interrupted`].
pub struct ResilientActionExecutor<E, C: Clock = SystemClock> {
    consultants: Vec<Box<dyn ResilienceConsultant<E>>>,
    fallthrough: Mutex<FallthroughState<E>>,
    cancellation: CancellationToken,
    clock: C,
}

impl<E> ResilientActionExecutor<E>
where
    E: std::error::Error + Clone + Send + Sync + 'static,
{
    /// Create an executor using the real system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<E> Default for ResilientActionExecutor<E>
where
    E: std::error::Error + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C> ResilientActionExecutor<E, C>
where
    E: std::error::Error + Clone + Send + Sync + 'static,
    C: Clock,
{
    /// Create an executor with a custom clock (useful for testing the
    /// fallthrough window).
    pub fn with_clock(clock: C) -> Self {
        Self {
            consultants: Vec::new(),
            fallthrough: Mutex::new(FallthroughState::new()),
            cancellation: CancellationToken::new(),
            clock,
        }
    }

    /// Register a consultant. Order is significant: consultants are asked
    /// in registration order and the first proposal wins, so register
    /// specific consultants before generic fallback ones.
    pub fn add(&mut self, consultant: impl ResilienceConsultant<E> + 'static) {
        self.consultants.push(Box::new(consultant));
    }

    /// A handle to this executor's cancellation token. Cancelling it wakes
    /// any backoff wait currently blocked in `execute_resilient`.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Execute `action` with resilient behavior and no callback.
    pub fn execute_resilient<R, A>(&self, action: A) -> ResilienceResult<R, E>
    where
        A: FnMut() -> Result<R, E>,
    {
        self.run(action, None)
    }

    /// Execute `action` with resilient behavior, invoking `callback`
    /// before every retried attempt.
    pub fn execute_resilient_with_callback<R, A>(
        &self,
        action: A,
        callback: &mut dyn ResilienceCallback<E>,
    ) -> ResilienceResult<R, E>
    where
        A: FnMut() -> Result<R, E>,
    {
        self.run(action, Some(callback))
    }

    fn run<R, A>(
        &self,
        mut action: A,
        mut callback: Option<&mut dyn ResilienceCallback<E>>,
    ) -> ResilienceResult<R, E>
    where
        A: FnMut() -> Result<R, E>,
    {
        // Fallthrough gate: while armed, the stored error is raised and
        // the action is not invoked at all.
        if let Some(stored) = self.check_fallthrough_gate() {
            return Err(ResilienceError::Action(stored));
        }

        let mut context = ResilienceContext::new();

        loop {
            let error = match action() {
                Ok(result) => return Ok(result),
                Err(error) => error,
            };

            debug!(error = %error, "Handling failed resilient action");
            context.record_failure(error.clone());

            let Some(proposal) = self.first_proposal_from_consultants(&context) else {
                info!(
                    consultants = self.consultants.len(),
                    error = %error,
                    "None of the consultants gave any proposal, propagating error"
                );
                return Err(ResilienceError::Action(error));
            };

            match proposal {
                ResilienceProposal::Retry {
                    maximum_amount_of_retries,
                    wait_before_retry,
                    info,
                } => {
                    let already_done_retries = context.already_done_retries();
                    if already_done_retries >= maximum_amount_of_retries {
                        warn!(
                            retries = already_done_retries,
                            maximum = maximum_amount_of_retries,
                            info = %info,
                            "Maximum retry amount reached, propagating error"
                        );
                        return Err(ResilienceError::Action(error));
                    }

                    context.mark_retry();
                    debug!(wait = ?wait_before_retry, info = %info, "Waiting before retry");

                    if self.cancellation.wait_for(wait_before_retry) {
                        info!(info = %info, "Retry wait cancelled, giving up");
                        return Err(ResilienceError::Interrupted);
                    }
                    info!(
                        retry = context.already_done_retries(),
                        maximum = maximum_amount_of_retries,
                        info = %info,
                        "Retrying resilient action"
                    );

                    if let Some(callback) = callback.as_mut() {
                        callback.before_retry(&mut context);
                    }
                }
                ResilienceProposal::Fallthrough { fall_through_window, info } => {
                    info!(
                        window = ?fall_through_window,
                        info = %info,
                        "Fallthrough activated, rejecting further calls with the same error"
                    );
                    self.arm_fallthrough(error.clone(), info, fall_through_window);
                    // The current call always fails once fallthrough is armed
                    return Err(ResilienceError::Action(error));
                }
            }
        }
    }

    fn first_proposal_from_consultants(
        &self,
        context: &ResilienceContext<E>,
    ) -> Option<ResilienceProposal> {
        self.consultants.iter().find_map(|consultant| consultant.consult_for(context))
    }

    fn check_fallthrough_gate(&self) -> Option<E> {
        let mut state = self.fallthrough.lock().unwrap_or_else(PoisonError::into_inner);
        let (error, info, remaining) = state.check(self.clock.now())?;
        info!(
            remaining = ?remaining,
            info = %info,
            "Fallthrough active, raising stored error without invoking action"
        );
        Some(error)
    }

    fn arm_fallthrough(&self, error: E, info: String, window: std::time::Duration) {
        let mut state = self.fallthrough.lock().unwrap_or_else(PoisonError::into_inner);
        state.arm(error, info, self.clock.now(), window);
    }
}
