//! Proposals returned by resilience consultants.

use std::time::Duration;

/// Immutable decision produced by a consultant for one failure.
///
/// A consultant that has nothing to propose returns `None` from
/// [`consult_for`] instead of a proposal; the executor then asks the next
/// registered consultant.
///
/// [`consult_for`]: super::ResilienceConsultant::consult_for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResilienceProposal {
    /// Retry the failed action after a fixed wait, bounded by a budget.
    Retry {
        /// Maximum number of retries granted by this proposal. The action
        /// is invoked at most `maximum_amount_of_retries + 1` times in
        /// total.
        maximum_amount_of_retries: u32,
        /// Time to wait before the retried attempt.
        wait_before_retry: Duration,
        /// Human-readable label used in logs.
        info: String,
    },
    /// Fail the current call and arm a time-boxed fail-fast window for
    /// all subsequent calls through the same executor.
    Fallthrough {
        /// How long calls are rejected without invoking the action.
        fall_through_window: Duration,
        /// Human-readable label used in logs.
        info: String,
    },
}

impl ResilienceProposal {
    /// Create a retry proposal.
    pub fn retry(
        info: impl Into<String>,
        maximum_amount_of_retries: u32,
        wait_before_retry: Duration,
    ) -> Self {
        Self::Retry { maximum_amount_of_retries, wait_before_retry, info: info.into() }
    }

    /// Create a fallthrough proposal.
    pub fn fallthrough(info: impl Into<String>, fall_through_window: Duration) -> Self {
        Self::Fallthrough { fall_through_window, info: info.into() }
    }

    /// The human-readable label of this proposal.
    pub fn info(&self) -> &str {
        match self {
            Self::Retry { info, .. } | Self::Fallthrough { info, .. } => info,
        }
    }
}
