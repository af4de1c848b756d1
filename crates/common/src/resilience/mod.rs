//! Resilience patterns for fault tolerance when calling external systems
//!
//! Every call to an unreliable downstream system (a scanner adapter, an
//! HTTP backend) is wrapped by a [`ResilientActionExecutor`]. On failure
//! the executor asks its registered [`ResilienceConsultant`]s how to
//! proceed; a consultant answers with a [`ResilienceProposal`]:
//!
//! - **Retry**: re-invoke the action after a fixed wait, bounded by a
//!   retry budget.
//! - **Fallthrough**: fail the current call and arm a time-boxed
//!   fail-fast window during which subsequent calls through the same
//!   executor are rejected immediately with the stored error, without
//!   invoking the action. This protects callers from repeatedly paying a
//!   long timeout cost during a known outage.
//!
//! One executor instance must be dedicated to exactly one logical
//! external target. Sharing an executor across unrelated targets would
//! incorrectly fail-fast unrelated calls (the fallthrough window is
//! per-executor state).

pub mod cancellation;
pub mod clock;
pub mod constants;
pub mod consultant;
pub mod context;
pub mod executor;
mod fallthrough;
pub mod proposal;

pub use cancellation::CancellationToken;
pub use clock::{Clock, MockClock, SystemClock};
pub use consultant::{FallthroughConsultant, ResilienceConsultant, RetryConsultant};
pub use context::ResilienceContext;
pub use executor::{
    ResilienceCallback, ResilienceError, ResilienceResult, ResilientActionExecutor,
};
pub use proposal::ResilienceProposal;
