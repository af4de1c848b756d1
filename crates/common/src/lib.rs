//! Modular common utilities shared across Argus crates.
//!
//! Currently this crate carries the generic resilience library used to
//! wrap every call against an unreliable external system (scanner
//! adapters, HTTP backends) with retry and fail-fast behavior.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod resilience;

// Re-export commonly used types and traits for convenience
pub use resilience::{
    CancellationToken, Clock, FallthroughConsultant, MockClock, ResilienceCallback,
    ResilienceConsultant, ResilienceContext, ResilienceError, ResilienceProposal,
    ResilienceResult, ResilientActionExecutor, RetryConsultant, SystemClock,
};
