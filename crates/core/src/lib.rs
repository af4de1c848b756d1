//! # Argus Core
//!
//! Business logic for the scan orchestration platform: deciding which
//! queued job runs next under project isolation, module-group isolation
//! and encryption-key-rotation constraints.
//!
//! Persistence and the periodic trigger live behind the port traits in
//! [`scheduling::ports`]; this crate only depends on `argus-domain`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod scheduling;

pub use scheduling::ports::{EncryptionPoolProvider, SchedulerJobRepository};
pub use scheduling::provider::SchedulerStrategyProvider;
pub use scheduling::resolver::SchedulerNextJobResolver;
pub use scheduling::strategy::SchedulerStrategy;
