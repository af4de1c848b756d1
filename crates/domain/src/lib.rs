//! # Argus Domain
//!
//! Business domain types and models for Argus.
//!
//! This crate contains:
//! - Domain data types (job ids, encryption pool ids)
//! - Domain error types and Result definitions
//! - Configuration structures for the scheduling core
//!
//! ## Architecture
//! - No dependencies on other Argus crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::{SchedulerConfig, DEFAULT_MINIMUM_SUSPEND_DURATION_MILLIS};
pub use errors::{ArgusError, Result};
pub use types::{EncryptionPoolId, EncryptionPoolIds, JobId};
