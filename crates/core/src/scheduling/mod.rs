//! Job scheduling: pluggable next-job strategies and the resolver that
//! applies suspended-job priority on top of them.

pub mod ports;
pub mod provider;
pub mod resolver;
pub mod strategy;

pub use ports::{EncryptionPoolProvider, SchedulerJobRepository};
pub use provider::SchedulerStrategyProvider;
pub use resolver::SchedulerNextJobResolver;
pub use strategy::{
    FirstComeFirstServeStrategy, OnlyOneScanPerProjectAndModuleGroupStrategy,
    OnlyOneScanPerProjectStrategy, SchedulerStrategy,
};
