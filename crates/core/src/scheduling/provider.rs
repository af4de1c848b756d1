//! Strategy selection from configuration.

use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::SchedulerJobRepository;
use super::strategy::{
    FirstComeFirstServeStrategy, OnlyOneScanPerProjectAndModuleGroupStrategy,
    OnlyOneScanPerProjectStrategy, SchedulerStrategy, FIRST_COME_FIRST_SERVE_ID,
    ONLY_ONE_SCAN_PER_PROJECT_AND_MODULE_GROUP_ID, ONLY_ONE_SCAN_PER_PROJECT_ID,
};

/// Builds the active [`SchedulerStrategy`] from a configured identifier.
///
/// The mapping is a fixed lookup table. An absent, empty or unrecognized
/// identifier resolves to first come first serve: misconfiguration must
/// never halt scheduling, so the fallback is permissive and only logged.
pub struct SchedulerStrategyProvider {
    repository: Arc<dyn SchedulerJobRepository>,
    strategy_identifier: Option<String>,
}

impl SchedulerStrategyProvider {
    /// Create a provider without a configured identifier (resolves to the
    /// first come first serve default until one is set).
    pub fn new(repository: Arc<dyn SchedulerJobRepository>) -> Self {
        Self { repository, strategy_identifier: None }
    }

    /// Set or clear the configured strategy identifier.
    pub fn set_strategy_identifier(&mut self, identifier: Option<String>) {
        self.strategy_identifier = identifier;
    }

    /// Build the strategy for the configured identifier.
    pub fn build(&self) -> Arc<dyn SchedulerStrategy> {
        let identifier = self.strategy_identifier.as_deref().unwrap_or("").trim();

        let strategy: Arc<dyn SchedulerStrategy> = match identifier {
            ONLY_ONE_SCAN_PER_PROJECT_ID => {
                Arc::new(OnlyOneScanPerProjectStrategy::new(Arc::clone(&self.repository)))
            }
            ONLY_ONE_SCAN_PER_PROJECT_AND_MODULE_GROUP_ID => Arc::new(
                OnlyOneScanPerProjectAndModuleGroupStrategy::new(Arc::clone(&self.repository)),
            ),
            FIRST_COME_FIRST_SERVE_ID => {
                Arc::new(FirstComeFirstServeStrategy::new(Arc::clone(&self.repository)))
            }
            "" => {
                debug!("No scheduler strategy configured, using first come first serve");
                Arc::new(FirstComeFirstServeStrategy::new(Arc::clone(&self.repository)))
            }
            unknown => {
                warn!(
                    identifier = unknown,
                    "Unknown scheduler strategy identifier, falling back to first come first serve"
                );
                Arc::new(FirstComeFirstServeStrategy::new(Arc::clone(&self.repository)))
            }
        };

        debug!(strategy = strategy.identifier(), "Scheduler strategy built");
        strategy
    }
}
