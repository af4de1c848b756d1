//! Top-level "what runs next" decision.

use std::sync::Arc;

use argus_domain::{JobId, Result, SchedulerConfig};
use tracing::{debug, info};

use super::ports::{EncryptionPoolProvider, SchedulerJobRepository};
use super::strategy::SchedulerStrategy;

/// Resolves the next job to execute for one scheduler tick.
///
/// Suspended jobs strictly precede any strategy-selected job: a job that
/// was suspended for an encryption key rotation must be resumed before
/// new work is started. When the encryption pool provider reports an
/// empty set, no pool state is known yet and the resolver returns no job
/// at all; it neither queries suspended jobs nor delegates to the
/// strategy until a pool state is published.
pub struct SchedulerNextJobResolver {
    encryption_pool_provider: Arc<dyn EncryptionPoolProvider>,
    repository: Arc<dyn SchedulerJobRepository>,
    strategy: Arc<dyn SchedulerStrategy>,
    minimum_suspend_duration_millis: u64,
}

impl SchedulerNextJobResolver {
    /// Create a resolver for the given collaborators and configuration.
    pub fn new(
        encryption_pool_provider: Arc<dyn EncryptionPoolProvider>,
        repository: Arc<dyn SchedulerJobRepository>,
        strategy: Arc<dyn SchedulerStrategy>,
        config: &SchedulerConfig,
    ) -> Self {
        Self {
            encryption_pool_provider,
            repository,
            strategy,
            minimum_suspend_duration_millis: config.minimum_suspend_duration_millis,
        }
    }

    /// Resolve the id of the next job to execute, or `None` when nothing
    /// should run right now.
    pub async fn resolve_next_job_id(&self) -> Result<Option<JobId>> {
        let pool_ids = self.encryption_pool_provider.current_encryption_pool_ids().await?;

        if pool_ids.is_empty() {
            debug!("Encryption pool state not available, no job will be resolved");
            return Ok(None);
        }

        let suspended = self
            .repository
            .next_job_id_to_execute_suspended(&pool_ids, self.minimum_suspend_duration_millis)
            .await?;
        if let Some(job_id) = suspended {
            info!(job_id = %job_id, "Resuming suspended job before strategy selection");
            return Ok(Some(job_id));
        }

        let next = self.strategy.next_job_id(&pool_ids).await?;
        if let Some(job_id) = next {
            debug!(
                job_id = %job_id,
                strategy = self.strategy.identifier(),
                "Next job selected by strategy"
            );
        }
        Ok(next)
    }
}
