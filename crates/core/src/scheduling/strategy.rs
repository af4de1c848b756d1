//! Pluggable "pick next job" strategies.

use std::sync::Arc;

use async_trait::async_trait;
use argus_domain::{EncryptionPoolIds, JobId, Result};

use super::ports::SchedulerJobRepository;

/// Identifier of [`FirstComeFirstServeStrategy`].
pub const FIRST_COME_FIRST_SERVE_ID: &str = "first-come-first-serve";

/// Identifier of [`OnlyOneScanPerProjectStrategy`].
pub const ONLY_ONE_SCAN_PER_PROJECT_ID: &str = "only-one-scan-per-project-at-a-time";

/// Identifier of [`OnlyOneScanPerProjectAndModuleGroupStrategy`].
pub const ONLY_ONE_SCAN_PER_PROJECT_AND_MODULE_GROUP_ID: &str =
    "only-one-scan-per-project-and-module-group";

/// A scheduling strategy selects the next job to execute.
///
/// Strategies are pure query delegation to the job repository: no side
/// effects, no retries, no state beyond the repository reference, so they
/// are safe for concurrent read-only use. "No job found" is `Ok(None)`,
/// never an error.
#[async_trait]
pub trait SchedulerStrategy: Send + Sync {
    /// Stable identifier used in configuration and logs.
    fn identifier(&self) -> &'static str;

    /// Select the next job id, or `None` when no job is runnable under
    /// this strategy's constraints.
    async fn next_job_id(
        &self,
        current_encryption_pool_ids: &EncryptionPoolIds,
    ) -> Result<Option<JobId>>;
}

/// Earliest created job wins, regardless of project or module group.
pub struct FirstComeFirstServeStrategy {
    repository: Arc<dyn SchedulerJobRepository>,
}

impl FirstComeFirstServeStrategy {
    /// Create the strategy on top of `repository`.
    pub fn new(repository: Arc<dyn SchedulerJobRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SchedulerStrategy for FirstComeFirstServeStrategy {
    fn identifier(&self) -> &'static str {
        FIRST_COME_FIRST_SERVE_ID
    }

    async fn next_job_id(
        &self,
        _current_encryption_pool_ids: &EncryptionPoolIds,
    ) -> Result<Option<JobId>> {
        self.repository.next_job_id_to_execute_first_in_first_out().await
    }
}

/// At most one running job per project; otherwise first come first serve.
pub struct OnlyOneScanPerProjectStrategy {
    repository: Arc<dyn SchedulerJobRepository>,
}

impl OnlyOneScanPerProjectStrategy {
    /// Create the strategy on top of `repository`.
    pub fn new(repository: Arc<dyn SchedulerJobRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SchedulerStrategy for OnlyOneScanPerProjectStrategy {
    fn identifier(&self) -> &'static str {
        ONLY_ONE_SCAN_PER_PROJECT_ID
    }

    async fn next_job_id(
        &self,
        _current_encryption_pool_ids: &EncryptionPoolIds,
    ) -> Result<Option<JobId>> {
        self.repository.next_job_id_to_execute_for_project_not_yet_executed().await
    }
}

/// At most one running job per project and per module group within a
/// project; also skips jobs encrypted under a pool outside the current
/// set.
pub struct OnlyOneScanPerProjectAndModuleGroupStrategy {
    repository: Arc<dyn SchedulerJobRepository>,
}

impl OnlyOneScanPerProjectAndModuleGroupStrategy {
    /// Create the strategy on top of `repository`.
    pub fn new(repository: Arc<dyn SchedulerJobRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SchedulerStrategy for OnlyOneScanPerProjectAndModuleGroupStrategy {
    fn identifier(&self) -> &'static str {
        ONLY_ONE_SCAN_PER_PROJECT_AND_MODULE_GROUP_ID
    }

    async fn next_job_id(
        &self,
        current_encryption_pool_ids: &EncryptionPoolIds,
    ) -> Result<Option<JobId>> {
        self.repository
            .next_job_id_to_execute_for_project_and_module_group_not_yet_executed(
                current_encryption_pool_ids,
            )
            .await
    }
}
