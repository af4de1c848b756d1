//! Port interfaces for job scheduling
//!
//! These traits define the boundaries between core scheduling logic
//! and infrastructure implementations. Cross-instance exclusivity
//! ("only one cluster member picks a given job") is guaranteed by the
//! repository implementation: its next-job queries must be atomic with
//! respect to job status transitions.

use async_trait::async_trait;
use argus_domain::{EncryptionPoolIds, JobId, Result};

/// Trait for querying the shared job store for the next job to execute.
///
/// All queries return `Ok(None)` when no job matches; absence of work is
/// never an error.
#[async_trait]
pub trait SchedulerJobRepository: Send + Sync {
    /// Earliest created runnable job, no project or grouping constraint.
    async fn next_job_id_to_execute_first_in_first_out(&self) -> Result<Option<JobId>>;

    /// Earliest created runnable job whose project currently has no
    /// running job.
    async fn next_job_id_to_execute_for_project_not_yet_executed(&self)
        -> Result<Option<JobId>>;

    /// As the project query, additionally excluding projects with a
    /// running job in the same module group and jobs encrypted under a
    /// pool outside `current_encryption_pool_ids`.
    async fn next_job_id_to_execute_for_project_and_module_group_not_yet_executed(
        &self,
        current_encryption_pool_ids: &EncryptionPoolIds,
    ) -> Result<Option<JobId>>;

    /// Job suspended for at least `minimum_suspend_duration_millis`
    /// because its encryption pool is no longer in
    /// `current_encryption_pool_ids`.
    async fn next_job_id_to_execute_suspended(
        &self,
        current_encryption_pool_ids: &EncryptionPoolIds,
        minimum_suspend_duration_millis: u64,
    ) -> Result<Option<JobId>>;
}

/// Trait for querying the active encryption key pools.
#[async_trait]
pub trait EncryptionPoolProvider: Send + Sync {
    /// The currently active encryption pool ids. Empty means the
    /// encryption service has not published a pool state yet.
    async fn current_encryption_pool_ids(&self) -> Result<EncryptionPoolIds>;
}
