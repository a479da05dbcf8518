use customer_core_api::error::StorageResult;
use customer_core_db::models::activity_log::ActivityLogModel;

use super::repo_impl::ActivityLogRepositoryImpl;

impl ActivityLogRepositoryImpl {
    pub(super) async fn append_impl(
        repo: &mut ActivityLogRepositoryImpl,
        entry: ActivityLogModel,
    ) -> StorageResult<()> {
        tracing::debug!(action = ?entry.action, description = %entry.description, "activity");
        repo.entries.insert(0, entry);
        if repo.entries.len() > repo.capacity {
            let evicted = repo.entries.len() - repo.capacity;
            repo.entries.truncate(repo.capacity);
            tracing::trace!(evicted, "activity log at capacity");
        }
        repo.persist().await
    }

    /// Prepends `entry`, evicting the oldest entries beyond capacity, then
    /// saves the whole feed. The entry stays in memory if the save fails.
    pub async fn append(&mut self, entry: ActivityLogModel) -> StorageResult<()> {
        Self::append_impl(self, entry).await
    }
}
