use customer_core_db::models::activity_log::ActivityLogModel;

use super::repo_impl::ActivityLogRepositoryImpl;

impl ActivityLogRepositoryImpl {
    /// The newest `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> &[ActivityLogModel] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn latest(&self) -> Option<&ActivityLogModel> {
        self.entries.first()
    }
}
