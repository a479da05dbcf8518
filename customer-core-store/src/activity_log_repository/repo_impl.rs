use customer_core_api::error::StorageError;
use customer_core_db::models::activity_log::ActivityLogModel;
use customer_core_db::repository::load::{load_collection, LoadedCollection};
use customer_core_db::repository::save::save_collection;
use customer_core_db::repository::storage::Storage;
use std::sync::Arc;

/// Bounded newest-first activity feed persisted under `activityLog`.
pub struct ActivityLogRepositoryImpl {
    pub(super) entries: Vec<ActivityLogModel>,
    pub(super) capacity: usize,
    pub(super) storage: Arc<dyn Storage>,
}

impl ActivityLogRepositoryImpl {
    pub fn new(storage: Arc<dyn Storage>, capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
            storage,
        }
    }

    /// Loads the stored feed, trimming it to `capacity`. An unreadable
    /// collection starts empty and its error is returned alongside.
    pub async fn open(
        storage: Arc<dyn Storage>,
        capacity: usize,
    ) -> (Self, LoadedCollection<ActivityLogModel>, Option<StorageError>) {
        let mut repo = Self::new(storage, capacity);
        let (loaded, error) = match load_collection::<ActivityLogModel>(repo.storage.as_ref()).await {
            Ok(loaded) => (loaded, None),
            Err(e) => {
                tracing::error!(error = %e, "activity log unreadable, starting empty");
                (LoadedCollection::default(), Some(e))
            }
        };
        repo.entries = loaded.items.clone();
        repo.entries.truncate(repo.capacity);
        (repo, loaded, error)
    }

    pub fn entries(&self) -> &[ActivityLogModel] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub async fn persist(&self) -> Result<(), StorageError> {
        save_collection(self.storage.as_ref(), &self.entries).await
    }
}
