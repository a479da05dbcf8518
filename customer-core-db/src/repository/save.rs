use customer_core_api::error::{StorageError, StorageResult};

use crate::models::persisted::Persisted;
use crate::repository::storage::Storage;

/// Encodes `items` and replaces the collection stored under `T::STORAGE_KEY`.
pub async fn save_collection<T: Persisted>(storage: &dyn Storage, items: &[T]) -> StorageResult<()> {
    let blobs = items
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::Serialization {
            key: T::STORAGE_KEY.to_string(),
            message: e.to_string(),
        })?;
    storage.save(T::STORAGE_KEY, blobs).await
}
