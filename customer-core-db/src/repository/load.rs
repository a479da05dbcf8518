use customer_core_api::error::StorageResult;

use crate::models::persisted::Persisted;
use crate::repository::storage::Storage;

/// A decoded collection plus the number of blobs that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCollection<T> {
    pub items: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for LoadedCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            skipped: 0,
        }
    }
}

/// Loads and decodes the collection stored under `T::STORAGE_KEY`.
///
/// Blobs that do not decode into `T` are skipped and counted rather than
/// failing the whole load; a missing key is an empty collection.
pub async fn load_collection<T: Persisted>(
    storage: &dyn Storage,
) -> StorageResult<LoadedCollection<T>> {
    let Some(blobs) = storage.load(T::STORAGE_KEY).await? else {
        return Ok(LoadedCollection::default());
    };

    let mut loaded = LoadedCollection {
        items: Vec::with_capacity(blobs.len()),
        skipped: 0,
    };
    for (position, blob) in blobs.into_iter().enumerate() {
        match serde_json::from_value::<T>(blob) {
            Ok(item) => loaded.items.push(item),
            Err(e) => {
                tracing::warn!(
                    key = T::STORAGE_KEY,
                    position,
                    error = %e,
                    "skipping malformed stored record"
                );
                loaded.skipped += 1;
            }
        }
    }
    Ok(loaded)
}
