use async_trait::async_trait;
use customer_core_api::error::StorageResult;
use serde_json::Value;

/// Key-value storage collaborator holding lists of JSON blobs.
///
/// The core makes no atomicity assumptions across process crashes; both
/// operations are fallible and a failed `save` leaves in-memory state alone.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl Storage for MyBackend {
///     async fn load(&self, key: &str) -> StorageResult<Option<Vec<Value>>> {
///         // Implementation
///     }
///     async fn save(&self, key: &str, blobs: Vec<Value>) -> StorageResult<()> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load the blobs stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(blobs))` - The stored list
    /// * `Ok(None)` - Nothing has been stored under `key` yet
    /// * `Err` - The backend could not be read
    async fn load(&self, key: &str) -> StorageResult<Option<Vec<Value>>>;

    /// Replace the list stored under `key`
    async fn save(&self, key: &str, blobs: Vec<Value>) -> StorageResult<()>;
}
