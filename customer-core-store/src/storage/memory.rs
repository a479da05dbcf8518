use async_trait::async_trait;
use customer_core_api::error::{StorageError, StorageResult};
use customer_core_db::repository::storage::Storage;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-local key-value storage.
///
/// Saves and loads can be switched to fail, which is how callers exercise the
/// "mutation committed, persistence failed" path.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, Vec<Value>>>,
    fail_saves: AtomicBool,
    fail_loads: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `key` with raw blobs, bypassing serialization.
    pub fn with_blobs(self, key: &str, blobs: Vec<Value>) -> Self {
        self.data.write().insert(key.to_string(), blobs);
        self
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// What a reload of `key` would currently see.
    pub fn snapshot(&self, key: &str) -> Option<Vec<Value>> {
        self.data.read().get(key).cloned()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load(&self, key: &str) -> StorageResult<Option<Vec<Value>>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable {
                key: key.to_string(),
                message: "loads disabled".to_string(),
            });
        }
        Ok(self.snapshot(key))
    }

    async fn save(&self, key: &str, blobs: Vec<Value>) -> StorageResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable {
                key: key.to_string(),
                message: "saves disabled".to_string(),
            });
        }
        self.data.write().insert(key.to_string(), blobs);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_save_and_load() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let storage = MemoryStorage::new();
        assert!(storage.load("customerData").await?.is_none());

        storage.save("customerData", vec![json!({"name": "An"})]).await?;
        let loaded = storage.load("customerData").await?;
        assert_eq!(loaded, Some(vec![json!({"name": "An"})]));
        Ok(())
    }

    #[tokio::test]
    async fn test_failing_saves_keep_previous_data() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let storage = MemoryStorage::new().with_blobs("activityLog", vec![json!(1)]);
        storage.set_fail_saves(true);

        let err = storage.save("activityLog", vec![]).await.unwrap_err();
        assert_eq!(err.key(), "activityLog");
        assert_eq!(storage.snapshot("activityLog"), Some(vec![json!(1)]));

        storage.set_fail_saves(false);
        storage.save("activityLog", vec![]).await?;
        assert_eq!(storage.snapshot("activityLog"), Some(vec![]));
        Ok(())
    }

    #[test]
    fn test_failing_loads() {
        let storage = MemoryStorage::new();
        storage.set_fail_loads(true);
        let result = tokio_test::block_on(storage.load("customerData"));
        assert!(matches!(result, Err(StorageError::Unavailable { .. })));
    }
}
