use async_trait::async_trait;
use customer_core_api::error::{StorageError, StorageResult};
use customer_core_db::repository::storage::Storage;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores each key as `<dir>/<key>.json`, a JSON array of blobs.
///
/// A save writes `<key>.json.tmp` first and renames it over the target, so a
/// reader sees either the previous or the new array, never a partial one.
#[derive(Debug, Clone)]
pub struct JsonDirStorage {
    dir: PathBuf,
}

impl JsonDirStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

fn io_error(key: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

#[async_trait]
impl Storage for JsonDirStorage {
    async fn load(&self, key: &str) -> StorageResult<Option<Vec<Value>>> {
        let bytes = match tokio::fs::read(self.path_for(key)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(key, e)),
        };
        let blobs = serde_json::from_slice::<Vec<Value>>(&bytes).map_err(|e| {
            StorageError::Serialization {
                key: key.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Some(blobs))
    }

    async fn save(&self, key: &str, blobs: Vec<Value>) -> StorageResult<()> {
        let bytes = serde_json::to_vec(&blobs).map_err(|e| StorageError::Serialization {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_error(key, e))?;

        let target = self.path_for(key);
        let staging = self.dir.join(format!("{key}.json.tmp"));
        tokio::fs::write(&staging, &bytes)
            .await
            .map_err(|e| io_error(key, e))?;
        tokio::fs::rename(&staging, &target)
            .await
            .map_err(|e| io_error(key, e))?;

        tracing::debug!(key, path = %target.display(), count = blobs.len(), "saved collection");
        Ok(())
    }
}
