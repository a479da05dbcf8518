pub mod json_dir;
pub mod memory;

pub use json_dir::JsonDirStorage;
pub use memory::MemoryStorage;

use customer_core_db::repository::storage::Storage;
use std::sync::Arc;

use crate::config::StoreConfig;

/// Backend named by the configuration: files under `data_dir` when set,
/// otherwise process memory.
pub fn storage_for(config: &StoreConfig) -> Arc<dyn Storage> {
    match &config.data_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "using JSON directory storage");
            Arc::new(JsonDirStorage::new(dir.clone()))
        }
        None => {
            tracing::info!("using in-memory storage");
            Arc::new(MemoryStorage::new())
        }
    }
}
