pub mod activity_log_repository;
pub mod config;
pub mod customer_repository;
pub mod outcome;
pub mod shared;
pub mod storage;

pub use activity_log_repository::ActivityLogRepositoryImpl;
pub use config::{ConfigError, StoreConfig};
pub use customer_repository::CustomerRepositoryImpl;
pub use outcome::{Committed, DeleteOutcome, OpenReport};
pub use shared::SharedStore;
pub use storage::{storage_for, JsonDirStorage, MemoryStorage};

#[cfg(test)]
pub mod test_helper;
