use chrono::{TimeDelta, TimeZone, Utc};
use customer_core_db::models::activity_log::ActivityLogModel;
use customer_core_db::repository::storage::Storage;
use std::sync::Arc;

use super::repo_impl::ActivityLogRepositoryImpl;

pub fn activity_repo(storage: Arc<dyn Storage>, capacity: usize) -> ActivityLogRepositoryImpl {
    ActivityLogRepositoryImpl::new(storage, capacity)
}

/// A created-customer entry whose name and timestamp are derived from `n`.
pub fn entry_at(n: i64) -> ActivityLogModel {
    let base = Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap();
    ActivityLogModel::created(&format!("Khách {n}"), base + TimeDelta::minutes(n))
}
