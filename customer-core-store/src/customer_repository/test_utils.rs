use chrono::Utc;
use customer_core_api::domain::candidate::CustomerCandidate;
use customer_core_api::domain::import::{RawCandidate, SourceRef};
use customer_core_db::models::customer::CustomerModel;
use std::sync::Arc;
use uuid::Uuid;

use super::repo_impl::CustomerRepositoryImpl;
use crate::config::StoreConfig;
use crate::storage::MemoryStorage;
use crate::test_helper::ManualClock;

pub fn candidate(name: &str, phone: &str) -> CustomerCandidate {
    CustomerCandidate::new(name, "Gói A", phone)
}

/// An import row keyed the way a Vietnamese spreadsheet header reads.
pub fn raw_row(line: usize, name: &str, phone: &str) -> RawCandidate {
    RawCandidate::new(SourceRef::Line(line))
        .with_field("Tên", name)
        .with_field("Sản phẩm", "Gói A")
        .with_field("SĐT", phone)
}

pub fn stored_customer(name: &str, phone: &str) -> CustomerModel {
    CustomerModel::from_candidate(Uuid::new_v4(), candidate(name, phone), Utc::now()).unwrap()
}

pub fn test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::default())
}

pub async fn setup_repo_with(
    storage: Arc<MemoryStorage>,
) -> Result<CustomerRepositoryImpl, Box<dyn std::error::Error + Send + Sync>> {
    let (repo, _) = CustomerRepositoryImpl::open(storage, test_clock(), StoreConfig::default()).await?;
    Ok(repo)
}

pub async fn setup_repo() -> Result<CustomerRepositoryImpl, Box<dyn std::error::Error + Send + Sync>> {
    setup_repo_with(Arc::new(MemoryStorage::new())).await
}
