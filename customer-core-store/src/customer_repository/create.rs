use customer_core_api::domain::candidate::CustomerCandidate;
use customer_core_api::domain::validation::validate_candidate;
use customer_core_api::error::{StoreError, StoreResult};
use customer_core_db::models::activity_log::ActivityLogModel;
use customer_core_db::models::customer::CustomerModel;
use customer_core_db::repository::find_by_phone::find_phone_collision;
use uuid::Uuid;

use super::repo_impl::CustomerRepositoryImpl;
use crate::outcome::Committed;

impl CustomerRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &mut CustomerRepositoryImpl,
        candidate: CustomerCandidate,
    ) -> StoreResult<Committed<CustomerModel>> {
        validate_candidate(&candidate)
            .into_result()
            .map_err(StoreError::ValidationError)?;

        if let Some(existing) = find_phone_collision(&repo.records, &candidate.phone, None) {
            tracing::debug!(phone = %candidate.phone, existing = %existing.id, "create rejected, phone taken");
            return Err(StoreError::DuplicatePhone(existing.to_ref()));
        }

        let now = repo.clock.now();
        let record = CustomerModel::from_candidate(Uuid::new_v4(), candidate, now)
            .map_err(StoreError::ValidationError)?;
        repo.records.insert(0, record.clone());
        tracing::info!(id = %record.id, name = %record.name, "customer created");

        let save_errors = repo
            .commit(true, ActivityLogModel::created(&record.name, now))
            .await;
        Ok(Committed::new(record, save_errors))
    }

    /// Validates `candidate`, rejects a phone already in use, then inserts the
    /// new record at the front of the collection.
    pub async fn create(&mut self, candidate: CustomerCandidate) -> StoreResult<Committed<CustomerModel>> {
        Self::create_impl(self, candidate).await
    }
}
