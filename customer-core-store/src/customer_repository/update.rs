use customer_core_api::domain::candidate::CustomerCandidate;
use customer_core_api::domain::validation::validate_candidate;
use customer_core_api::error::{StoreError, StoreResult};
use customer_core_db::models::activity_log::ActivityLogModel;
use customer_core_db::models::customer::CustomerModel;
use customer_core_db::repository::find_by_id::position_by_id;
use customer_core_db::repository::find_by_phone::find_phone_collision;
use uuid::Uuid;

use super::repo_impl::CustomerRepositoryImpl;
use crate::outcome::Committed;

impl CustomerRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &mut CustomerRepositoryImpl,
        id: Uuid,
        candidate: CustomerCandidate,
    ) -> StoreResult<Committed<CustomerModel>> {
        let index = position_by_id(&repo.records, id).ok_or(StoreError::NotFound(id))?;

        validate_candidate(&candidate)
            .into_result()
            .map_err(StoreError::ValidationError)?;

        // The record's own phone never collides; anyone else's does.
        if let Some(existing) = find_phone_collision(&repo.records, &candidate.phone, Some(id)) {
            return Err(StoreError::DuplicatePhone(existing.to_ref()));
        }

        let now = repo.clock.now();
        let record = &mut repo.records[index];
        record
            .apply(candidate, now)
            .map_err(StoreError::ValidationError)?;
        let record = record.clone();
        tracing::info!(id = %record.id, name = %record.name, "customer updated");

        let save_errors = repo
            .commit(true, ActivityLogModel::updated(&record.name, now))
            .await;
        Ok(Committed::new(record, save_errors))
    }

    /// Replaces every field of `id` except the id itself and refreshes its
    /// timestamp. The record keeps its position in the collection.
    pub async fn update(
        &mut self,
        id: Uuid,
        candidate: CustomerCandidate,
    ) -> StoreResult<Committed<CustomerModel>> {
        Self::update_impl(self, id, candidate).await
    }
}
