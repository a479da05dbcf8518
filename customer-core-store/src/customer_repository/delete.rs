use customer_core_api::error::{StoreError, StoreResult};
use customer_core_api::service::confirmation::{Confirmation, ConfirmationPrompt};
use customer_core_db::models::activity_log::ActivityLogModel;
use customer_core_db::models::customer::CustomerModel;
use customer_core_db::repository::find_by_id::position_by_id;
use uuid::Uuid;

use super::repo_impl::CustomerRepositoryImpl;
use crate::outcome::{Committed, DeleteOutcome};

impl CustomerRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &mut CustomerRepositoryImpl,
        id: Uuid,
        confirmation: &dyn Confirmation,
    ) -> StoreResult<DeleteOutcome<CustomerModel>> {
        let index = position_by_id(&repo.records, id).ok_or(StoreError::NotFound(id))?;

        let prompt = ConfirmationPrompt {
            id,
            name: repo.records[index].name.clone(),
        };
        if !confirmation.confirm(&prompt) {
            tracing::debug!(%id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let removed = repo.records.remove(index);
        tracing::info!(id = %removed.id, name = %removed.name, "customer deleted");

        let now = repo.clock.now();
        let save_errors = repo
            .commit(true, ActivityLogModel::deleted(&removed.name, now))
            .await;
        Ok(DeleteOutcome::Deleted(Committed::new(removed, save_errors)))
    }

    /// Removes `id` once `confirmation` agrees. A missing id fails before the
    /// confirmation is asked.
    pub async fn delete(
        &mut self,
        id: Uuid,
        confirmation: &dyn Confirmation,
    ) -> StoreResult<DeleteOutcome<CustomerModel>> {
        Self::delete_impl(self, id, confirmation).await
    }
}
