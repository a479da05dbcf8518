use customer_core_api::domain::import::{ImportReport, RawCandidate};
use customer_core_api::domain::validation::validate_candidate;
use customer_core_api::error::ImportRejectReason;
use customer_core_db::models::activity_log::ActivityLogModel;
use customer_core_db::models::customer::CustomerModel;
use customer_core_db::repository::find_by_phone::find_phone_collision;
use uuid::Uuid;

use super::repo_impl::CustomerRepositoryImpl;
use crate::outcome::Committed;

impl CustomerRepositoryImpl {
    /// Turns one raw candidate into a record, checked against the collection
    /// as it stands right now.
    fn admit(
        repo: &CustomerRepositoryImpl,
        raw: &RawCandidate,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<CustomerModel, ImportRejectReason> {
        let candidate = raw.normalize()?;
        validate_candidate(&candidate)
            .into_result()
            .map_err(ImportRejectReason::Invalid)?;
        if let Some(existing) = find_phone_collision(&repo.records, &candidate.phone, None) {
            return Err(ImportRejectReason::DuplicatePhone(existing.to_ref()));
        }
        CustomerModel::from_candidate(Uuid::new_v4(), candidate, now).map_err(ImportRejectReason::Invalid)
    }

    pub(super) async fn bulk_import_impl(
        repo: &mut CustomerRepositoryImpl,
        source: &str,
        batch: Vec<RawCandidate>,
    ) -> Committed<ImportReport> {
        let now = repo.clock.now();
        let mut report = ImportReport::default();

        for raw in &batch {
            match Self::admit(repo, raw, now) {
                Ok(record) => {
                    report.accept(record.id);
                    repo.records.insert(0, record);
                }
                Err(reason) => {
                    tracing::debug!(source_ref = %raw.source_ref, %reason, "import row rejected");
                    report.reject(raw.reject(reason));
                }
            }
        }

        tracing::info!(
            source,
            accepted = report.accepted_count,
            rejected = report.rejected_count,
            "import finished"
        );

        let entry = ActivityLogModel::imported(report.accepted_count, source, now);
        let save_errors = repo.commit(report.accepted_count > 0, entry).await;
        Committed::new(report, save_errors)
    }

    /// Imports `batch` in order. Each accepted candidate goes to the front at
    /// once, so later candidates in the same batch collide with it. Rejected
    /// rows never abort the batch. The collection is saved once at the end
    /// and one summary entry naming `source` is logged.
    pub async fn bulk_import(&mut self, source: &str, batch: Vec<RawCandidate>) -> Committed<ImportReport> {
        Self::bulk_import_impl(self, source, batch).await
    }
}
