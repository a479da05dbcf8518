use customer_core_db::models::activity_log::ActivityLogModel;
use customer_core_db::view::export::{export_rows, ExportRow};
use customer_core_db::view::view_state::ViewState;

use super::repo_impl::CustomerRepositoryImpl;
use crate::outcome::Committed;

impl CustomerRepositoryImpl {
    pub(super) async fn export_impl(
        repo: &mut CustomerRepositoryImpl,
        state: &ViewState,
        format: &str,
    ) -> Committed<Vec<ExportRow>> {
        let rows = export_rows(&state.matching(&repo.records));
        tracing::info!(format, rows = rows.len(), "customers exported");

        let now = repo.clock.now();
        let save_errors = repo.commit(false, ActivityLogModel::exported(format, now)).await;
        Committed::new(rows, save_errors)
    }

    /// Rows of the filtered and sorted view, all pages, for an external
    /// writer. Logs an export entry; the collection itself is untouched.
    pub async fn export(&mut self, state: &ViewState, format: &str) -> Committed<Vec<ExportRow>> {
        Self::export_impl(self, state, format).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{candidate, setup_repo};
    use customer_core_db::models::activity_log::ActivityAction;
    use customer_core_db::view::sort::{SortField, SortKey};
    use customer_core_db::view::view_state::ViewState;

    #[tokio::test]
    async fn test_export_ignores_pagination() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut repo = setup_repo().await?;
        for i in 0..12 {
            repo.create(candidate(&format!("Khách {i:02}"), &format!("09{i:08}"))).await?;
        }

        let mut state = ViewState::new(5);
        state.set_sort(SortKey::asc(SortField::Name));
        state.go_to_page(2, repo.len())?;

        let rows = repo.export(&state, "Excel").await.into_value();

        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].name, "Khách 00");
        assert_eq!(rows[11].name, "Khách 11");

        let entry = &repo.activity_log().entries()[0];
        assert_eq!(entry.action, ActivityAction::Exported);
        assert_eq!(entry.description, "Xuất danh sách khách hàng ra Excel");
        Ok(())
    }
}
