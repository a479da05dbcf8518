use customer_core_api::error::{StoreError, StoreResult};
use customer_core_db::aggregate::dashboard::{dashboard_summary, DashboardSummary};
use customer_core_db::aggregate::products::distinct_products;
use customer_core_db::aggregate::time_window::TimeWindow;
use customer_core_db::models::customer::CustomerModel;
use customer_core_db::repository::find_by_id::find_by_id;
use customer_core_db::view::view_state::{DerivedView, ViewState};
use uuid::Uuid;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub fn find_by_id(&self, id: Uuid) -> StoreResult<&CustomerModel> {
        find_by_id(&self.records, id).ok_or(StoreError::NotFound(id))
    }

    /// The page of the table `state` describes, with the pager's numbers.
    pub fn view(&self, state: &ViewState) -> DerivedView<'_> {
        state.derive(&self.records, self.config.max_visible_pages)
    }

    /// Dashboard figures as of the store clock's "now".
    pub fn dashboard(&self, window: TimeWindow) -> DashboardSummary {
        dashboard_summary(
            &self.records,
            self.activity_log.entries(),
            window,
            self.config.top_products,
            &self.clock.now(),
        )
    }

    /// Product names in first-seen order, for autocomplete.
    pub fn products(&self) -> Vec<String> {
        distinct_products(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::super::repo_impl::CustomerRepositoryImpl;
    use super::super::test_utils::{candidate, setup_repo, test_clock};
    use crate::config::StoreConfig;
    use crate::storage::MemoryStorage;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;
    use customer_core_api::domain::category::Category;
    use customer_core_api::service::confirmation::ConfirmationPrompt;
    use customer_core_db::aggregate::time_window::TimeWindow;
    use customer_core_db::models::activity_log::ActivityAction;
    use customer_core_db::view::view_state::ViewState;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_view_filters_by_name() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut repo = setup_repo().await?;
        repo.create(candidate("An", "0912345678")).await?;
        repo.create(candidate("Bình", "0387654321")).await?;

        let mut state = repo.config().view_state();
        state.set_search("an");
        let view = repo.view(&state);

        assert_eq!(view.page.total, 1);
        assert_eq!(view.page.items[0].name, "An");
        Ok(())
    }

    #[tokio::test]
    async fn test_view_reflects_mutations() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut repo = setup_repo().await?;
        for i in 0..25 {
            repo.create(candidate(&format!("Khách {i:02}"), &format!("09{i:08}"))).await?;
        }

        let mut state = ViewState::new(10);
        state.go_to_page(3, repo.len())?;
        assert_eq!(repo.view(&state).page.items.len(), 5);
        assert!(state.go_to_page(4, repo.len()).is_err());

        let last = repo.view(&state).page.items[4].id;
        repo.delete(last, &|_: &ConfirmationPrompt| true).await?;
        let view = repo.view(&state);
        assert_eq!(view.page.items.len(), 4);
        assert_eq!((view.page.start_index(), view.page.end_index()), (21, 24));
        Ok(())
    }

    #[tokio::test]
    async fn test_dashboard_and_products() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut repo = setup_repo().await?;
        repo.create(candidate("An", "0912345678").with_category(Category::Vip)).await?;
        repo.create(candidate("Bình", "0387654321")).await?;
        let mut other = candidate("Chi", "0701234567");
        other.product = "Gói B".to_string();
        repo.create(other).await?;

        let summary = repo.dashboard(TimeWindow::All);

        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.popular_product.as_deref(), Some("Gói A"));
        assert_eq!(summary.last_activity, Some(ActivityAction::Created));
        assert_eq!(summary.histogram.vip, 1);
        assert_eq!(summary.histogram.regular, 2);
        assert_eq!(summary.top_products[0].count, 2);
        // every record was created this month and none last month
        assert_eq!(summary.growth_rate, Decimal::ZERO);
        assert_eq!(repo.products(), vec!["Gói B".to_string(), "Gói A".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_growth_follows_the_clock() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let clock = test_clock();
        let (mut repo, _) = CustomerRepositoryImpl::open(
            Arc::new(MemoryStorage::new()),
            clock.clone(),
            StoreConfig::default(),
        )
        .await?;

        clock.set(Utc.with_ymd_and_hms(2026, 9, 3, 9, 0, 0).unwrap());
        repo.create(candidate("An", "0912345678")).await?;
        repo.create(candidate("Bình", "0387654321")).await?;
        clock.set(Utc.with_ymd_and_hms(2026, 10, 3, 9, 0, 0).unwrap());
        repo.create(candidate("Chi", "0701234567")).await?;

        let summary = repo.dashboard(TimeWindow::ThisMonth);
        assert_eq!(summary.growth_rate, Decimal::from(-50));
        assert_eq!(summary.histogram.regular, 1);
        Ok(())
    }
}
