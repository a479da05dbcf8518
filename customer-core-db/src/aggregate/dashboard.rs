use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::counts::{category_histogram, total_count, CategoryHistogram};
use crate::aggregate::growth::growth_rate;
use crate::aggregate::products::{popular_product, top_products, ProductCount};
use crate::aggregate::time_window::{filter_by_window, TimeWindow};
use crate::models::activity_log::{ActivityAction, ActivityLogModel};
use crate::models::customer::CustomerModel;

/// Everything the dashboard and statistics pages display.
///
/// The headline figures (total, popular product, last activity, growth)
/// cover the whole collection; the histogram and the top products cover
/// only the selected time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_count: usize,
    pub popular_product: Option<String>,
    pub last_activity: Option<ActivityAction>,
    pub window: TimeWindow,
    pub histogram: CategoryHistogram,
    pub top_products: Vec<ProductCount>,
    pub growth_rate: Decimal,
}

/// Action of the newest activity entry, if any.
pub fn last_activity(activities: &[ActivityLogModel]) -> Option<ActivityAction> {
    activities.first().map(|entry| entry.action)
}

pub fn dashboard_summary<Tz: TimeZone>(
    records: &[CustomerModel],
    activities: &[ActivityLogModel],
    window: TimeWindow,
    top_n: usize,
    now: &DateTime<Tz>,
) -> DashboardSummary {
    let windowed = filter_by_window(records, window, now);
    DashboardSummary {
        total_count: total_count(records),
        popular_product: popular_product(records),
        last_activity: last_activity(activities),
        window,
        histogram: category_histogram(windowed.iter().copied()),
        top_products: top_products(windowed.iter().copied(), top_n),
        growth_rate: growth_rate(records, now),
    }
}
