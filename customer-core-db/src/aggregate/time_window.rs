use chrono::{DateTime, Datelike, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::customer::CustomerModel;

/// Time range selectable on the statistics page.
///
/// Windows are evaluated against the `now` passed at call time, in `now`'s
/// timezone, so the same collection yields different subsets on different
/// days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "month")]
    ThisMonth,
    #[serde(rename = "quarter")]
    ThisQuarter,
    #[serde(rename = "year")]
    ThisYear,
    #[default]
    #[serde(rename = "all")]
    All,
}

impl TimeWindow {
    pub fn contains<Tz: TimeZone>(&self, at: DateTime<Utc>, now: &DateTime<Tz>) -> bool {
        let at = at.with_timezone(&now.timezone());
        match self {
            TimeWindow::Last7Days => at >= now.clone() - TimeDelta::days(7),
            TimeWindow::Last30Days => at >= now.clone() - TimeDelta::days(30),
            TimeWindow::ThisMonth => at.year() == now.year() && at.month() == now.month(),
            TimeWindow::ThisQuarter => {
                at.year() == now.year() && at.month0() / 3 == now.month0() / 3
            }
            TimeWindow::ThisYear => at.year() == now.year(),
            TimeWindow::All => true,
        }
    }
}

impl FromStr for TimeWindow {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7days" => Ok(TimeWindow::Last7Days),
            "30days" => Ok(TimeWindow::Last30Days),
            "month" | "thisMonth" => Ok(TimeWindow::ThisMonth),
            "quarter" | "thisQuarter" => Ok(TimeWindow::ThisQuarter),
            "year" | "thisYear" => Ok(TimeWindow::ThisYear),
            "all" => Ok(TimeWindow::All),
            _ => Err(()),
        }
    }
}

/// Records whose timestamp falls inside `window`, in collection order.
pub fn filter_by_window<'a, Tz: TimeZone>(
    records: &'a [CustomerModel],
    window: TimeWindow,
    now: &DateTime<Tz>,
) -> Vec<&'a CustomerModel> {
    records
        .iter()
        .filter(|r| window.contains(r.updated_at, now))
        .collect()
}
