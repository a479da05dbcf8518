use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::persisted::Persisted;

/// Kind of mutation recorded in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Created,
    Updated,
    Deleted,
    Imported,
    Exported,
}

impl ActivityAction {
    /// Short label shown in the activity feed and the dashboard widget.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityAction::Created => "Thêm khách hàng mới",
            ActivityAction::Updated => "Cập nhật khách hàng",
            ActivityAction::Deleted => "Xóa khách hàng",
            ActivityAction::Imported => "Nhập dữ liệu",
            ActivityAction::Exported => "Xuất dữ liệu",
        }
    }
}

impl std::fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// # Documentation
/// ActivityLogModel is one entry of the bounded, newest-first activity feed.
/// Entries are never mutated; they disappear only when evicted by capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLogModel {
    pub action: ActivityAction,

    /// Free text naming the affected customer or the batch size
    pub description: String,

    pub timestamp: DateTime<Utc>,
}

impl ActivityLogModel {
    pub fn created(name: &str, timestamp: DateTime<Utc>) -> Self {
        Self::new(ActivityAction::Created, format!("Đã thêm khách hàng {name}"), timestamp)
    }

    pub fn updated(name: &str, timestamp: DateTime<Utc>) -> Self {
        Self::new(ActivityAction::Updated, format!("Đã cập nhật thông tin {name}"), timestamp)
    }

    pub fn deleted(name: &str, timestamp: DateTime<Utc>) -> Self {
        Self::new(ActivityAction::Deleted, format!("Đã xóa khách hàng {name}"), timestamp)
    }

    pub fn imported(count: usize, source: &str, timestamp: DateTime<Utc>) -> Self {
        Self::new(
            ActivityAction::Imported,
            format!("Đã nhập {count} khách hàng từ file {source}"),
            timestamp,
        )
    }

    pub fn exported(format: &str, timestamp: DateTime<Utc>) -> Self {
        Self::new(
            ActivityAction::Exported,
            format!("Xuất danh sách khách hàng ra {format}"),
            timestamp,
        )
    }

    pub fn new(action: ActivityAction, description: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            action,
            description,
            timestamp,
        }
    }
}

impl Persisted for ActivityLogModel {
    const STORAGE_KEY: &'static str = "activityLog";
}
