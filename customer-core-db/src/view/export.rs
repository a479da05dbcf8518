use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::customer::CustomerModel;

/// Column headers of an exported customer list, in row order.
pub const EXPORT_HEADERS: [&str; 7] = [
    "STT",
    "Thời Gian",
    "Tên Khách Hàng",
    "Sản Phẩm",
    "SĐT",
    "Phân Loại",
    "Ghi Chú",
];

/// One row of an export, format-agnostic. Writers for spreadsheet, CSV or
/// PDF output consume these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    /// 1-based position in the exported sequence
    pub index: usize,
    pub time: DateTime<Utc>,
    pub name: String,
    pub product: String,
    pub phone: String,
    pub category_label: String,
    pub note: String,
}

pub fn export_rows(records: &[&CustomerModel]) -> Vec<ExportRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| ExportRow {
            index: i + 1,
            time: r.updated_at,
            name: r.name.clone(),
            product: r.product.clone(),
            phone: r.phone.to_string(),
            category_label: r.category_label().to_string(),
            note: r.note.clone().unwrap_or_default(),
        })
        .collect()
}
