use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::candidate::CustomerCandidate;
use super::category::Category;
use crate::error::{ImportRejectReason, ImportRowError};

/// Where an import candidate came from, so rejections can be reported
/// against the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SourceRef {
    /// 1-based line of a text file (header included)
    Line(usize),
    /// 1-based spreadsheet row (header included)
    Row(usize),
    /// 0-based position in a sequence with no natural line numbering
    Index(usize),
}

impl std::fmt::Display for SourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceRef::Line(n) => write!(f, "line {n}"),
            SourceRef::Row(n) => write!(f, "row {n}"),
            SourceRef::Index(n) => write!(f, "#{n}"),
        }
    }
}

/// A free-form candidate as delivered by an import source: arbitrary keys
/// in arbitrary casing, untrimmed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCandidate {
    pub source_ref: SourceRef,
    pub fields: BTreeMap<String, String>,
}

impl RawCandidate {
    pub fn new(source_ref: SourceRef) -> Self {
        Self {
            source_ref,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: &str) -> Self {
        self.fields.insert(key.to_string(), value.to_string());
        self
    }

    /// Maps the free-form keys onto candidate fields.
    ///
    /// Keys are trimmed and lowercased, then matched by containment, in this
    /// order: `product`/`sản phẩm`, `name`/`tên`, `phone`/`sđt`/`điện thoại`,
    /// `category`/`loại`, `note`/`ghi chú`. Values are trimmed; blank values
    /// count as absent. A missing category means `Regular`; an unrecognised
    /// one rejects the candidate.
    pub fn normalize(&self) -> Result<CustomerCandidate, ImportRejectReason> {
        let mut candidate = CustomerCandidate::default();
        let mut category: Option<&str> = None;

        for (key, value) in &self.fields {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let key = key.trim().to_lowercase();

            // "Tên sản phẩm" and "product name" both name the product
            if key.contains("product") || key.contains("sản phẩm") {
                set_once(&mut candidate.product, value);
            } else if key.contains("name") || key.contains("tên") {
                set_once(&mut candidate.name, value);
            } else if key.contains("phone") || key.contains("sđt") || key.contains("điện thoại") {
                set_once(&mut candidate.phone, value);
            } else if key.contains("category") || key.contains("loại") {
                category.get_or_insert(value);
            } else if key.contains("note") || key.contains("ghi chú") {
                candidate.note.get_or_insert_with(|| value.to_string());
            }
        }

        if let Some(raw) = category {
            candidate.category = Category::parse_lenient(raw)
                .ok_or_else(|| ImportRejectReason::UnknownCategory(raw.to_string()))?;
        }

        Ok(candidate)
    }

    pub fn reject(&self, reason: ImportRejectReason) -> ImportRowError {
        ImportRowError {
            source_ref: self.source_ref,
            raw: self.fields.clone(),
            reason,
        }
    }
}

fn set_once(slot: &mut String, value: &str) {
    if slot.is_empty() {
        *slot = value.to_string();
    }
}

/// Outcome of a bulk import. Rejections keep the order of the input batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub accepted_count: usize,
    pub rejected_count: usize,
    pub accepted_ids: Vec<Uuid>,
    pub rejections: Vec<ImportRowError>,
}

impl ImportReport {
    pub fn accept(&mut self, id: Uuid) {
        self.accepted_count += 1;
        self.accepted_ids.push(id);
    }

    pub fn reject(&mut self, error: ImportRowError) {
        self.rejected_count += 1;
        self.rejections.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_english_headers() {
        let raw = RawCandidate::new(SourceRef::Line(2))
            .with_field(" Name ", "  An ")
            .with_field("PRODUCT", "Gói A")
            .with_field("phone", "0912345678")
            .with_field("Category", "vip")
            .with_field("note", "  ");

        let candidate = raw.normalize().unwrap();
        assert_eq!(candidate.name, "An");
        assert_eq!(candidate.product, "Gói A");
        assert_eq!(candidate.phone, "0912345678");
        assert_eq!(candidate.category, Category::Vip);
        assert_eq!(candidate.note, None);
    }

    #[test]
    fn test_normalize_exported_vietnamese_headers() {
        let raw = RawCandidate::new(SourceRef::Row(2))
            .with_field("STT", "1")
            .with_field("Thời Gian", "2026-10-01 10:00")
            .with_field("Tên Khách Hàng", "Bình")
            .with_field("Sản Phẩm", "Gói B")
            .with_field("SĐT", "0387654321")
            .with_field("Phân Loại", "Tiềm Năng")
            .with_field("Ghi Chú", "gọi lại");

        let candidate = raw.normalize().unwrap();
        assert_eq!(candidate.name, "Bình");
        assert_eq!(candidate.product, "Gói B");
        assert_eq!(candidate.phone, "0387654321");
        assert_eq!(candidate.category, Category::Potential);
        assert_eq!(candidate.note.as_deref(), Some("gọi lại"));
    }

    #[test]
    fn test_product_name_header_maps_to_product() {
        let raw = RawCandidate::new(SourceRef::Row(3))
            .with_field("Tên khách hàng", "An")
            .with_field("Tên sản phẩm", "Gói A")
            .with_field("SĐT", "0912345678");

        let candidate = raw.normalize().unwrap();
        assert_eq!(candidate.name, "An");
        assert_eq!(candidate.product, "Gói A");
        assert_eq!(candidate.phone, "0912345678");

        let english = RawCandidate::new(SourceRef::Row(4))
            .with_field("Customer Name", "Bình")
            .with_field("Product Name", "Gói B");
        let candidate = english.normalize().unwrap();
        assert_eq!(candidate.name, "Bình");
        assert_eq!(candidate.product, "Gói B");
    }

    #[test]
    fn test_missing_category_defaults_to_regular() {
        let raw = RawCandidate::new(SourceRef::Index(0)).with_field("name", "An");
        assert_eq!(raw.normalize().unwrap().category, Category::Regular);
    }

    #[test]
    fn test_unknown_category_rejects() {
        let raw = RawCandidate::new(SourceRef::Index(0)).with_field("category", "gold");
        assert_eq!(
            raw.normalize(),
            Err(ImportRejectReason::UnknownCategory("gold".to_string()))
        );
    }

    #[test]
    fn test_reject_keeps_raw_fields() {
        let raw = RawCandidate::new(SourceRef::Line(7)).with_field("Name", "An");
        let err = raw.reject(ImportRejectReason::UnknownCategory("x".to_string()));
        assert_eq!(err.source_ref, SourceRef::Line(7));
        assert_eq!(err.raw.get("Name").map(String::as_str), Some("An"));
    }
}
