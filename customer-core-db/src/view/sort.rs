use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::customer::CustomerModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Time,
    Name,
    Product,
    Phone,
    Category,
    Note,
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(SortField::Time),
            "name" => Ok(SortField::Name),
            "product" => Ok(SortField::Product),
            "phone" => Ok(SortField::Phone),
            "category" => Ok(SortField::Category),
            "note" => Ok(SortField::Note),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// A sort field together with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    /// Newest first.
    pub const DEFAULT: SortKey = SortKey {
        field: SortField::Time,
        direction: SortDirection::Desc,
    };

    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    pub fn flipped(self) -> Self {
        Self {
            field: self.field,
            direction: self.direction.flipped(),
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Compares two records on one field, ascending.
///
/// Text fields compare case-insensitively, the timestamp compares as a
/// point in time, the category compares by its key and a missing note sorts
/// as an empty string.
pub fn compare_by(a: &CustomerModel, b: &CustomerModel, field: SortField) -> Ordering {
    match field {
        SortField::Time => a.updated_at.cmp(&b.updated_at),
        SortField::Name => cmp_ignore_case(&a.name, &b.name),
        SortField::Product => cmp_ignore_case(&a.product, &b.product),
        SortField::Phone => a.phone.as_str().cmp(b.phone.as_str()),
        SortField::Category => a.category.key().cmp(b.category.key()),
        SortField::Note => cmp_ignore_case(
            a.note.as_deref().unwrap_or(""),
            b.note.as_deref().unwrap_or(""),
        ),
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Stable sort: records that compare equal keep their relative order, in
/// either direction.
pub fn sort_records<'a>(mut records: Vec<&'a CustomerModel>, key: SortKey) -> Vec<&'a CustomerModel> {
    records.sort_by(|a, b| {
        let ordering = compare_by(a, b, key.field);
        match key.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};
    use customer_core_api::domain::candidate::CustomerCandidate;
    use customer_core_api::domain::category::Category;
    use uuid::Uuid;

    fn record(name: &str, phone: &str, category: Category, minutes: i64) -> CustomerModel {
        let base = Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap();
        CustomerModel::from_candidate(
            Uuid::new_v4(),
            CustomerCandidate::new(name, "Gói A", phone).with_category(category),
            base + TimeDelta::minutes(minutes),
        )
        .unwrap()
    }

    fn sample() -> Vec<CustomerModel> {
        vec![
            record("chi", "0912345670", Category::Vip, 3),
            record("An", "0912345671", Category::Regular, 1),
            record("bình", "0912345672", Category::Vip, 2),
            record("Dũng", "0912345673", Category::Regular, 0),
            record("Em", "0912345674", Category::Potential, 4),
        ]
    }

    fn names(records: &[&CustomerModel]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let records = sample();
        let sorted = sort_records(records.iter().collect(), SortKey::asc(SortField::Name));
        assert_eq!(names(&sorted), vec!["An", "bình", "chi", "Dũng", "Em"]);

        let sorted = sort_records(records.iter().collect(), SortKey::desc(SortField::Name));
        assert_eq!(names(&sorted), vec!["Em", "Dũng", "chi", "bình", "An"]);
    }

    #[test]
    fn test_time_sort_is_chronological() {
        let records = sample();
        let sorted = sort_records(records.iter().collect(), SortKey::asc(SortField::Time));
        assert_eq!(names(&sorted), vec!["Dũng", "An", "bình", "chi", "Em"]);
    }

    #[test]
    fn test_category_sort_is_stable() {
        let records = sample();
        let once = sort_records(records.iter().collect(), SortKey::asc(SortField::Category));
        // potential < regular < vip by key; ties keep collection order
        assert_eq!(names(&once), vec!["Em", "An", "Dũng", "chi", "bình"]);

        let twice = sort_records(once.clone(), SortKey::asc(SortField::Category));
        assert_eq!(names(&twice), names(&once));

        let desc = sort_records(records.iter().collect(), SortKey::desc(SortField::Category));
        assert_eq!(names(&desc), vec!["chi", "bình", "An", "Dũng", "Em"]);
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!("time".parse::<SortField>(), Ok(SortField::Time));
        assert!("updated".parse::<SortField>().is_err());
    }
}
