use customer_core_api::domain::category::Category;
use serde::Serialize;

use crate::models::customer::CustomerModel;

pub fn total_count<'a, I>(records: I) -> usize
where
    I: IntoIterator<Item = &'a CustomerModel>,
{
    records.into_iter().count()
}

/// Number of customers per category. Every category is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryHistogram {
    pub regular: usize,
    pub vip: usize,
    pub potential: usize,
}

impl CategoryHistogram {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Regular => self.regular,
            Category::Vip => self.vip,
            Category::Potential => self.potential,
        }
    }

    /// `(category, count)` in chart order: regular, vip, potential.
    pub fn entries(&self) -> [(Category, usize); 3] {
        Category::ALL.map(|c| (c, self.get(c)))
    }

    fn bump(&mut self, category: Category) {
        match category {
            Category::Regular => self.regular += 1,
            Category::Vip => self.vip += 1,
            Category::Potential => self.potential += 1,
        }
    }
}

pub fn category_histogram<'a, I>(records: I) -> CategoryHistogram
where
    I: IntoIterator<Item = &'a CustomerModel>,
{
    let mut histogram = CategoryHistogram::default();
    for record in records {
        histogram.bump(record.category);
    }
    histogram
}
