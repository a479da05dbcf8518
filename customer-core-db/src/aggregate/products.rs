use serde::Serialize;
use std::collections::HashMap;

use crate::models::customer::CustomerModel;

pub const DEFAULT_TOP_PRODUCTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCount {
    pub product: String,
    pub count: usize,
}

/// Occurrences per product, in the order each product is first seen.
pub fn product_counts<'a, I>(records: I) -> Vec<ProductCount>
where
    I: IntoIterator<Item = &'a CustomerModel>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<ProductCount> = Vec::new();
    for record in records {
        match positions.get(record.product.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                positions.insert(record.product.as_str(), counts.len());
                counts.push(ProductCount {
                    product: record.product.clone(),
                    count: 1,
                });
            }
        }
    }
    counts
}

/// Most frequent product. On a tie the product seen first wins.
pub fn popular_product<'a, I>(records: I) -> Option<String>
where
    I: IntoIterator<Item = &'a CustomerModel>,
{
    let mut best: Option<ProductCount> = None;
    for candidate in product_counts(records) {
        if best.as_ref().map_or(true, |b| candidate.count > b.count) {
            best = Some(candidate);
        }
    }
    best.map(|b| b.product)
}

/// The `n` most frequent products, descending by count; ties keep
/// first-seen order.
pub fn top_products<'a, I>(records: I, n: usize) -> Vec<ProductCount>
where
    I: IntoIterator<Item = &'a CustomerModel>,
{
    let mut counts = product_counts(records);
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

/// Every product once, first-seen order. Feeds product autocompletion.
pub fn distinct_products<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a CustomerModel>,
{
    product_counts(records).into_iter().map(|c| c.product).collect()
}
