use crate::models::customer::CustomerModel;

/// Records matching `search_term`, in collection order.
///
/// The term is trimmed and matched case-insensitively as a substring of the
/// name, product, note, category key or category label; the phone is matched
/// by plain containment. A blank term matches everything.
pub fn filter_records<'a>(records: &'a [CustomerModel], search_term: &str) -> Vec<&'a CustomerModel> {
    let term = search_term.trim().to_lowercase();
    if term.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| matches_term(r, &term)).collect()
}

fn matches_term(record: &CustomerModel, term: &str) -> bool {
    record.name.to_lowercase().contains(term)
        || record.product.to_lowercase().contains(term)
        || record.phone.as_str().contains(term)
        || record
            .note
            .as_deref()
            .is_some_and(|note| note.to_lowercase().contains(term))
        || record.category.key().contains(term)
        || record.category.label().to_lowercase().contains(term)
}
