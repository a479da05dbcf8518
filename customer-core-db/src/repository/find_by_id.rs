use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Finds the record with `id` in a collection.
pub fn find_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<&T> {
    items.iter().find(|item| item.get_id() == id)
}

/// Position of the record with `id` in a collection.
pub fn position_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<usize> {
    items.iter().position(|item| item.get_id() == id)
}
