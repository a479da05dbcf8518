use uuid::Uuid;

/// Trait for records that carry a stable, never-reused UUID
pub trait Identifiable {
    /// Returns the unique identifier of the record
    fn get_id(&self) -> Uuid;
}
