use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lightweight reference to a stored customer, used when an error has to
/// point at an existing record (e.g. the owner of a colliding phone number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
}

impl std::fmt::Display for CustomerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.phone)
    }
}
