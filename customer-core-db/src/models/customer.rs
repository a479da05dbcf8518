use chrono::{DateTime, Utc};
use customer_core_api::domain::candidate::{CustomerCandidate, PHONE_INVALID};
use customer_core_api::domain::category::Category;
use customer_core_api::domain::customer_ref::CustomerRef;
use customer_core_api::domain::field_errors::FieldErrors;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::models::persisted::Persisted;

/// Phone numbers are exactly ten digits once validated.
pub const PHONE_LEN: usize = 10;

/// # Documentation
/// CustomerModel is the canonical customer record.
/// The record keeps a single timestamp which is overwritten on every update;
/// there is no separate creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerModel {
    /// Assigned at creation, never changed, never reused
    pub id: Uuid,

    /// Time of the last create or update
    pub updated_at: DateTime<Utc>,

    pub name: String,

    pub product: String,

    /// Unique across the canonical collection (exact match)
    pub phone: HeaplessString<PHONE_LEN>,

    #[serde(default)]
    pub category: Category,

    #[serde(default)]
    pub note: Option<String>,
}

impl CustomerModel {
    /// Builds a record from a candidate that already passed validation.
    pub fn from_candidate(
        id: Uuid,
        candidate: CustomerCandidate,
        now: DateTime<Utc>,
    ) -> Result<Self, FieldErrors> {
        let phone = phone_string(&candidate.phone)?;
        Ok(Self {
            id,
            updated_at: now,
            name: candidate.name,
            product: candidate.product,
            phone,
            category: candidate.category,
            note: candidate.note,
        })
    }

    /// Replaces every field except `id` and refreshes the timestamp.
    pub fn apply(&mut self, candidate: CustomerCandidate, now: DateTime<Utc>) -> Result<(), FieldErrors> {
        let phone = phone_string(&candidate.phone)?;
        self.updated_at = now;
        self.name = candidate.name;
        self.product = candidate.product;
        self.phone = phone;
        self.category = candidate.category;
        self.note = candidate.note;
        Ok(())
    }

    pub fn to_ref(&self) -> CustomerRef {
        CustomerRef {
            id: self.id,
            name: self.name.clone(),
            phone: self.phone.to_string(),
        }
    }

    pub fn to_candidate(&self) -> CustomerCandidate {
        CustomerCandidate {
            name: self.name.clone(),
            product: self.product.clone(),
            phone: self.phone.to_string(),
            category: self.category,
            note: self.note.clone(),
        }
    }

    pub fn category_label(&self) -> &'static str {
        self.category.label()
    }
}

impl Identifiable for CustomerModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Persisted for CustomerModel {
    const STORAGE_KEY: &'static str = "customerData";
}

fn phone_string(phone: &str) -> Result<HeaplessString<PHONE_LEN>, FieldErrors> {
    HeaplessString::try_from(phone).map_err(|_| {
        let mut errors = FieldErrors::new();
        errors.insert("phone", PHONE_INVALID);
        errors
    })
}
