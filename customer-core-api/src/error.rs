use std::collections::BTreeMap;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::customer_ref::CustomerRef;
use crate::domain::field_errors::FieldErrors;
use crate::domain::import::SourceRef;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    ValidationError(FieldErrors),

    #[error("Duplicate phone: {} already belongs to {}", .0.phone, .0.name)]
    DuplicatePhone(CustomerRef),

    #[error("Not found: {0}")]
    NotFound(Uuid),

    #[error("Page {requested} is outside 1..={total_pages}")]
    PageOutOfRange { requested: usize, total_pages: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a storage collaborator.
///
/// Every variant names the storage key it failed on so that a caller can
/// tell which collection may not survive a reload.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error on '{key}': {message}")]
    Serialization { key: String, message: String },

    #[error("Storage unavailable for '{key}': {message}")]
    Unavailable { key: String, message: String },
}

impl StorageError {
    pub fn key(&self) -> &str {
        match self {
            StorageError::Io { key, .. } => key,
            StorageError::Serialization { key, .. } => key,
            StorageError::Unavailable { key, .. } => key,
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportRejectReason {
    #[error("Invalid record: {0}")]
    Invalid(FieldErrors),

    #[error("Phone already belongs to customer: {}", .0.name)]
    DuplicatePhone(CustomerRef),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// One rejected candidate of a bulk import.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source_ref}: {reason}")]
pub struct ImportRowError {
    pub source_ref: SourceRef,
    /// The candidate's fields as the import source supplied them
    pub raw: BTreeMap<String, String>,
    pub reason: ImportRejectReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_key() {
        let err = StorageError::Unavailable {
            key: "customerData".to_string(),
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.key(), "customerData");
        assert_eq!(
            err.to_string(),
            "Storage unavailable for 'customerData': quota exceeded"
        );
    }

    #[test]
    fn test_import_row_error_display() {
        let err = ImportRowError {
            source_ref: SourceRef::Line(3),
            raw: BTreeMap::new(),
            reason: ImportRejectReason::UnknownCategory("gold".to_string()),
        };
        assert_eq!(err.to_string(), "line 3: Unknown category: gold");
    }
}
