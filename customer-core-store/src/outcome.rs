use customer_core_api::error::StorageError;

/// Result of a mutation that was applied in memory.
///
/// `save_errors` lists the persistence failures that followed. The mutation
/// stands either way, but a non-empty list means a reload may not see it.
#[derive(Debug)]
pub struct Committed<T> {
    pub value: T,
    pub save_errors: Vec<StorageError>,
}

impl<T> Committed<T> {
    pub fn new(value: T, save_errors: Vec<StorageError>) -> Self {
        Self { value, save_errors }
    }

    /// True when every write after the mutation succeeded.
    pub fn is_durable(&self) -> bool {
        self.save_errors.is_empty()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

#[derive(Debug)]
pub enum DeleteOutcome<T> {
    Deleted(Committed<T>),
    /// The confirmation collaborator said no; nothing changed
    Declined,
}

impl<T> DeleteOutcome<T> {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted(_))
    }
}

/// What `open` found in storage.
#[derive(Debug, Default)]
pub struct OpenReport {
    pub customers_loaded: usize,
    pub activities_loaded: usize,
    /// Blobs that did not deserialize, across both collections
    pub skipped_malformed: usize,
    /// Stored customers dropped because an earlier one had the same phone
    pub skipped_duplicates: usize,
    /// Collections that could not be read at all and started empty
    pub load_errors: Vec<StorageError>,
}

impl OpenReport {
    pub fn is_clean(&self) -> bool {
        self.skipped_malformed == 0 && self.skipped_duplicates == 0 && self.load_errors.is_empty()
    }
}
