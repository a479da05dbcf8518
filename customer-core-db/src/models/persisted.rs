use serde::de::DeserializeOwned;
use serde::Serialize;

/// Trait for models that are stored as a list of JSON blobs under one
/// storage key.
pub trait Persisted: Serialize + DeserializeOwned {
    /// Key of the collection in the storage collaborator
    const STORAGE_KEY: &'static str;
}
