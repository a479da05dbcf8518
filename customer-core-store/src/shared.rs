use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::customer_repository::CustomerRepositoryImpl;

/// Cloneable handle that serializes every caller through one lock, so the
/// phone-uniqueness check and the insert it guards can never interleave.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<CustomerRepositoryImpl>>,
}

impl SharedStore {
    pub fn new(repo: CustomerRepositoryImpl) -> Self {
        Self {
            inner: Arc::new(Mutex::new(repo)),
        }
    }

    /// Exclusive access until the guard drops. Hold it across a read and the
    /// mutation that depends on it.
    pub async fn lock(&self) -> MutexGuard<'_, CustomerRepositoryImpl> {
        self.inner.lock().await
    }
}
