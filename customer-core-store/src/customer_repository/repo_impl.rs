use chrono::{DateTime, Utc};
use customer_core_api::error::{StorageError, StorageResult};
use customer_core_api::service::clock::Clock;
use customer_core_db::models::activity_log::ActivityLogModel;
use customer_core_db::models::customer::CustomerModel;
use customer_core_db::repository::load::load_collection;
use customer_core_db::repository::save::save_collection;
use customer_core_db::repository::storage::Storage;
use std::collections::HashSet;
use std::sync::Arc;

use crate::activity_log_repository::ActivityLogRepositoryImpl;
use crate::config::{ConfigError, StoreConfig};
use crate::outcome::OpenReport;

/// Owner of the canonical customer collection and its activity log.
///
/// The collection is ordered newest first: creates and imports insert at the
/// front, updates keep their position. Phones are unique at all times.
pub struct CustomerRepositoryImpl {
    pub(super) records: Vec<CustomerModel>,
    pub(super) activity_log: ActivityLogRepositoryImpl,
    pub(super) storage: Arc<dyn Storage>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) config: StoreConfig,
}

impl CustomerRepositoryImpl {
    /// Empty store that has not read from `storage`.
    pub fn new(
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        config: StoreConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            records: Vec::new(),
            activity_log: ActivityLogRepositoryImpl::new(storage.clone(), config.activity_capacity),
            storage,
            clock,
            config,
        })
    }

    /// Loads both collections from `storage`.
    ///
    /// Nothing found in storage is fatal: malformed blobs and records whose
    /// phone repeats an earlier record are dropped, and an unreadable
    /// collection starts empty. The report says what was lost.
    pub async fn open(
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        config: StoreConfig,
    ) -> Result<(Self, OpenReport), ConfigError> {
        config.validate()?;
        let mut report = OpenReport::default();

        let records = match load_collection::<CustomerModel>(storage.as_ref()).await {
            Ok(loaded) => {
                report.skipped_malformed += loaded.skipped;
                let (records, dropped) = drop_repeated_phones(loaded.items);
                report.skipped_duplicates = dropped;
                records
            }
            Err(e) => {
                tracing::error!(error = %e, "customer data unreadable, starting empty");
                report.load_errors.push(e);
                Vec::new()
            }
        };
        report.customers_loaded = records.len();

        let (activity_log, loaded, error) =
            ActivityLogRepositoryImpl::open(storage.clone(), config.activity_capacity).await;
        report.skipped_malformed += loaded.skipped;
        report.activities_loaded = activity_log.len();
        report.load_errors.extend(error);

        tracing::info!(
            customers = report.customers_loaded,
            activities = report.activities_loaded,
            skipped_malformed = report.skipped_malformed,
            skipped_duplicates = report.skipped_duplicates,
            "customer store opened"
        );

        Ok((
            Self {
                records,
                activity_log,
                storage,
                clock,
                config,
            },
            report,
        ))
    }

    pub fn records(&self) -> &[CustomerModel] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn activity_log(&self) -> &ActivityLogRepositoryImpl {
        &self.activity_log
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Saves the canonical collection.
    pub async fn persist(&self) -> StorageResult<()> {
        save_collection(self.storage.as_ref(), &self.records).await
    }

    /// Runs the writes that follow a mutation: the collection (when it
    /// changed) and then the activity entry. Failures are collected, never
    /// rolled back.
    pub(super) async fn commit(
        &mut self,
        records_changed: bool,
        entry: ActivityLogModel,
    ) -> Vec<StorageError> {
        let mut save_errors = Vec::new();
        if records_changed {
            if let Err(e) = self.persist().await {
                tracing::warn!(key = e.key(), error = %e, "customer data not saved");
                save_errors.push(e);
            }
        }
        if let Err(e) = self.activity_log.append(entry).await {
            tracing::warn!(key = e.key(), error = %e, "activity log not saved");
            save_errors.push(e);
        }
        save_errors
    }
}

/// Keeps the first record for every phone.
fn drop_repeated_phones(records: Vec<CustomerModel>) -> (Vec<CustomerModel>, usize) {
    let mut seen = HashSet::with_capacity(records.len());
    let mut dropped = 0;
    let kept = records
        .into_iter()
        .filter(|r| {
            if seen.insert(r.phone.clone()) {
                true
            } else {
                tracing::warn!(id = %r.id, phone = %r.phone, "dropping stored customer with repeated phone");
                dropped += 1;
                false
            }
        })
        .collect();
    (kept, dropped)
}
