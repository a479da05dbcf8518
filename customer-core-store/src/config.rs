use customer_core_db::view::view_state::ViewState;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const ENV_PAGE_SIZE: &str = "CUSTOMER_CORE_PAGE_SIZE";
pub const ENV_ACTIVITY_CAPACITY: &str = "CUSTOMER_CORE_ACTIVITY_CAPACITY";
pub const ENV_TOP_PRODUCTS: &str = "CUSTOMER_CORE_TOP_PRODUCTS";
pub const ENV_DATA_DIR: &str = "CUSTOMER_CORE_DATA_DIR";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Tunables of the customer store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Rows per table page
    pub page_size: usize,
    /// Activity entries kept; older ones are evicted
    pub activity_capacity: usize,
    /// Products shown in the popularity chart
    pub top_products: usize,
    /// Page buttons shown by the pager
    pub max_visible_pages: usize,
    /// Directory for `JsonDirStorage`; `None` means keep data in memory
    pub data_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            activity_capacity: 50,
            top_products: 5,
            max_visible_pages: 5,
            data_dir: None,
        }
    }
}

impl StoreConfig {
    /// Defaults overlaid with `CUSTOMER_CORE_*` environment variables. A
    /// missing or unparsable variable keeps the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            page_size: env_or(ENV_PAGE_SIZE, defaults.page_size),
            activity_capacity: env_or(ENV_ACTIVITY_CAPACITY, defaults.activity_capacity),
            top_products: env_or(ENV_TOP_PRODUCTS, defaults.top_products),
            max_visible_pages: defaults.max_visible_pages,
            data_dir: std::env::var_os(ENV_DATA_DIR).map(PathBuf::from),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Zero("page_size"));
        }
        if self.activity_capacity == 0 {
            return Err(ConfigError::Zero("activity_capacity"));
        }
        if self.max_visible_pages == 0 {
            return Err(ConfigError::Zero("max_visible_pages"));
        }
        Ok(())
    }

    /// Initial table state for this configuration.
    pub fn view_state(&self) -> ViewState {
        ViewState::new(self.page_size)
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(variable = name, value = %raw, "ignoring unparsable setting");
            default
        }),
        Err(_) => default,
    }
}
