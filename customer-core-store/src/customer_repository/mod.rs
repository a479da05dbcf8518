pub mod repo_impl;
pub mod create;
pub mod update;
pub mod delete;
pub mod bulk_import;
pub mod export;
pub mod query;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::CustomerRepositoryImpl;
