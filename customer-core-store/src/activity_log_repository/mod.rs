pub mod repo_impl;
pub mod append;
pub mod recent;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ActivityLogRepositoryImpl;
