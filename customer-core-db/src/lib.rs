pub mod aggregate;
pub mod models;
pub mod repository;
pub mod view;

pub use models::*;
