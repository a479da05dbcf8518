pub mod activity_log;
pub mod customer;
pub mod identifiable;
pub mod persisted;

// Re-exports
pub use activity_log::*;
pub use customer::*;
pub use identifiable::*;
pub use persisted::*;
