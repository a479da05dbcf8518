pub mod find_by_id;
pub mod find_by_phone;
pub mod load;
pub mod pagination;
pub mod save;
pub mod storage;

// Re-exports
pub use find_by_id::*;
pub use find_by_phone::*;
pub use load::*;
pub use pagination::*;
pub use save::*;
pub use storage::*;
