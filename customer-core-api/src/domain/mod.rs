pub mod category;
pub mod candidate;
pub mod customer_ref;
pub mod field_errors;
pub mod import;
pub mod validation;

pub use category::*;
pub use candidate::*;
pub use customer_ref::*;
pub use field_errors::*;
pub use import::*;
pub use validation::*;
