pub mod export;
pub mod search;
pub mod sort;
pub mod view_state;

pub use export::*;
pub use search::*;
pub use sort::*;
pub use view_state::*;
