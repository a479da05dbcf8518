pub mod counts;
pub mod dashboard;
pub mod growth;
pub mod products;
pub mod time_window;

pub use counts::*;
pub use dashboard::*;
pub use growth::*;
pub use products::*;
pub use time_window::*;
