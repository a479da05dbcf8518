pub mod clock;
pub mod confirmation;

pub use clock::*;
pub use confirmation::*;
