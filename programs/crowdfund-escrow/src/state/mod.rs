pub mod campaign;
pub mod contribution;

pub use campaign::*;
pub use contribution::*;
