pub mod custody;
pub mod settlement;
pub mod validation;

pub use custody::*;
pub use settlement::*;
pub use validation::*;
