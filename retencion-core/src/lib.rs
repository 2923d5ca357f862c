pub mod calculations;
pub mod format;
pub mod input;
pub mod models;

pub use calculations::WithholdingCalculator;
pub use models::*;
