//! Invoice withholding calculations.
//!
//! This module provides the calculation logic for deriving a withholding
//! breakdown from a tax-inclusive invoice total.

pub mod withholding;

pub use withholding::WithholdingCalculator;
