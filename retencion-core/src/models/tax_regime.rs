use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when validating a tax regime configuration.
#[derive(Debug, Error, PartialEq)]
pub enum TaxRegimeError {
    /// The VAT rate must be between 0 and 1.
    #[error("VAT rate must be between 0 and 1, got {0}")]
    InvalidVatRate(f64),

    /// The income withholding rate must be between 0 and 1.
    #[error("income withholding rate must be between 0 and 1, got {0}")]
    InvalidIncomeWithholdingRate(f64),

    /// The VAT withholding rate must be between 0 and 1.
    #[error("VAT withholding rate must be between 0 and 1, got {0}")]
    InvalidVatWithholdingRate(f64),
}

/// Rate constants for a withholding regime.
///
/// Immutable and process-wide: constructed once at startup and shared for
/// the lifetime of the session. [`Default`] yields the Ecuadorian general
/// regime in force since 2024 (15% VAT, 1.75% income withholding, 30% VAT
/// withholding).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxRegimeConfig {
    /// VAT rate applied on top of the tax-exclusive base.
    pub vat_rate: f64,

    /// Withholding rate applied to the subtotal (retención en la fuente).
    pub income_withholding_rate: f64,

    /// Withholding rate applied to the VAT component (retención de IVA).
    pub vat_withholding_rate: f64,
}

impl Default for TaxRegimeConfig {
    fn default() -> Self {
        Self {
            vat_rate: 0.15,
            income_withholding_rate: 0.0175,
            vat_withholding_rate: 0.30,
        }
    }
}

impl TaxRegimeConfig {
    /// Validates the configuration values.
    ///
    /// Rates must lie in `[0, 1]` and be finite. Run once at startup; the
    /// calculator assumes a valid configuration afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`TaxRegimeError`] naming the first rate outside its valid
    /// range.
    ///
    /// # Example
    ///
    /// ```
    /// use retencion_core::{TaxRegimeConfig, TaxRegimeError};
    ///
    /// assert_eq!(TaxRegimeConfig::default().validate(), Ok(()));
    ///
    /// let broken = TaxRegimeConfig {
    ///     vat_rate: -0.15,
    ///     ..TaxRegimeConfig::default()
    /// };
    /// assert_eq!(broken.validate(), Err(TaxRegimeError::InvalidVatRate(-0.15)));
    /// ```
    pub fn validate(&self) -> Result<(), TaxRegimeError> {
        if !rate_in_range(self.vat_rate) {
            return Err(TaxRegimeError::InvalidVatRate(self.vat_rate));
        }
        if !rate_in_range(self.income_withholding_rate) {
            return Err(TaxRegimeError::InvalidIncomeWithholdingRate(
                self.income_withholding_rate,
            ));
        }
        if !rate_in_range(self.vat_withholding_rate) {
            return Err(TaxRegimeError::InvalidVatWithholdingRate(
                self.vat_withholding_rate,
            ));
        }
        Ok(())
    }
}

fn rate_in_range(rate: f64) -> bool {
    rate.is_finite() && (0.0..=1.0).contains(&rate)
}
