//! Withholding breakdown calculations for tax-inclusive invoice totals.
//!
//! This module derives the six amounts a payer needs when settling an
//! invoice under the Ecuadorian general regime: the tax-exclusive base, the
//! VAT component, the two withholdings retained on behalf of the tax
//! authority, their sum, and the net amount actually paid out.
//!
//! # Breakdown Structure
//!
//! | Step | Amount              | Derivation                              |
//! |------|---------------------|-----------------------------------------|
//! | 1    | Subtotal            | total / (1 + VAT rate)                  |
//! | 2    | VAT                 | total - subtotal                        |
//! | 3    | Income withholding  | subtotal × income withholding rate      |
//! | 4    | VAT withholding     | VAT × VAT withholding rate              |
//! | 5    | Total withholdings  | income withholding + VAT withholding    |
//! | 6    | Net payable         | total - total withholdings              |
//!
//! All six values are unrounded IEEE-754 doubles; rounding is applied only
//! at display time by [`format_currency`](crate::format::format_currency).
//!
//! # Example
//!
//! ```
//! use retencion_core::TaxRegimeConfig;
//! use retencion_core::calculations::WithholdingCalculator;
//!
//! let calculator = WithholdingCalculator::new(TaxRegimeConfig::default());
//! let breakdown = calculator.calculate(100.0).unwrap();
//!
//! assert_eq!(breakdown.subtotal, 100.0 / 1.15);
//! assert_eq!(breakdown.vat_amount, 100.0 - breakdown.subtotal);
//! assert_eq!(breakdown.net_payable, 100.0 - breakdown.total_withholdings);
//!
//! // Zero, negative, and non-finite totals produce no breakdown.
//! assert!(calculator.calculate(0.0).is_none());
//! assert!(calculator.calculate(-5.0).is_none());
//! assert!(calculator.calculate(f64::NAN).is_none());
//! ```

use crate::TaxRegimeConfig;
use crate::models::TaxBreakdown;

/// Calculator for invoice withholding breakdowns.
///
/// Encapsulates the regime rates and derives a [`TaxBreakdown`] from a
/// tax-inclusive total. Stateless apart from the fixed configuration; every
/// call recomputes from scratch.
#[derive(Debug, Clone)]
pub struct WithholdingCalculator {
    config: TaxRegimeConfig,
}

impl WithholdingCalculator {
    /// Creates a new calculator with the given regime rates.
    ///
    /// The configuration is expected to have been validated at startup via
    /// [`TaxRegimeConfig::validate`].
    pub fn new(config: TaxRegimeConfig) -> Self {
        Self { config }
    }

    /// Derives the full withholding breakdown for a tax-inclusive total.
    ///
    /// This is the main entry point. Returns `None` when there is nothing
    /// to display: a total that is not finite, zero, or negative. Absence
    /// of a result is not an error; the display layer reacts by hiding the
    /// results panel.
    ///
    /// The computation is pure and deterministic: identical input yields a
    /// bit-identical breakdown.
    pub fn calculate(
        &self,
        total: f64,
    ) -> Option<TaxBreakdown> {
        if !total.is_finite() || total <= 0.0 {
            return None;
        }

        let subtotal = self.subtotal(total);
        let vat_amount = self.vat_amount(total, subtotal);
        let income_withholding = self.income_withholding(subtotal);
        let vat_withholding = self.vat_withholding(vat_amount);
        let total_withholdings = self.total_withholdings(income_withholding, vat_withholding);
        let net_payable = self.net_payable(total, total_withholdings);

        Some(TaxBreakdown {
            subtotal,
            vat_amount,
            income_withholding,
            vat_withholding,
            total_withholdings,
            net_payable,
        })
    }

    /// Tax-exclusive base amount (step 1).
    fn subtotal(
        &self,
        total: f64,
    ) -> f64 {
        total / (1.0 + self.config.vat_rate)
    }

    /// VAT component (step 2).
    fn vat_amount(
        &self,
        total: f64,
        subtotal: f64,
    ) -> f64 {
        total - subtotal
    }

    /// Income withholding on the subtotal (step 3).
    fn income_withholding(
        &self,
        subtotal: f64,
    ) -> f64 {
        subtotal * self.config.income_withholding_rate
    }

    /// VAT withholding on the VAT component (step 4).
    fn vat_withholding(
        &self,
        vat_amount: f64,
    ) -> f64 {
        vat_amount * self.config.vat_withholding_rate
    }

    /// Sum of both withholdings (step 5).
    fn total_withholdings(
        &self,
        income_withholding: f64,
        vat_withholding: f64,
    ) -> f64 {
        income_withholding + vat_withholding
    }

    /// Net amount paid to the supplier (step 6).
    fn net_payable(
        &self,
        total: f64,
        total_withholdings: f64,
    ) -> f64 {
        total - total_withholdings
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::format::format_currency;

    const TOLERANCE: f64 = 1e-9;

    fn calculator() -> WithholdingCalculator {
        WithholdingCalculator::new(TaxRegimeConfig::default())
    }

    // =========================================================================
    // step helper tests
    // =========================================================================

    #[test]
    fn subtotal_divides_out_vat() {
        let result = calculator().subtotal(115.0);

        assert!((result - 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn vat_amount_is_total_minus_subtotal() {
        let result = calculator().vat_amount(115.0, 100.0);

        assert_eq!(result, 15.0);
    }

    #[test]
    fn income_withholding_applies_rate_to_subtotal() {
        let result = calculator().income_withholding(100.0);

        assert!((result - 1.75).abs() < TOLERANCE);
    }

    #[test]
    fn vat_withholding_applies_rate_to_vat() {
        let result = calculator().vat_withholding(15.0);

        assert!((result - 4.5).abs() < TOLERANCE);
    }

    #[test]
    fn total_withholdings_adds_both_components() {
        let result = calculator().total_withholdings(1.75, 4.5);

        assert_eq!(result, 6.25);
    }

    #[test]
    fn net_payable_subtracts_withholdings_from_total() {
        let result = calculator().net_payable(115.0, 6.25);

        assert_eq!(result, 108.75);
    }

    // =========================================================================
    // calculate boundary tests
    // =========================================================================

    #[test]
    fn calculate_returns_none_for_zero() {
        assert_eq!(calculator().calculate(0.0), None);
    }

    #[test]
    fn calculate_returns_none_for_negative() {
        assert_eq!(calculator().calculate(-5.0), None);
    }

    #[test]
    fn calculate_returns_none_for_nan() {
        assert_eq!(calculator().calculate(f64::NAN), None);
    }

    #[test]
    fn calculate_returns_none_for_infinity() {
        assert_eq!(calculator().calculate(f64::INFINITY), None);
        assert_eq!(calculator().calculate(f64::NEG_INFINITY), None);
    }

    #[test]
    fn calculate_accepts_smallest_positive_total() {
        assert!(calculator().calculate(f64::MIN_POSITIVE).is_some());
    }

    // =========================================================================
    // calculate (integration) tests
    // =========================================================================

    #[test]
    fn calculate_standard_invoice() {
        let breakdown = calculator().calculate(100.0).unwrap();

        assert!((breakdown.subtotal - 86.956521739130434).abs() < TOLERANCE);
        assert!((breakdown.vat_amount - 13.043478260869566).abs() < TOLERANCE);
        assert!((breakdown.income_withholding - 1.521739130434783).abs() < TOLERANCE);
        assert!((breakdown.vat_withholding - 3.913043478260870).abs() < TOLERANCE);
        assert!((breakdown.total_withholdings - 5.434782608695652).abs() < TOLERANCE);
        assert!((breakdown.net_payable - 94.565217391304348).abs() < TOLERANCE);
    }

    #[test]
    fn calculate_formats_net_payable_as_expected() {
        let breakdown = calculator().calculate(100.0).unwrap();

        assert_eq!(format_currency(breakdown.net_payable), "$94.57");
    }

    #[test]
    fn subtotal_and_vat_reassemble_the_total() {
        for total in [0.01, 1.0, 100.0, 1234.56, 99999.99, 1.0e12] {
            let breakdown = calculator().calculate(total).unwrap();

            assert!(
                (breakdown.subtotal + breakdown.vat_amount - total).abs() < TOLERANCE,
                "invariant broken for total {total}"
            );
        }
    }

    #[test]
    fn withholdings_sum_exactly() {
        let breakdown = calculator().calculate(1234.56).unwrap();

        assert_eq!(
            breakdown.total_withholdings,
            breakdown.income_withholding + breakdown.vat_withholding
        );
    }

    #[test]
    fn net_payable_is_exactly_total_minus_withholdings() {
        let total = 1234.56;
        let breakdown = calculator().calculate(total).unwrap();

        assert_eq!(breakdown.net_payable, total - breakdown.total_withholdings);
    }

    #[test]
    fn calculate_is_deterministic() {
        let first = calculator().calculate(777.77).unwrap();
        let second = calculator().calculate(777.77).unwrap();

        assert_eq!(first, second);
    }
}
