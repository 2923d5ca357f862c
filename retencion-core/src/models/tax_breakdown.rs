use serde::{Deserialize, Serialize};

/// Derived amounts for a single tax-inclusive invoice total.
///
/// Produced by [`WithholdingCalculator::calculate`] and consumed by the
/// display layer. Replaced wholesale on every input change; no history is
/// kept. Values are unrounded doubles; rounding happens only at display
/// time via [`format_currency`].
///
/// [`WithholdingCalculator::calculate`]: crate::calculations::WithholdingCalculator::calculate
/// [`format_currency`]: crate::format::format_currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Tax-exclusive base amount (total / (1 + VAT rate)).
    pub subtotal: f64,

    /// VAT component (total - subtotal).
    pub vat_amount: f64,

    /// Income withholding (retención en la fuente) on the subtotal.
    pub income_withholding: f64,

    /// VAT withholding (retención de IVA) on the VAT component.
    pub vat_withholding: f64,

    /// Sum of the two withholdings.
    pub total_withholdings: f64,

    /// Amount actually paid to the supplier (total - total withholdings).
    pub net_payable: f64,
}
