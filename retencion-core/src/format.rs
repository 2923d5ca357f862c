//! Currency display formatting.
//!
//! Formatting happens only at display time; the rounded strings produced
//! here never feed back into a calculation.

/// Formats an amount as a currency string.
///
/// Renders a leading dollar sign, exactly two decimal digits, and a comma
/// as thousands separator for the integer part. Amounts are expected to be
/// non-negative; a sign, if present, is kept ahead of the grouped digits.
///
/// # Examples
///
/// ```
/// use retencion_core::format::format_currency;
///
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(0.0), "$0.00");
/// assert_eq!(format_currency(1234567.891), "$1,234,567.89");
/// ```
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn format_currency_renders_two_decimal_digits() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(7.0), "$7.00");
    }

    #[test]
    fn format_currency_rounds_to_cents() {
        assert_eq!(format_currency(94.56521739130434), "$94.57");
        assert_eq!(format_currency(86.95652173913044), "$86.96");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(100.0), "$100.00");
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(999999.0), "$999,999.00");
        assert_eq!(format_currency(1000000.0), "$1,000,000.00");
    }

    #[test]
    fn format_currency_leaves_short_integers_ungrouped() {
        assert_eq!(format_currency(999.99), "$999.99");
        assert_eq!(format_currency(0.5), "$0.50");
    }

    #[test]
    fn format_currency_keeps_sign_before_grouped_digits() {
        assert_eq!(format_currency(-1234.5), "$-1,234.50");
        assert_eq!(format_currency(-123.0), "$-123.00");
    }
}
