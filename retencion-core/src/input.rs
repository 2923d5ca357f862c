//! Input normalization for the total amount field.
//!
//! Two independent defense layers keep the calculator's input well formed:
//! the display layer rejects individual keystrokes that fail
//! [`is_allowed_char`], and [`sanitize`] cleans the full field content on
//! every edit. Both are required: pasted or IME-composed text never passes
//! through the keystroke filter.

use tracing::warn;

/// Returns `true` for characters permitted in the total field.
///
/// Only ASCII digits and the decimal point are accepted. The display layer
/// consumes any other key event before it reaches the field.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Normalizes raw field content into a syntactically valid decimal string.
///
/// Removes every character that is not an ASCII digit or a decimal point.
/// If more than one point remains, the first is kept as the separator and
/// the digits after the others are concatenated onto the fraction. Always
/// returns a string, possibly empty; there are no error conditions.
///
/// # Examples
///
/// ```
/// use retencion_core::input::sanitize;
///
/// assert_eq!(sanitize("12.34.56"), "12.3456");
/// assert_eq!(sanitize("abc123"), "123");
/// assert_eq!(sanitize("$1,234.50"), "1234.50");
/// assert_eq!(sanitize(""), "");
/// ```
pub fn sanitize(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| is_allowed_char(*c)).collect();

    match cleaned.split_once('.') {
        Some((integer, rest)) => {
            let fraction: String = rest.chars().filter(char::is_ascii_digit).collect();
            format!("{integer}.{fraction}")
        }
        None => cleaned,
    }
}

/// Parses a sanitized string into a total amount.
///
/// Returns `None` for empty input, or when the string still fails to parse
/// (a lone `"."` is the only such case after [`sanitize`]); a parse failure
/// logs a warning. The caller treats `None` as "nothing to display".
pub fn parse_total(sanitized: &str) -> Option<f64> {
    if sanitized.is_empty() {
        return None;
    }
    sanitized.parse().map_or_else(
        |e| {
            warn!(input = %sanitized, "invalid total: {}", e);
            None
        },
        Some,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn is_allowed_char_accepts_digits_and_point() {
        assert!(is_allowed_char('0'));
        assert!(is_allowed_char('9'));
        assert!(is_allowed_char('.'));
    }

    #[test]
    fn is_allowed_char_rejects_everything_else() {
        assert!(!is_allowed_char('a'));
        assert!(!is_allowed_char(','));
        assert!(!is_allowed_char('-'));
        assert!(!is_allowed_char(' '));
        assert!(!is_allowed_char('$'));
    }

    #[test]
    fn sanitize_strips_non_numeric_characters() {
        assert_eq!(sanitize("abc123"), "123");
        assert_eq!(sanitize("$1,234.50"), "1234.50");
        assert_eq!(sanitize("12 34"), "1234");
    }

    #[test]
    fn sanitize_keeps_only_first_decimal_point() {
        assert_eq!(sanitize("12.34.56"), "12.3456");
        assert_eq!(sanitize("1.2.3"), "1.23");
        assert_eq!(sanitize("..12"), ".12");
    }

    #[test]
    fn sanitize_passes_well_formed_input_through() {
        assert_eq!(sanitize("1234.56"), "1234.56");
        assert_eq!(sanitize("0"), "0");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn parse_total_returns_none_for_empty() {
        assert_eq!(parse_total(""), None);
    }

    #[test]
    fn parse_total_returns_none_for_lone_point() {
        assert_eq!(parse_total("."), None);
    }

    #[test]
    fn parse_total_parses_sanitized_amounts() {
        assert_eq!(parse_total("1234.56"), Some(1234.56));
        assert_eq!(parse_total("0"), Some(0.0));
        assert_eq!(parse_total(".5"), Some(0.5));
        assert_eq!(parse_total("100."), Some(100.0));
    }
}
