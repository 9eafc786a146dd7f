//! Price Helpers
//!
//! Price inputs are free text. Totals keep only digits and dots from each
//! value and skip anything that still does not parse.

/// Lenient price parse: `"$4.50"` -> 4.5, `"abc"` -> None
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Sum every parseable value, ignoring the rest
pub fn sum_prices<I, S>(values: I) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter_map(|v| parse_price(v.as_ref()))
        .sum()
}

/// Two-decimal money text without currency symbol; empty for non-finite input
pub fn format_money(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_parse_price_strips_noise() {
        assert_eq!(parse_price("4.50"), Some(4.5));
        assert_eq!(parse_price("$ 12"), Some(12.0));
        assert_eq!(parse_price(".5"), Some(0.5));
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("1.2.3"), None);
        assert_eq!(parse_price("."), None);
    }

    #[test]
    fn test_sum_prices_ignores_invalid() {
        let mut prices = BTreeMap::new();
        prices.insert("3".to_string(), "4.50".to_string());
        prices.insert("x".to_string(), "abc".to_string());
        assert_eq!(format_money(sum_prices(prices.values())), "4.50");
    }

    #[test]
    fn test_sum_prices_empty() {
        assert_eq!(sum_prices(Vec::<String>::new()), 0.0);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(2.5), "2.50");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(f64::NAN), "");
    }
}
