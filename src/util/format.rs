//! Display formatting for calculator figures (en-US grouping, USD-like).

/// Nearest integer with `,` thousands separators. Used for user counts and
/// whole-dollar revenue figures.
pub fn format_count(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&format!("{:.0}", rounded.abs())))
}

/// Revenue figures are shown without a fractional part.
pub fn format_revenue(value: f64) -> String {
    format_count(value)
}

/// Exactly two fractional digits with `,` thousands separators. Halves round
/// away from zero, matching en-US number formatting in browsers.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() / 100.0;
    let fixed = format!("{cents:.2}");
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{}.{fraction}", group_thousands(whole))
}

/// Price as shown in the fetched preview, e.g. `$19.99`.
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_rounded_and_grouped() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(999.4), "999");
        assert_eq!(format_count(999.5), "1,000");
        assert_eq!(format_count(40_000.0), "40,000");
        assert_eq!(format_count(1_234_567.0), "1,234,567");
    }

    #[test]
    fn revenue_scenario_figures() {
        assert_eq!(format_revenue(399_600.0), "399,600");
        assert_eq!(format_revenue(176_223.6), "176,224");
    }

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(format_currency(88_111.8), "88,111.80");
        assert_eq!(format_currency(58_741.2), "58,741.20");
        assert_eq!(format_currency(0.5), "0.50");
        assert_eq!(format_currency(1_000_000.0), "1,000,000.00");
        assert_eq!(format_currency(-1234.5), "-1,234.50");
    }

    #[test]
    fn currency_halves_round_away_from_zero() {
        assert_eq!(format_currency(1000.125), "1,000.13");
        assert_eq!(format_currency(0.375), "0.38");
        assert_eq!(format_currency(-2.5), "-2.50");
    }

    #[test]
    fn preview_price() {
        assert_eq!(format_price(9.99), "$9.99");
        assert_eq!(format_price(0.0), "$0.00");
    }
}
