/// Currency suffix used for Vietnamese đồng amounts.
pub const CURRENCY_SYMBOL: char = 'đ';

/// Format a number as a whole number with thousands separators.
///
/// Rounds half to even and keeps every integer digit, however large.
///
/// # Examples
///
/// ```
/// use crm_core::formatting::format_number;
///
/// assert_eq!(format_number(1234567.0), "1,234,567");
/// assert_eq!(format_number(2.5), "2");
/// assert_eq!(format_number(-9876.4), "-9,876");
/// assert_eq!(format_number(1e20), "100,000,000,000,000,000,000");
/// ```
pub fn format_number(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let grouped = group_thousands(&digits);

    if value < 0.0 && digits != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an amount of đồng as a whole number with thousands separators and
/// a trailing currency symbol.
///
/// Anything that is not strictly positive renders as `"0đ"`.
///
/// # Examples
///
/// ```
/// use crm_core::formatting::format_vnd;
///
/// assert_eq!(format_vnd(1_000_000.0), "1,000,000đ");
/// assert_eq!(format_vnd(0.0), "0đ");
/// assert_eq!(format_vnd(-5.0), "0đ");
/// ```
pub fn format_vnd(amount: f64) -> String {
    if amount > 0.0 {
        format!("{}{}", format_number(amount), CURRENCY_SYMBOL)
    } else {
        format!("0{}", CURRENCY_SYMBOL)
    }
}

/// Parse a currency string such as `"12,500,000đ"` into a number.
///
/// Every currency symbol and comma is removed before parsing. Text that still
/// does not parse, or parses to a non-finite value, counts as zero. That
/// includes digit underscores (`"1_000_000"`) and `"inf"`, so such totals
/// classify as the lowest tier rather than as a huge amount.
///
/// # Examples
///
/// ```
/// use crm_core::formatting::parse_amount;
///
/// assert_eq!(parse_amount("12,500,000đ"), 12_500_000.0);
/// assert_eq!(parse_amount("7500000"), 7_500_000.0);
/// assert_eq!(parse_amount("abcđ"), 0.0);
/// assert_eq!(parse_amount(""), 0.0);
/// ```
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|&c| c != CURRENCY_SYMBOL && c != ',')
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return 0.0;
    }
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_number ────────────────────────────────────────────────────────

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.4), "0");
    }

    #[test]
    fn test_format_number_millions() {
        assert_eq!(format_number(1_234_567.0), "1,234,567");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-9_876.0), "-9,876");
    }

    #[test]
    fn test_format_number_exact_thousands() {
        assert_eq!(format_number(1_000.0), "1,000");
    }

    #[test]
    fn test_format_number_half_rounds_to_even() {
        assert_eq!(format_number(0.5), "0");
        assert_eq!(format_number(1.5), "2");
        assert_eq!(format_number(2.5), "2");
        assert_eq!(format_number(1_000_000.5), "1,000,000");
        assert_eq!(format_number(1_000_001.5), "1,000,002");
    }

    #[test]
    fn test_format_number_beyond_u64() {
        assert_eq!(format_number(1e20), "100,000,000,000,000,000,000");
        assert_eq!(format_number(2e19), "20,000,000,000,000,000,000");
    }

    // ── format_vnd ───────────────────────────────────────────────────────────

    #[test]
    fn test_format_vnd_positive() {
        assert_eq!(format_vnd(1_000_000.0), "1,000,000đ");
        assert_eq!(format_vnd(999.0), "999đ");
    }

    #[test]
    fn test_format_vnd_rounds_to_whole_dong() {
        assert_eq!(format_vnd(1_499.6), "1,500đ");
    }

    #[test]
    fn test_format_vnd_half_dong() {
        assert_eq!(format_vnd(1_000_000.5), "1,000,000đ");
        assert_eq!(format_vnd(2.5), "2đ");
    }

    #[test]
    fn test_format_vnd_large_sum_is_not_clamped() {
        let amount = parse_amount("100,000,000,000,000,000,000đ");
        assert_eq!(format_vnd(amount), "100,000,000,000,000,000,000đ");
    }

    #[test]
    fn test_format_vnd_zero_and_negative() {
        assert_eq!(format_vnd(0.0), "0đ");
        assert_eq!(format_vnd(-1_000.0), "0đ");
    }

    // ── parse_amount ─────────────────────────────────────────────────────────

    #[test]
    fn test_parse_amount_formatted() {
        assert_eq!(parse_amount("10,000,000đ"), 10_000_000.0);
        assert_eq!(parse_amount("4,999,999đ"), 4_999_999.0);
    }

    #[test]
    fn test_parse_amount_plain_number() {
        assert_eq!(parse_amount("5000000"), 5_000_000.0);
        assert_eq!(parse_amount("1500000.5"), 1_500_000.5);
    }

    #[test]
    fn test_parse_amount_surrounding_whitespace() {
        assert_eq!(parse_amount(" 2,000,000 đ"), 2_000_000.0);
    }

    #[test]
    fn test_parse_amount_garbage_is_zero() {
        assert_eq!(parse_amount("abcđ"), 0.0);
        assert_eq!(parse_amount("10.000.000đ"), 0.0);
        assert_eq!(parse_amount("đ"), 0.0);
    }

    #[test]
    fn test_parse_amount_non_finite_is_zero() {
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn test_parse_amount_digit_underscores_are_zero() {
        assert_eq!(parse_amount("1_000_000"), 0.0);
        assert_eq!(parse_amount("20_000_000đ"), 0.0);
    }

    // ── group_thousands ──────────────────────────────────────────────────────

    #[test]
    fn test_group_thousands_short() {
        assert_eq!(group_thousands("5"), "5");
        assert_eq!(group_thousands("999"), "999");
    }

    #[test]
    fn test_group_thousands_long() {
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("12345678"), "12,345,678");
    }
}
