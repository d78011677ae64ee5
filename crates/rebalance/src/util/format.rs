/// Digits of `dollars` grouped in threes: 1234567 -> "1,234,567"
fn group_thousands(dollars: u64) -> String {
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a dollar amount with separators and cents, e.g. `$48,123.45`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }
    let cents_total = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents_total > 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        group_thousands(cents_total / 100),
        cents_total % 100
    )
}

/// Format a fraction as a percentage with two decimals, e.g. `0.1012` -> `10.12%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Compact axis label form (e.g., $2.1M, $450K, $50)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}${:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(48_123.45), "$48,123.45");
        assert_eq!(format_currency(10_000.0), "$10,000.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-12.5), "-$12.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(f64::NAN), "$NaN");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.1012), "10.12%");
        assert_eq!(format_percentage(-0.5519), "-55.19%");
        assert_eq!(format_percentage(0.0), "0.00%");
    }

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(250_000.0), "$250K");
        assert_eq!(format_compact_currency(2_100_000.0), "$2.1M");
        assert_eq!(format_compact_currency(50.0), "$50");
    }
}
