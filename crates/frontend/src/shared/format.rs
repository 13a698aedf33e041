//! Number formatting for tables and stat cards.

/// Formats a count with non-breaking thousands separators: 1234567 -> "1 234 567".
pub fn format_count(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('\u{00a0}');
        }
        grouped.push(ch);
    }
    if n < 0 {
        grouped.push('-');
    }
    grouped.chars().rev().collect()
}

/// Formats a money amount with two decimals: 1234.5 -> "1 234.50".
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let abs = value.abs();
    let int_part = abs.trunc() as i64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as i64;
    // Rounding cents can carry into the integer part (e.g. 1.999).
    let (int_part, cents) = if cents == 100 {
        (int_part + 1, 0)
    } else {
        (int_part, cents)
    };
    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, format_count(int_part), cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1234), "1\u{00a0}234");
        assert_eq!(format_count(1234567), "1\u{00a0}234\u{00a0}567");
        assert_eq!(format_count(-1234), "-1\u{00a0}234");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(1234.5), "1\u{00a0}234.50");
        assert_eq!(format_money(-12.34), "-12.34");
        assert_eq!(format_money(1.999), "2.00");
    }
}
