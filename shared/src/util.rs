/// Thousands separator used by ru-RU number formatting (no-break space)
const GROUP_SEPARATOR: char = '\u{a0}';

/// Format a rouble amount the way the storefront shows prices: `1 234 ₽`.
pub fn format_price(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    format!("{grouped} ₽")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0 ₽");
        assert_eq!(format_price(150), "150 ₽");
        assert_eq!(format_price(1234), "1\u{a0}234 ₽");
        assert_eq!(format_price(1_234_567), "1\u{a0}234\u{a0}567 ₽");
        assert_eq!(format_price(-510), "-510 ₽");
    }
}
