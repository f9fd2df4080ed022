//! Number and currency labels with thousands grouping.

const GROUP_SEPARATOR: char = ',';
const CURRENCY_SYMBOL: char = '$';

/// Formats an integer with `,` every three digits: `1234567` -> `1,234,567`.
pub fn group_digits(value: u64) -> String {
    group_digit_str(&value.to_string())
}

fn group_digit_str(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

/// Label for a count such as backers.
pub fn format_count(value: u64) -> String {
    group_digits(value)
}

/// Currency label: `$` plus grouped whole units, with cents only when non-zero.
///
/// Whole units come straight from the `f64`, so amounts beyond the `u64`
/// range keep every digit. Negative and non-finite inputs render as `$0`.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    };
    let mut whole = amount.trunc();
    let mut fraction = ((amount - whole) * 100.0).round() as u8;
    if fraction >= 100 {
        whole += 1.0;
        fraction = 0;
    }

    let mut label = String::new();
    label.push(CURRENCY_SYMBOL);
    label.push_str(&group_digit_str(&format!("{whole:.0}")));
    if fraction > 0 {
        label.push_str(&format!(".{fraction:02}"));
    }
    label
}

#[cfg(test)]
mod tests {
    use super::{format_count, format_currency, group_digits};

    #[test]
    fn groups_every_three_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(12_345), "12,345");
        assert_eq!(group_digits(1_234_567), "1,234,567");
        assert_eq!(format_count(100_000), "100,000");
    }

    #[test]
    fn currency_omits_zero_cents() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(1_234.0), "$1,234");
        assert_eq!(format_currency(800_268.0), "$800,268");
    }

    #[test]
    fn currency_keeps_two_digit_cents() {
        assert_eq!(format_currency(1_234.5), "$1,234.50");
        assert_eq!(format_currency(10.05), "$10.05");
    }

    #[test]
    fn currency_guards_invalid_amounts() {
        assert_eq!(format_currency(-3.0), "$0");
        assert_eq!(format_currency(f64::NAN), "$0");
        assert_eq!(format_currency(f64::INFINITY), "$0");
    }

    #[test]
    fn currency_rounds_cents_up_into_whole_units() {
        assert_eq!(format_currency(0.999), "$1");
        assert_eq!(format_currency(41.996), "$42");
    }

    #[test]
    fn currency_keeps_digits_past_u64_range() {
        assert_eq!(format_currency(1e20), "$100,000,000,000,000,000,000");
        assert_eq!(format_currency(2e17), "$200,000,000,000,000,000");
    }
}
