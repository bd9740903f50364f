//! Monetary amounts as they travel through the workspace.
//!
//! Providers deliver amounts as display strings (`"₹50,000"`). Filtering
//! needs a number, so the label is reduced to its digits. This ignores
//! decimal points and locale separators alike: `"₹1,234.50"` reads as
//! `123450`. Keep it that way until fractional amounts are actually
//! supported upstream.

/// Currency prefix used for every rendered amount.
pub const CURRENCY_SYMBOL: char = '₹';

/// Extracts a comparable amount from a formatted label.
///
/// Every character that is not an ASCII digit is dropped and the rest is
/// read as an integer. Labels without digits yield `0`. Values too large
/// for a `u64` saturate at `u64::MAX`.
pub fn extract_amount(label: &str) -> u64 {
    label
        .chars()
        .filter(char::is_ascii_digit)
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit))
        })
}

/// Renders an amount with Indian digit grouping, e.g. `₹1,00,000`.
///
/// The last three digits form one group, every group before that has two.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("{CURRENCY_SYMBOL}{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{CURRENCY_SYMBOL}{},{tail}", groups.join(","))
}

/// Renders an amount grouped in thousands, e.g. `₹1,000,000`.
///
/// This is the shape the transaction provider uses for edge labels.
pub fn format_grouped(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push(CURRENCY_SYMBOL);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_digits_from_currency_labels() {
        assert_eq!(extract_amount("₹50,000"), 50_000);
        assert_eq!(extract_amount("₹5,000"), 5_000);
        assert_eq!(extract_amount("₹48k Deposit"), 48);
        assert_eq!(extract_amount("INR 1,00,000"), 100_000);
    }

    #[test]
    fn labels_without_digits_are_zero() {
        assert_eq!(extract_amount(""), 0);
        assert_eq!(extract_amount("Owns"), 0);
        assert_eq!(extract_amount("₹"), 0);
    }

    #[test]
    fn decimal_points_are_ignored() {
        assert_eq!(extract_amount("₹1,234.50"), 123_450);
    }

    #[test]
    fn non_ascii_digits_are_ignored() {
        // Devanagari digits are decimal digits to Unicode but not to the parser.
        assert_eq!(extract_amount("₹१२३"), 0);
        assert_eq!(extract_amount("٣7"), 7);
    }

    #[test]
    fn huge_labels_saturate() {
        assert_eq!(extract_amount("99999999999999999999999999"), u64::MAX);
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(5_000), "₹5,000");
        assert_eq!(format_inr(100_000), "₹1,00,000");
        assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_grouped(0), "₹0");
        assert_eq!(format_grouped(50_000), "₹50,000");
        assert_eq!(format_grouped(800_000), "₹800,000");
        assert_eq!(format_grouped(1_000_000), "₹1,000,000");
    }

    #[test]
    fn formatted_labels_extract_back() {
        assert_eq!(extract_amount(&format_inr(7_500_000)), 7_500_000);
        assert_eq!(extract_amount(&format_grouped(7_500_000)), 7_500_000);
    }
}
