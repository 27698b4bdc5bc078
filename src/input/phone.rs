//! Live US-style phone number formatting

/// Digits kept by the formatter
const MAX_DIGITS: usize = 10;

/// Reformat raw phone input as the user types.
///
/// Non-digits are dropped, then the digits are laid out progressively:
/// up to 3 as-is, up to 6 as `(DDD) DDD`, anything longer as
/// `(DDD) DDD-DDDD` with digits past the tenth discarded.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}
