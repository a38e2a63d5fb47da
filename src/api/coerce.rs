//! Raw-text to number coercion.
//!
//! Every form field arrives as free text. The contract is lenient: the
//! longest leading numeric prefix parses, anything unparseable becomes
//! zero, and the clamped variants never go negative. The signed variants
//! expose the pre-clamp value so the validation gate can reject negative
//! entries before they are flattened to zero.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Extracts the longest leading decimal-number prefix of the input.
///
/// Accepts an optional sign, digits, and at most one decimal point, after
/// trimming leading whitespace. Returns `None` when no digit is found.
/// Exponent notation is deliberately not recognized, so "1e5" parses as
/// its mantissa prefix "1".
fn leading_number(raw: &str) -> Option<&str> {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    if seen_digit { Some(&trimmed[..end]) } else { None }
}

/// Parses a currency or average field without clamping.
///
/// Unparseable input (including empty text) becomes zero.
pub fn signed_numeric_value(raw: &str) -> Decimal {
    let Some(prefix) = leading_number(raw) else {
        return Decimal::ZERO;
    };

    // Normalize prefixes Decimal's parser is stricter about than the
    // prefix scan is: "12." and ".5" are valid leading numbers.
    let prefix = prefix.strip_suffix('.').unwrap_or(prefix);
    let normalized = if let Some(rest) = prefix.strip_prefix("-.") {
        format!("-0.{rest}")
    } else if let Some(rest) = prefix.strip_prefix("+.") {
        format!("0.{rest}")
    } else if let Some(rest) = prefix.strip_prefix('.') {
        format!("0.{rest}")
    } else if let Some(rest) = prefix.strip_prefix('+') {
        rest.to_string()
    } else {
        prefix.to_string()
    };

    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

/// Parses a currency or average field, clamped to be non-negative.
///
/// # Example
///
/// ```
/// use salesfloor_engine::api::numeric_value;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(numeric_value("1200.50"), Decimal::from_str("1200.50").unwrap());
/// assert_eq!(numeric_value("12abc"), Decimal::from_str("12").unwrap());
/// assert_eq!(numeric_value(""), Decimal::ZERO);
/// assert_eq!(numeric_value("-50"), Decimal::ZERO);
/// ```
pub fn numeric_value(raw: &str) -> Decimal {
    signed_numeric_value(raw).max(Decimal::ZERO)
}

/// Parses a count field without clamping, truncating any fraction.
///
/// Truncates at the decimal point: "12.9" is 12, empty or unparseable
/// text is 0.
pub fn signed_integer_value(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end == digits_start {
        return 0;
    }
    trimmed[..end].parse::<i64>().unwrap_or(0)
}

/// Parses a count field, clamped to be non-negative.
///
/// # Example
///
/// ```
/// use salesfloor_engine::api::integer_value;
///
/// assert_eq!(integer_value("8"), 8);
/// assert_eq!(integer_value("12.9"), 12);
/// assert_eq!(integer_value("-3"), 0);
/// assert_eq!(integer_value("abc"), 0);
/// ```
pub fn integer_value(raw: &str) -> u32 {
    u32::try_from(signed_integer_value(raw).max(0)).unwrap_or(u32::MAX)
}
