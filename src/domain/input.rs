//! Coercion of raw form text into values the pricing engine accepts.
//!
//! Everything that reaches the engine is finite and non-negative; junk input
//! becomes `0` instead of an error so the quote always renders.

/// Parses a dimension, rate or distance typed into a form field.
///
/// Characters other than digits, `.` and `-` are dropped first, so `"$1,250"`
/// reads as `1250`. The longest leading decimal number wins (`"1.2.3"` is
/// `1.2`). Unparsable, non-finite and negative values coerce to `0`.
pub fn coerce_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();

    match leading_number(&cleaned) {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Parses a quantity field; fractional input is truncated.
pub fn coerce_quantity(raw: &str) -> u32 {
    let value = coerce_amount(raw).trunc();
    if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value as u32
    }
}

/// Parses a tier's upper bound. `None` means the tier is unbounded.
pub fn parse_tier_max(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let unbounded = trimmed.eq_ignore_ascii_case("infinity")
        || trimmed.eq_ignore_ascii_case("inf")
        || trimmed == "∞"
        || trimmed == "+";
    if unbounded {
        None
    } else {
        Some(coerce_amount(trimmed))
    }
}

fn leading_number(cleaned: &str) -> Option<f64> {
    let bytes = cleaned.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // "5." and "-.5" are valid prefixes but not valid Rust float literals.
    let literal = cleaned[..end].trim_end_matches('.');
    let literal = literal.replacen("-.", "-0.", 1);
    let literal = if literal.starts_with('.') {
        format!("0{literal}")
    } else {
        literal
    };
    literal.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(coerce_amount("48"), 48.0);
        assert_eq!(coerce_amount("12.75"), 12.75);
        assert_eq!(coerce_amount(" 42 "), 42.0);
    }

    #[test]
    fn junk_is_stripped_before_parsing() {
        assert_eq!(coerce_amount("12abc"), 12.0);
        assert_eq!(coerce_amount("$1,250.50"), 1250.5);
        assert_eq!(coerce_amount("42 mi"), 42.0);
    }

    #[test]
    fn longest_leading_number_wins() {
        assert_eq!(coerce_amount("1.2.3"), 1.2);
        assert_eq!(coerce_amount("12-3"), 12.0);
        assert_eq!(coerce_amount("5."), 5.0);
        assert_eq!(coerce_amount(".5"), 0.5);
    }

    #[test]
    fn unparsable_and_negative_become_zero() {
        assert_eq!(coerce_amount(""), 0.0);
        assert_eq!(coerce_amount("abc"), 0.0);
        assert_eq!(coerce_amount("-"), 0.0);
        assert_eq!(coerce_amount("."), 0.0);
        assert_eq!(coerce_amount("-5"), 0.0);
        assert_eq!(coerce_amount("-.5"), 0.0);
    }

    #[test]
    fn huge_input_stays_finite() {
        let raw = "9".repeat(400);
        assert_eq!(coerce_amount(&raw), 0.0);
    }

    #[test]
    fn quantity_truncates() {
        assert_eq!(coerce_quantity("3"), 3);
        assert_eq!(coerce_quantity("2.9"), 2);
        assert_eq!(coerce_quantity("x"), 0);
        assert_eq!(coerce_quantity("-4"), 0);
    }

    #[test]
    fn tier_max_understands_unbounded_sentinels() {
        assert_eq!(parse_tier_max("Infinity"), None);
        assert_eq!(parse_tier_max(" infinity "), None);
        assert_eq!(parse_tier_max("inf"), None);
        assert_eq!(parse_tier_max("+"), None);
        assert_eq!(parse_tier_max("499"), Some(499.0));
        assert_eq!(parse_tier_max(""), Some(0.0));
    }
}
