/// Dollar amount with two decimals. Non-finite amounts print as `$0.00`.
pub fn money(amount: f64) -> String {
    if amount.is_finite() {
        format!("${amount:.2}")
    } else {
        "$0.00".to_string()
    }
}

pub fn sqft(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "0.00".to_string()
    }
}

/// Lowercase ASCII slug for file names: `"Fast-Trak HQ"` becomes `"fast-trak-hq"`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        "quote".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_has_two_decimals_and_no_grouping() {
        assert_eq!(money(1200.0), "$1200.00");
        assert_eq!(money(6.5), "$6.50");
        assert_eq!(money(f64::NAN), "$0.00");
    }

    #[test]
    fn slugs_collapse_separators() {
        assert_eq!(slugify("Fast-Trak HQ"), "fast-trak-hq");
        assert_eq!(slugify("  123 Main St. #4 "), "123-main-st-4");
        assert_eq!(slugify("***"), "quote");
    }
}
