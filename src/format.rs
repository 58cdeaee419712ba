//! Display Formatting Helpers

/// Group digits with dot separators: `1234567` → `"1.234.567"`
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Compact social-style count: `12300` → `"12,3k"`, `2_500_000` → `"2,5m"`
pub fn format_social(amount: u64) -> String {
    if amount < 1_000 {
        return amount.to_string();
    }
    let (scaled, suffix) = if amount < 1_000_000 {
        (amount as f64 / 1_000.0, "k")
    } else {
        (amount as f64 / 1_000_000.0, "m")
    };
    // one decimal, rounded, with a comma as the decimal separator
    let rounded = (scaled * 10.0).round() / 10.0;
    if (rounded - rounded.trunc()).abs() < f64::EPSILON {
        format!("{}{suffix}", rounded.trunc() as u64)
    } else {
        format!("{rounded:.1}{suffix}").replace('.', ",")
    }
}

/// Product URL slug: name with special characters stripped and whitespace
/// collapsed to dashes, suffixed with `-i-{id}` so the id survives any
/// name mangling.
pub fn generate_name_id(name: &str, id: &str) -> String {
    let mut slug = String::with_capacity(name.len() + id.len() + 3);
    let mut last_dash = true;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        } else if ch.is_alphanumeric() || ch == '-' {
            slug.push(ch);
            last_dash = false;
        }
        // everything else is dropped
    }
    let slug = slug.trim_end_matches('-');
    format!("{slug}-i-{id}")
}

/// Recover the id from a `name-i-id` slug
pub fn extract_id_from_slug(slug: &str) -> Option<&str> {
    slug.rsplit_once("-i-")
        .map(|(_, id)| id)
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "0");
        assert_eq!(format_currency(999), "999");
        assert_eq!(format_currency(1_000), "1.000");
        assert_eq!(format_currency(1_234_567), "1.234.567");
    }

    #[test]
    fn test_format_social() {
        assert_eq!(format_social(999), "999");
        assert_eq!(format_social(1_000), "1k");
        assert_eq!(format_social(12_300), "12,3k");
        assert_eq!(format_social(2_500_000), "2,5m");
    }

    #[test]
    fn test_generate_name_id() {
        assert_eq!(
            generate_name_id("Áo thun nam", "60afb2c76ef5b902180aacba"),
            "Áo-thun-nam-i-60afb2c76ef5b902180aacba"
        );
        assert_eq!(generate_name_id("50% off! (hot)", "x1"), "50-off-hot-i-x1");
    }

    #[test]
    fn test_extract_id_from_slug() {
        assert_eq!(
            extract_id_from_slug("Áo-thun-nam-i-60afb2c76ef5b902180aacba"),
            Some("60afb2c76ef5b902180aacba")
        );
        assert_eq!(extract_id_from_slug("no-id-here"), None);
        assert_eq!(extract_id_from_slug("dangling-i-"), None);
    }

    #[test]
    fn test_slug_round_trip() {
        let slug = generate_name_id("Điện thoại Samsung", "abc123");
        assert_eq!(extract_id_from_slug(&slug), Some("abc123"));
    }
}
