//! Form Validation Rules
//!
//! Pure field validators shared by the auth and filter forms. Each returns
//! `Some(message)` on failure, `None` when the value passes.

pub fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Email is required".to_string());
    }
    if value.len() < 5 || value.len() > 160 {
        return Some("Email must be 5-160 characters".to_string());
    }
    if !is_email_shaped(value) {
        return Some("Email is not valid".to_string());
    }
    None
}

pub fn validate_password(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Password is required".to_string());
    }
    if value.len() < 6 || value.len() > 160 {
        return Some("Password must be 6-160 characters".to_string());
    }
    None
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Option<String> {
    if let Some(message) = validate_password(confirm) {
        return Some(message.replace("Password", "Confirm password"));
    }
    if password != confirm {
        return Some("Passwords do not match".to_string());
    }
    None
}

pub fn validate_name(value: &str) -> Option<String> {
    if value.len() > 160 {
        return Some("Name must be at most 160 characters".to_string());
    }
    None
}

/// Price filter: when both bounds are set, max must be at least min;
/// otherwise at least one bound must be set.
pub fn validate_price_range(min: &str, max: &str) -> Option<String> {
    let valid = match (min.parse::<u64>(), max.parse::<u64>()) {
        (Ok(lo), Ok(hi)) => hi >= lo,
        _ => !min.is_empty() || !max.is_empty(),
    };
    if valid {
        None
    } else {
        Some("Price range is not valid".to_string())
    }
}

// shape `\S+@\S+\.\S+`
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    matches!(domain.rsplit_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rules() {
        assert!(validate_email("").is_some());
        assert!(validate_email("a@b").is_some());
        assert!(validate_email("not an@email.com").is_some());
        assert!(validate_email("user@@example.com").is_some());
        assert!(validate_email("user@example.com").is_none());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("").is_some());
        assert!(validate_password("12345").is_some());
        assert!(validate_password("123456").is_none());
        assert!(validate_password(&"x".repeat(161)).is_some());
    }

    #[test]
    fn test_confirm_password() {
        assert!(validate_confirm_password("secret1", "secret1").is_none());
        assert_eq!(
            validate_confirm_password("secret1", "secret2").as_deref(),
            Some("Passwords do not match")
        );
        // empty confirm reports the requiredness error, not the mismatch
        assert_eq!(
            validate_confirm_password("secret1", "").as_deref(),
            Some("Confirm password is required")
        );
    }

    #[test]
    fn test_price_range() {
        assert!(validate_price_range("100", "200").is_none());
        assert!(validate_price_range("200", "100").is_some());
        assert!(validate_price_range("100", "").is_none());
        assert!(validate_price_range("", "200").is_none());
        assert!(validate_price_range("", "").is_some());
    }

    #[test]
    fn test_name_rule() {
        assert!(validate_name("").is_none());
        assert!(validate_name(&"x".repeat(161)).is_some());
    }
}
