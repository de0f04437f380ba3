use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating phone fields
    /// Optional leading +, then digits with spaces, parens or hyphens
    /// - Valid: "+62 812-3456-7890", "(555) 123-4567", "08123456789"
    /// - Invalid: "phone", "12", "+"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 ()\-]{5,19}$").unwrap();
}

/// Emails are stored trimmed and lowercased; every lookup and uniqueness
/// check goes through this same normalization.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+62 812-3456-7890"));
        assert!(PHONE_REGEX.is_match("(555) 123-4567"));
        assert!(PHONE_REGEX.is_match("08123456789"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("phone"));
        assert!(!PHONE_REGEX.is_match("12")); // too short
        assert!(!PHONE_REGEX.is_match("+")); // no digits
        assert!(!PHONE_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Jane@Example.COM "), "jane@example.com");
        assert_eq!(normalize_email("a@b.com"), "a@b.com");
    }
}
