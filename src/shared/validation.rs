use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating phone numbers of staff accounts
    /// Optional leading '+', then digits with spaces, dashes or parentheses
    /// - Valid: "1234567890", "+62 812-3456-7890", "(021) 555 0101"
    /// - Invalid: "phone", "12", "+", "12345678901234567890123"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9(][0-9 ()\-]{5,19}$").unwrap();

    /// Regex for the `data:<mime>;base64,` prefix browsers put in front of encoded images
    pub static ref DATA_URL_PREFIX_REGEX: Regex =
        Regex::new(r"^data:[A-Za-z0-9.+/-]*;base64,").unwrap();
}

/// Strip an optional data URL prefix and surrounding whitespace from a base64 payload
pub fn strip_data_url_prefix(payload: &str) -> &str {
    let trimmed = payload.trim();
    match DATA_URL_PREFIX_REGEX.find(trimmed) {
        Some(m) => &trimmed[m.end()..],
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("1234567890"));
        assert!(PHONE_REGEX.is_match("+62 812-3456-7890"));
        assert!(PHONE_REGEX.is_match("(021) 555 0101"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("phone"));
        assert!(!PHONE_REGEX.is_match("12"));
        assert!(!PHONE_REGEX.is_match("+"));
        assert!(!PHONE_REGEX.is_match("")); // empty
        assert!(!PHONE_REGEX.is_match("12345678901234567890123")); // too long
    }

    #[test]
    fn test_strip_data_url_prefix() {
        assert_eq!(
            strip_data_url_prefix("data:image/jpeg;base64,/9j/4AAQ"),
            "/9j/4AAQ"
        );
        assert_eq!(strip_data_url_prefix("  iVBORw0KGgo= \n"), "iVBORw0KGgo=");
        assert_eq!(strip_data_url_prefix("data:;base64,"), "");
    }
}
