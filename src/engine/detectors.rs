// Structural detectors — regex signals independent of the keyword registry.
//
// Both run over the original (non-lowercased) text: URLs are case-sensitive
// tokens, phone numbers are digit patterns. Neither can fail; text with no
// match simply yields an empty list.

use std::sync::OnceLock;

use regex_lite::Regex;

static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Extract every `http://` / `https://` token from the text.
pub fn extract_urls(text: &str) -> Vec<String> {
    let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s]+").expect("valid URL regex"));
    regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Extract Indian mobile numbers: optional `+91` prefix (with optional
/// separator), then a leading 7/8/9 and nine more digits.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    let regex = PHONE_REGEX
        .get_or_init(|| Regex::new(r"(\+91[\-\s]?)?[789]\d{9}").expect("valid phone regex"));
    regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_http_and_https_urls() {
        let urls = extract_urls("visit http://bit.ly/x and https://example.com/claim now");
        assert_eq!(urls, vec!["http://bit.ly/x", "https://example.com/claim"]);
    }

    #[test]
    fn no_urls_in_plain_text() {
        assert!(extract_urls("no links here, just words").is_empty());
    }

    #[test]
    fn bare_scheme_without_slashes_is_not_a_url() {
        assert!(extract_urls("the https protocol is mentioned").is_empty());
    }

    #[test]
    fn finds_phone_with_country_code() {
        let phones = extract_phone_numbers("Call +919876543210 today");
        assert_eq!(phones, vec!["+919876543210"]);
    }

    #[test]
    fn finds_phone_with_separator_after_prefix() {
        let phones = extract_phone_numbers("Call +91-9876543210 or +91 8123456789");
        assert_eq!(phones, vec!["+91-9876543210", "+91 8123456789"]);
    }

    #[test]
    fn finds_bare_ten_digit_number() {
        let phones = extract_phone_numbers("number is 7012345678.");
        assert_eq!(phones, vec!["7012345678"]);
    }

    #[test]
    fn ignores_numbers_starting_below_seven() {
        assert!(extract_phone_numbers("order id 6123456789").is_empty());
    }

    #[test]
    fn ignores_short_numbers() {
        assert!(extract_phone_numbers("Rs 4500 as of today").is_empty());
    }

    #[test]
    fn unusual_characters_never_panic() {
        let weird = "¡™£¢∞§¶ https://ok.in/₹ 🎉 +91\u{00a0}9876543210 \\x00";
        let _ = extract_urls(weird);
        let _ = extract_phone_numbers(weird);
    }
}
