//! Bioguide identifier extraction from legacy detail-page URLs, and validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::is_invisible_control;

/// Query marker that precedes the identifier in legacy biodisplay URLs.
const INDEX_MARKER: &str = "index=";

static BIOGUIDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][0-9]{6}$").expect("bioguide regex compiles"));

/// Pull the identifier token out of a URL such as
/// `http://bioguide.congress.gov/scripts/biodisplay.pl?index=S001177/`.
///
/// This is syntactic cleanup only: the marker is matched case-insensitively,
/// bidi control marks and trailing slashes are removed, and the first letter
/// is upper-cased because the archive capitalizes inconsistently. Use
/// [`bioguide_id_valid`] to check the result. A URL without the marker yields
/// the whole input, cleaned the same way.
pub fn bioguide_id_from_url(url: &str) -> String {
    // ASCII lowercasing keeps byte offsets stable.
    let lowered = url.to_ascii_lowercase();
    let token = match lowered.find(INDEX_MARKER) {
        Some(pos) => &url[pos + INDEX_MARKER.len()..],
        None => url,
    };
    let token = token.split(['&', '#']).next().unwrap_or(token);

    let cleaned: String = token.chars().filter(|c| !is_invisible_control(*c)).collect();
    let cleaned = cleaned.trim().trim_end_matches('/').trim_end();

    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True only for exactly one uppercase ASCII letter followed by six ASCII digits.
pub fn bioguide_id_valid(token: Option<&str>) -> bool {
    match token {
        Some(t) => BIOGUIDE_RE.is_match(t),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://bioguide.congress.gov/scripts/biodisplay.pl";

    #[test]
    fn test_from_url_trailing_slash_removed() {
        let out = bioguide_id_from_url(&format!("{}?index=S001177/", BASE));
        assert_eq!(out, "S001177");
        assert_ne!(out.chars().last(), Some('/'));
    }

    #[test]
    fn test_from_url_without_trailing_slash() {
        let out = bioguide_id_from_url(&format!("{}?index=S001177", BASE));
        assert_eq!(out, "S001177");
    }

    #[test]
    fn test_from_url_uppercases_first_char() {
        let out = bioguide_id_from_url(&format!("{}?index=e000288/", BASE));
        assert!(out.starts_with('E'));
        assert_eq!(out, "E000288");
    }

    #[test]
    fn test_from_url_strips_ltr_mark() {
        let out = bioguide_id_from_url(&format!("{}?index=g000386\u{200E}/", BASE));
        assert_eq!(out, "G000386");
    }

    #[test]
    fn test_from_url_marker_case_insensitive() {
        let out = bioguide_id_from_url(&format!("{}?INDEX=k000362", BASE));
        assert_eq!(out, "K000362");
    }

    #[test]
    fn test_from_url_stops_at_next_param() {
        let out = bioguide_id_from_url(&format!("{}?index=K000362&x=1", BASE));
        assert_eq!(out, "K000362");
    }

    #[test]
    fn test_from_url_without_marker_does_not_panic() {
        assert_eq!(
            bioguide_id_from_url("http://young.house.gov/"),
            "Http://young.house.gov"
        );
        assert_eq!(bioguide_id_from_url(""), "");
    }

    #[test]
    fn test_valid_none_is_false() {
        assert!(!bioguide_id_valid(None));
    }

    #[test]
    fn test_valid_true() {
        assert!(bioguide_id_valid(Some("K000362")));
    }

    #[test]
    fn test_valid_rejects_surrounding_chars() {
        assert!(!bioguide_id_valid(Some("aK000362z")));
        assert!(!bioguide_id_valid(Some("K000362 ")));
    }

    #[test]
    fn test_valid_rejects_url() {
        assert!(!bioguide_id_valid(Some("http://young.house.gov")));
    }

    #[test]
    fn test_valid_rejects_lowercase_initial() {
        assert!(!bioguide_id_valid(Some("r000515")));
    }

    #[test]
    fn test_valid_rejects_non_ascii_digits() {
        assert!(!bioguide_id_valid(Some("K00036\u{0662}")));
    }

    #[test]
    fn test_extracted_then_validated() {
        let out = bioguide_id_from_url(&format!("{}?index=r000515/", BASE));
        assert!(bioguide_id_valid(Some(&out)));
    }
}
