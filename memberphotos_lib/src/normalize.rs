//! Name normalization shared by the caption parser and the roster side of matching.
//!
//! Everything here produces comparison keys only. Folded or rewritten names are
//! never handed back to callers as identifiers.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Double-quote variants the photo archive uses around nicknames.
/// The archive often pairs a curly opening quote with a straight closing one.
pub const NICKNAME_QUOTES: &[char] = &['"', '\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}'];

/// Generational suffixes dropped from given-name and surname tokens.
/// A bare `v` is left out since it collides with middle initials.
const NAME_SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv"];

/// Non-printing bidirectional-control characters.
pub fn is_invisible_control(c: char) -> bool {
    matches!(
        c,
        '\u{200E}'
            | '\u{200F}'
            | '\u{061C}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2066}'..='\u{2069}'
            | '\u{FEFF}'
    )
}

/// Strip diacritics: NFD decomposition, then drop combining marks.
pub fn fold_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Remove every nickname quote character, keeping the quoted text.
pub fn strip_nickname_quotes(s: &str) -> String {
    s.chars().filter(|c| !NICKNAME_QUOTES.contains(c)).collect()
}

/// Split a caption into the text outside the first quoted segment and the
/// quoted segment itself.
///
/// `Barr, Garland “Andy"` gives `("Barr, Garland ", Some("Andy"))`. An
/// unbalanced quote is treated as stray punctuation and dropped.
pub fn extract_nickname(s: &str) -> (String, Option<String>) {
    let Some(open) = s.find(NICKNAME_QUOTES) else {
        return (s.to_string(), None);
    };
    let open_len = s[open..].chars().next().map_or(1, char::len_utf8);
    let after_open = &s[open + open_len..];

    let Some(close) = after_open.find(NICKNAME_QUOTES) else {
        return (strip_nickname_quotes(s), None);
    };
    let close_len = after_open[close..].chars().next().map_or(1, char::len_utf8);

    let nickname = after_open[..close].trim();
    let mut outside = String::with_capacity(s.len());
    outside.push_str(&s[..open]);
    outside.push(' ');
    outside.push_str(&after_open[close + close_len..]);
    let outside = strip_nickname_quotes(&outside);

    if nickname.is_empty() {
        (outside, None)
    } else {
        (outside, Some(nickname.to_string()))
    }
}

/// Turn `Last, First Middle` into `First Middle Last`.
///
/// Splits on the first comma only. Input without a comma comes back trimmed.
pub fn reverse_names(text: &str) -> String {
    match text.split_once(',') {
        Some((surname, given)) => {
            let surname = surname.trim();
            let given = given.trim();
            if given.is_empty() {
                surname.to_string()
            } else {
                format!("{} {}", given, surname)
            }
        }
        None => text.trim().to_string(),
    }
}

/// Collapse runs of whitespace to a single space and trim.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Folded, quote-free, lowercased, whitespace-collapsed form of a name.
pub fn comparison_key(s: &str) -> String {
    let cleaned: String = fold_accents(s)
        .chars()
        .filter(|c| !is_invisible_control(*c) && !c.is_control())
        .collect();
    collapse_whitespace(&strip_nickname_quotes(&cleaned)).to_lowercase()
}

/// Normalize one name token: comparison key without trailing periods or commas.
pub fn name_token(s: &str) -> String {
    comparison_key(s)
        .trim_end_matches(['.', ','])
        .trim_start_matches(',')
        .to_string()
}

/// Split a name block into normalized tokens, dropping empties and suffixes.
pub fn name_tokens(s: &str) -> Vec<String> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .map(name_token)
        .filter(|t| !t.is_empty() && !is_name_suffix(t))
        .collect()
}

pub fn is_name_suffix(token: &str) -> bool {
    NAME_SUFFIXES.contains(&token)
}
