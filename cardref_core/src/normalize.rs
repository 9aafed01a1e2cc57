//! Name normalization shared by the builder and the mention scanner.

/// Lower-case `name` and keep only ASCII digits and ASCII lowercase letters.
///
/// Case, whitespace, punctuation and any non-ASCII characters are ignored, so
/// `"Fire-Control System"` and `"firecontrolsystem"` produce the same key.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        .collect()
}

/// Abbreviation key for a multi-word name: first character of every
/// whitespace-separated word, normalized.
///
/// Returns `None` for single-word names and when the abbreviation normalizes
/// to nothing (e.g. every word starts with punctuation).
#[must_use]
pub fn initialism(name: &str) -> Option<String> {
    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() < 2 {
        return None;
    }

    let letters: String = words.iter().filter_map(|w| w.chars().next()).collect();
    let key = normalize_name(&letters);
    (!key.is_empty()).then_some(key)
}

/// Remove every `"` from a display name, the form rules-text assets are keyed by.
#[must_use]
pub fn strip_quotes(name: &str) -> String {
    name.replace('"', "")
}
