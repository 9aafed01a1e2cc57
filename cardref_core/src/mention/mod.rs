//! Extraction of `[[card name]]` mentions from user text.

mod correct;
mod quote;
mod scanner;

pub use correct::SpellCorrector;
pub use quote::strip_quoted_lines;
pub use scanner::{MAX_TOKEN_CHARS, MentionScanner, ScanState, Step};

use tracing::{debug, info};

use crate::normalize::normalize_name;

/// Texts shorter than this cannot hold a productive `[[x]]`.
pub const MIN_INPUT_CHARS: usize = 6;

/// Scanning stops once this many distinct mentions were collected.
pub const MAX_MENTIONS: usize = 7;

/// Normalize a closed token and run it through the corrector.
fn accept_token(token: &str, corrector: Option<&dyn SpellCorrector>) -> Option<String> {
    if token.is_empty() {
        return None;
    }
    let key = normalize_name(token);
    if key.is_empty() {
        debug!("Token \"{token}\" normalizes to nothing");
        return None;
    }

    let Some(corrector) = corrector else {
        return Some(key);
    };
    let corrected = corrector.correct(&key);
    if corrected != key {
        info!("Spelling fixed: {key} -> {corrected}");
    }
    (!corrected.is_empty()).then_some(corrected)
}

/// Collect up to [`MAX_MENTIONS`] distinct normalized mention keys from `text`,
/// in order of first appearance.
///
/// Never fails: unterminated brackets, oversized and empty tokens simply
/// produce nothing.
#[must_use]
pub fn extract_mentions(text: &str, corrector: Option<&dyn SpellCorrector>) -> Vec<String> {
    let mut mentions: Vec<String> = Vec::new();
    if text.chars().count() < MIN_INPUT_CHARS {
        return mentions;
    }

    let mut scanner = MentionScanner::new();
    for (prev, current) in text.chars().zip(text.chars().skip(1)) {
        match scanner.feed(prev, current) {
            Step::Continue => {}
            Step::Discarded => debug!("Discarded token longer than {MAX_TOKEN_CHARS} chars"),
            Step::Closed(token) => {
                if let Some(key) = accept_token(&token, corrector) {
                    if mentions.contains(&key) {
                        debug!("Duplicate mention: {token}");
                    } else {
                        debug!("Adding mention: {key}");
                        mentions.push(key);
                    }
                }
                if mentions.len() >= MAX_MENTIONS {
                    break;
                }
            }
        }
    }

    debug!("Got {} mentions", mentions.len());
    mentions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_order() {
        assert_eq!(
            extract_mentions("check out [[ixw]] and [[zzz]]", None),
            vec!["ixw", "zzz"]
        );
    }

    #[test]
    fn test_short_input_yields_nothing() {
        assert!(extract_mentions("[[a]]", None).is_empty());
        assert!(extract_mentions("", None).is_empty());
        assert_eq!(extract_mentions("[[ab]]", None), vec!["ab"]);
    }

    #[test]
    fn test_normalizes_and_dedups() {
        let mentions = extract_mentions(
            "[[Fire Control System]] vs [[fire-control system]] vs [[FCS]]",
            None,
        );
        assert_eq!(mentions, vec!["firecontrolsystem", "fcs"]);
    }

    #[test]
    fn test_caps_at_seven() {
        let text: String = (0..20).map(|i| format!("[[card{i}]] ")).collect();
        let mentions = extract_mentions(&text, None);
        assert_eq!(mentions.len(), MAX_MENTIONS);
        assert_eq!(mentions[0], "card0");
        assert_eq!(mentions[6], "card6");
    }

    #[test]
    fn test_duplicates_do_not_count_toward_cap() {
        let mut text = "[[same]] ".repeat(10);
        text.push_str("[[other]]");
        assert_eq!(extract_mentions(&text, None), vec!["same", "other"]);
    }

    #[test]
    fn test_overlong_token_discarded() {
        let long = "a".repeat(MAX_TOKEN_CHARS + 1);
        let text = format!("[[{long}]] [[ok]]");
        assert_eq!(extract_mentions(&text, None), vec!["ok"]);

        let exact = "b".repeat(MAX_TOKEN_CHARS);
        let text = format!("[[{exact}]]");
        assert_eq!(extract_mentions(&text, None), vec![exact]);
    }

    #[test]
    fn test_unterminated_and_stray_brackets() {
        assert!(extract_mentions("look at [[unfinished business", None).is_empty());
        assert!(extract_mentions("a stray ] bracket [ here", None).is_empty());
        assert!(extract_mentions("empty [[]] brackets [[!!]]", None).is_empty());
    }

    #[test]
    fn test_adversarial_input_is_bounded() {
        let text = format!("[[{}", "x".repeat(100_000));
        assert!(extract_mentions(&text, None).is_empty());

        let text = "[[".repeat(50_000);
        assert!(extract_mentions(&text, None).is_empty());
    }

    #[test]
    fn test_corrector_applied_before_dedup() {
        let corrector = |key: &str| {
            if key == "marksmanshp" {
                "marksmanship".to_string()
            } else {
                key.to_string()
            }
        };
        let mentions = extract_mentions(
            "[[marksmanshp]] and [[marksmanship]] and [[ptl]]",
            Some(&corrector),
        );
        assert_eq!(mentions, vec!["marksmanship", "ptl"]);
    }

    #[test]
    fn test_corrector_returning_empty_drops_mention() {
        let corrector = |_: &str| String::new();
        assert!(extract_mentions("[[anything]]", Some(&corrector)).is_empty());
    }
}
