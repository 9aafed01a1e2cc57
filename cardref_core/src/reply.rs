//! Matching mentions against the knowledge base and assembling the reply body.

use std::sync::Arc;
use tracing::{debug, info};

use crate::error::ReplyConfigError;
use crate::knowledge::KnowledgeBase;
use crate::mention::{SpellCorrector, extract_mentions, strip_quoted_lines};

/// Signature template used when the configuration does not provide one.
/// `{username}` is replaced by the bot's account name.
pub const DEFAULT_SIGNATURE_TEMPLATE: &str =
    "\nCall me with up to 7 [[cardname]], send [[info]] for help (https://t.me/{username})";

/// Mentions shorter than this never fall back to prefix matching.
const MIN_PREFIX_CHARS: usize = 3;

/// Replace every blank line (`"\n\n"`) with a markdown soft break.
#[must_use]
pub fn collapse_paragraphs(text: &str) -> String {
    text.replace("\n\n", "    \n")
}

/// Everything the assembly stage needs besides the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyConfig {
    signature: String,
}

impl ReplyConfig {
    /// # Errors
    /// Rejects a signature containing `"\n\n"`, which the collapse step would rewrite.
    pub fn new(signature: impl Into<String>) -> Result<Self, ReplyConfigError> {
        let signature = signature.into();
        if signature.contains("\n\n") {
            return Err(ReplyConfigError::DoubledBreak);
        }
        Ok(Self { signature })
    }

    /// Fill `{username}` in `template`.
    pub fn from_template(template: &str, username: &str) -> Result<Self, ReplyConfigError> {
        Self::new(template.replace("{username}", username))
    }

    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            signature: DEFAULT_SIGNATURE_TEMPLATE.replace("{username}", "cardref_bot"),
        }
    }
}

/// Turns comment text into a reply body. Holds no per-call state, so one
/// instance can serve any number of threads.
#[derive(Clone, Default)]
pub struct Resolver {
    reply: ReplyConfig,
    corrector: Option<Arc<dyn SpellCorrector>>,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("reply", &self.reply)
            .field("corrector", &self.corrector.is_some())
            .finish()
    }
}

impl Resolver {
    #[must_use]
    pub fn new(reply: ReplyConfig) -> Self {
        Self {
            reply,
            corrector: None,
        }
    }

    #[must_use]
    pub fn with_corrector(mut self, corrector: impl SpellCorrector + 'static) -> Self {
        let corrector: Arc<dyn SpellCorrector> = Arc::new(corrector);
        self.corrector = Some(corrector);
        self
    }

    /// Distinct normalized mention keys in `text`.
    #[must_use]
    pub fn mentions(&self, text: &str) -> Vec<String> {
        extract_mentions(text, self.corrector.as_deref())
    }

    /// Reply body for already extracted mention keys.
    ///
    /// An exact key match wins; otherwise, for keys of at least three
    /// characters, every entry whose key starts with the mention is used.
    /// Unmatched mentions are skipped. The signature is only added when
    /// something matched, so no match at all yields an empty string.
    #[must_use]
    pub fn render(&self, kb: &KnowledgeBase, mentions: &[String]) -> String {
        let mut body = String::new();
        for mention in mentions {
            if let Some(block) = kb.get(mention) {
                debug!("Exact match for {mention}");
                body.push_str(block);
                continue;
            }
            if mention.len() < MIN_PREFIX_CHARS {
                debug!("No match for {mention}, too short for prefix search");
                continue;
            }

            let mut matched = 0usize;
            for (key, block) in kb.prefix_matches(mention) {
                debug!("Prefix match for {mention}: {key}");
                body.push_str(block);
                matched += 1;
            }
            if matched == 0 {
                debug!("No match for {mention}");
            }
        }

        if !body.is_empty() {
            body.push_str(&self.reply.signature);
        }
        collapse_paragraphs(&body)
    }

    /// Extract mentions from `text` and render them.
    #[must_use]
    pub fn resolve(&self, kb: &KnowledgeBase, text: &str) -> String {
        let mentions = self.mentions(text);
        if !mentions.is_empty() {
            info!("Resolving {} mentions: {}", mentions.len(), mentions.join(", "));
        }
        self.render(kb, &mentions)
    }

    /// [`Self::resolve`] after dropping quoted lines from a chat message.
    #[must_use]
    pub fn reply_for_message(&self, kb: &KnowledgeBase, text: &str) -> String {
        self.resolve(kb, &strip_quoted_lines(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> Result<Resolver, ReplyConfigError> {
        Ok(Resolver::new(ReplyConfig::new("\n~ sig")?))
    }

    #[test]
    fn test_exact_match_and_silent_skip() -> Result<(), ReplyConfigError> {
        let kb = KnowledgeBase::from_entries([("ixw", "**IXW**\n\n")]);
        let body = resolver()?.resolve(&kb, "check out [[ixw]] and [[zzz]]");
        assert_eq!(body, "**IXW**    \n\n~ sig");
        Ok(())
    }

    #[test]
    fn test_exact_match_suppresses_prefix() -> Result<(), ReplyConfigError> {
        let kb = KnowledgeBase::from_entries([("ixw", "E"), ("ixwing", "A"), ("ixwang", "B")]);
        let body = resolver()?.render(&kb, &["ixw".to_string()]);
        assert_eq!(body, "E\n~ sig");
        Ok(())
    }

    #[test]
    fn test_prefix_match_appends_every_match_once() -> Result<(), ReplyConfigError> {
        let kb = KnowledgeBase::from_entries([("ixwing", "A"), ("ixwang", "B"), ("xwing", "C")]);
        let body = resolver()?.render(&kb, &["ixw".to_string()]);

        assert_eq!(body.matches('A').count(), 1);
        assert_eq!(body.matches('B').count(), 1);
        assert!(!body.contains('C'));
        assert!(body.ends_with("\n~ sig"));
        Ok(())
    }

    #[test]
    fn test_short_mentions_skip_prefix() -> Result<(), ReplyConfigError> {
        let kb = KnowledgeBase::from_entries([("ixwing", "A")]);
        assert_eq!(resolver()?.render(&kb, &["ix".to_string()]), "");
        Ok(())
    }

    #[test]
    fn test_no_match_gives_empty_body() -> Result<(), ReplyConfigError> {
        let kb = KnowledgeBase::from_entries([("ixwing", "A")]);
        assert_eq!(resolver()?.resolve(&kb, "nothing to see here"), "");
        assert_eq!(resolver()?.resolve(&kb, "[[nope]] [[nah]]"), "");
        Ok(())
    }

    #[test]
    fn test_signature_with_blank_line_rejected() {
        assert_eq!(
            ReplyConfig::new("\n\nsig"),
            Err(ReplyConfigError::DoubledBreak)
        );
        assert!(ReplyConfig::from_template("hi {username}", "bot").is_ok());
    }

    #[test]
    fn test_default_signature_survives_collapse() {
        let reply = ReplyConfig::default();
        assert!(reply.signature().contains("cardref_bot"));
        assert_eq!(collapse_paragraphs(reply.signature()), reply.signature());

        let kb = KnowledgeBase::from_entries([("ixw", "**IXW**\n\n")]);
        let body = Resolver::new(reply.clone()).resolve(&kb, "[[ixw]]!");
        assert!(body.ends_with(reply.signature()));
    }

    #[test]
    fn test_reply_for_message_ignores_quotes() -> Result<(), ReplyConfigError> {
        let kb = KnowledgeBase::from_entries([("howlrunner", "H"), ("soontirfel", "S")]);
        let body = resolver()?.reply_for_message(&kb, "> [[Howlrunner]]\nwhat about [[Soontir Fel]]?");
        assert_eq!(body, "S\n~ sig");
        Ok(())
    }

    #[test]
    fn test_corrector_is_used() -> Result<(), ReplyConfigError> {
        let kb = KnowledgeBase::from_entries([("marksmanship", "M")]);
        let resolver = resolver()?.with_corrector(|key: &str| key.replace("shp", "ship"));
        assert_eq!(resolver.resolve(&kb, "[[Marksmanshp]]"), "M\n~ sig");
        Ok(())
    }

    #[test]
    fn test_collapse_paragraphs() {
        assert_eq!(collapse_paragraphs("a\n\nb\n\n\n\nc"), "a    \nb    \n    \nc");
        assert_eq!(collapse_paragraphs("a\n\r\nb"), "a\n\r\nb");
    }
}
