use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::CardKind;
use crate::normalize::strip_quotes;

/// One rules-text asset value: `{"text": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesEntry {
    pub text: String,
}

/// Rules text per variant, keyed by display name with quotation marks removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesTexts {
    #[serde(default)]
    pub pilots: HashMap<String, RulesEntry>,
    #[serde(default)]
    pub upgrades: HashMap<String, RulesEntry>,
    #[serde(default)]
    pub modifications: HashMap<String, RulesEntry>,
    #[serde(default)]
    pub titles: HashMap<String, RulesEntry>,
}

impl RulesTexts {
    #[must_use]
    pub const fn for_kind(&self, kind: CardKind) -> Option<&HashMap<String, RulesEntry>> {
        match kind {
            CardKind::Ship => None,
            CardKind::Pilot => Some(&self.pilots),
            CardKind::Upgrade => Some(&self.upgrades),
            CardKind::Modification => Some(&self.modifications),
            CardKind::Title => Some(&self.titles),
        }
    }

    /// Rules text for the record `name` of `kind`. Quotation marks in `name`
    /// are dropped before the lookup.
    #[must_use]
    pub fn lookup(&self, kind: CardKind, name: &str) -> Option<&str> {
        self.for_kind(kind)?
            .get(&strip_quotes(name))
            .map(|entry| entry.text.as_str())
    }
}
