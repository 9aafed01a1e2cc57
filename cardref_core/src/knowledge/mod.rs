//! The read-only name → rendered block mapping the resolver answers from.

mod builder;
pub mod render;

pub use builder::{
    Entry, MergePolicy, apply_aliases, build_map, card_entries, fold_entries, initialism_aliases,
    ship_entries, ship_lines,
};

use std::collections::BTreeMap;
use std::ops::Bound;
use tracing::info;

use crate::card::{CardSet, RulesTexts};
use crate::error::BuildError;

/// Normalized card name → rendered block, including initialism keys.
///
/// Built once and never mutated afterwards; share it behind an `Arc` across
/// threads. Keys are ordered, so prefix matches come out in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: BTreeMap<String, String>,
}

impl KnowledgeBase {
    /// Render every record of `cards` with its rules text from `texts`.
    ///
    /// # Errors
    /// Fails on the first malformed record; nothing is returned partially built.
    pub fn build(cards: &CardSet, texts: &RulesTexts) -> Result<Self, BuildError> {
        let entries = build_map(cards, texts)?;
        info!(
            "Built knowledge base: {} entries from {} records",
            entries.len(),
            cards.len()
        );
        Ok(Self { entries })
    }

    /// Wrap already rendered blocks.
    #[must_use]
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Every `(key, block)` whose key starts with `prefix`.
    pub fn prefix_matches<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(key, _)| key.starts_with(prefix))
            .map(|(key, block)| (key.as_str(), block.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
