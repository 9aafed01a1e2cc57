//! Card-data assets: one card file plus four rules-text files.

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use cardref_core::{CardSet, KnowledgeBase, RulesTexts};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DataConfig {
    #[serde(default = "DataConfig::default_dir")]
    pub dir: PathBuf,
    #[serde(default = "DataConfig::default_cards")]
    pub cards: String,
    #[serde(default = "DataConfig::default_pilot_text")]
    pub pilot_text: String,
    #[serde(default = "DataConfig::default_upgrade_text")]
    pub upgrade_text: String,
    #[serde(default = "DataConfig::default_modification_text")]
    pub modification_text: String,
    #[serde(default = "DataConfig::default_title_text")]
    pub title_text: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            cards: Self::default_cards(),
            pilot_text: Self::default_pilot_text(),
            upgrade_text: Self::default_upgrade_text(),
            modification_text: Self::default_modification_text(),
            title_text: Self::default_title_text(),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

impl DataConfig {
    fn default_dir() -> PathBuf {
        PathBuf::from("data")
    }

    fn default_cards() -> String {
        "cards.json".to_string()
    }

    fn default_pilot_text() -> String {
        "pilots-en.json".to_string()
    }

    fn default_upgrade_text() -> String {
        "upgrades-en.json".to_string()
    }

    fn default_modification_text() -> String {
        "modifications-en.json".to_string()
    }

    fn default_title_text() -> String {
        "titles-en.json".to_string()
    }

    /// Full path of `file` inside the data directory; `dir` itself resolves
    /// against `base` when relative.
    #[must_use]
    pub fn path_of(&self, base: &Path, file: &str) -> PathBuf {
        base.join(&self.dir).join(file)
    }

    pub fn load_cards(&self, base: &Path) -> anyhow::Result<CardSet> {
        read_json(&self.path_of(base, &self.cards))
    }

    pub fn load_texts(&self, base: &Path) -> anyhow::Result<RulesTexts> {
        Ok(RulesTexts {
            pilots: read_json(&self.path_of(base, &self.pilot_text))?,
            upgrades: read_json(&self.path_of(base, &self.upgrade_text))?,
            modifications: read_json(&self.path_of(base, &self.modification_text))?,
            titles: read_json(&self.path_of(base, &self.title_text))?,
        })
    }

    /// Read every asset and build the knowledge base. Any failure aborts.
    pub fn load_knowledge_base(&self, base: &Path) -> anyhow::Result<KnowledgeBase> {
        let cards = self.load_cards(base)?;
        let texts = self.load_texts(base)?;
        info!(
            "Loaded {} card records from {}",
            cards.len(),
            base.join(&self.dir).display()
        );

        KnowledgeBase::build(&cards, &texts).context("Card data is malformed")
    }
}
