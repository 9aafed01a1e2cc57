use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use cardref_core::{DEFAULT_SIGNATURE_TEMPLATE, KnowledgeBase, ReplyConfig};

use crate::data::DataConfig;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub reply: ReplySettings,
    /// File this config was read from; relative data paths resolve against its directory.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TelegramConfig {
    #[serde(default)]
    pub token: String,
    /// Bot account name, substituted into the reply signature.
    pub username: String,
    #[serde(default)]
    pub allow_from: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReplySettings {
    #[serde(default = "ReplySettings::default_signature")]
    pub signature: String,
    #[serde(default = "ReplySettings::default_info_message")]
    pub info_message: String,
}

impl Default for ReplySettings {
    fn default() -> Self {
        Self {
            signature: Self::default_signature(),
            info_message: Self::default_info_message(),
        }
    }
}

impl ReplySettings {
    fn default_signature() -> String {
        DEFAULT_SIGNATURE_TEMPLATE.to_string()
    }

    fn default_info_message() -> String {
        "Mention up to 7 cards per message as [[card name]]. Abbreviations like [[FCS]] \
         and unique name prefixes like [[howl]] work too. Quoted lines (starting with >) \
         are ignored."
            .to_string()
    }
}

impl Config {
    /// `~/cardref/config.json`
    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("cardref"))
    }

    /// Read the config from `path`, or from [`Self::default_path`].
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'cardref init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let mut config = Self::from_json(&content)
            .with_context(|| format!("Invalid config file {}", config_path.display()))?;
        config.source = Some(config_path);

        Ok(config)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Directory relative data paths are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> PathBuf {
        self.source
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    }

    /// Signature template filled with the bot username and validated.
    pub fn reply_config(&self) -> anyhow::Result<ReplyConfig> {
        ReplyConfig::from_template(&self.reply.signature, &self.telegram.username)
            .context("Invalid reply.signature")
    }

    pub fn load_knowledge_base(&self) -> anyhow::Result<KnowledgeBase> {
        self.data.load_knowledge_base(&self.base_dir())
    }

    /// Write the config template to `path` (or the default path). Refuses to
    /// overwrite an existing file.
    pub fn create_config(path: Option<&Path>) -> anyhow::Result<PathBuf> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let config_template = r#"{
  "telegram": {
    "token": "your-telegram-bot-token-here",
    "username": "cardref_bot",
    "allow_from": []
  },
  "data": {
    "dir": "data",
    "cards": "cards.json",
    "pilot_text": "pilots-en.json",
    "upgrade_text": "upgrades-en.json",
    "modification_text": "modifications-en.json",
    "title_text": "titles-en.json"
  }
}"#;

        std::fs::write(&config_path, config_template)?;
        info!("Created config file at {}", config_path.display());

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and add your Telegram bot token and username");
        println!("   2. Put the card data JSON files in the data directory");
        println!("   3. Run 'cardref lookup \"[[x-wing]]\"' to check the card data");
        println!("   4. Run 'cardref run' to start the bot");
        println!();
        Ok(config_path)
    }
}
