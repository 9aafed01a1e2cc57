use crate::{Command, Error, Result};
use cardref_core::{KnowledgeBase, Resolver, strip_quoted_lines};
use std::{sync::Arc, time::Duration};
use teloxide::prelude::*;
use tokio::time::sleep;
use tracing::{info, warn};

/// Mention that asks for the usage message instead of a card.
pub const INFO_MENTION: &str = "info";

/// Telegram front end of the card resolver.
#[derive(Clone)]
pub struct TelegramBot {
    /// Teloxide bot instance
    pub bot: Bot,
    /// Shared, read-only card knowledge base
    kb: Arc<KnowledgeBase>,
    resolver: Arc<Resolver>,
    /// Reply to `/info`
    info_message: Arc<str>,
    /// Allowed chat IDs
    allowed_chats: Vec<i64>,
}

impl TelegramBot {
    /// Create a new Telegram bot
    pub fn new(
        token: &str,
        kb: Arc<KnowledgeBase>,
        resolver: Arc<Resolver>,
        info_message: &str,
        allowed_chats: &[String],
    ) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(Error::Config("Telegram bot token is empty".into()));
        }

        // Parse allowed chat IDs
        let allowed_chats = allowed_chats
            .iter()
            .filter_map(|s| s.parse::<i64>().ok())
            .collect();

        Ok(Self {
            bot: Bot::new(token),
            kb,
            resolver,
            info_message: Arc::from(info_message),
            allowed_chats,
        })
    }

    /// Check if a chat is allowed
    #[must_use]
    pub fn is_allowed(&self, chat_id: i64) -> bool {
        self.allowed_chats.is_empty() || self.allowed_chats.contains(&chat_id)
    }

    #[must_use]
    pub fn info_message(&self) -> &str {
        &self.info_message
    }

    /// True when the only mention in `text` is `[[info]]`.
    #[must_use]
    pub fn wants_info(&self, text: &str) -> bool {
        self.resolver.mentions(&strip_quoted_lines(text)) == [INFO_MENTION]
    }

    /// Reply body for a message; empty when nothing should be posted.
    #[must_use]
    pub fn reply_body(&self, text: &str) -> String {
        self.resolver.reply_for_message(&self.kb, text)
    }

    /// Test connection to Telegram API with backoff retry.
    /// Starts at 2s, increases by 2s each attempt, max 10s delay.
    /// Retries indefinitely until connection succeeds.
    async fn test_connection(&self) -> Result<()> {
        const INITIAL_DELAY_SECS: u64 = 2;
        const MAX_DELAY_SECS: u64 = 10;

        let mut attempt = 1u64;
        loop {
            match self.bot.get_me().await {
                Ok(me) => {
                    info!(
                        "Connected to Telegram API: @{} (id: {})",
                        me.user
                            .username
                            .clone()
                            .unwrap_or_else(|| "no username".to_string()),
                        me.user.id
                    );
                    return Ok(());
                }
                Err(e) => {
                    // 2s, 4s, 6s, 8s, 10s, 10s, ...
                    let delay_secs = (INITIAL_DELAY_SECS * attempt).min(MAX_DELAY_SECS);

                    warn!("Connection attempt {attempt} failed: {e}. Retrying in {delay_secs}s...");

                    // Only show detailed help on first failure
                    if attempt == 1 {
                        warn!("This may be due to:");
                        warn!("  - Network connectivity issues");
                        warn!("  - Firewall blocking api.telegram.org");
                        warn!("  - Invalid bot token");
                        warn!("  - Telegram API being temporarily unavailable");
                    }

                    sleep(Duration::from_secs(delay_secs)).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Run the bot until Ctrl+C.
    pub async fn run(self) -> Result<()> {
        use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
        use teloxide::dptree;
        use teloxide::types::Update;

        self.test_connection().await?;

        if let Err(e) = self.bot.set_my_commands(Command::bot_commands()).await {
            warn!("Failed to register bot commands: {e}");
        }

        info!("Serving {} knowledge base entries", self.kb.len());

        let bot = self.bot.clone();

        let schema = dptree::entry().branch(Update::filter_message().endpoint({
            let bot_clone = self.clone();
            move |_bot: Bot, msg: Message| {
                let bot_clone = bot_clone.clone();
                async move { crate::handler::handle_message(bot_clone, msg).await }
            }
        }));

        Dispatcher::builder(bot, schema)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}
