use cardref_telegram::TelegramBot;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use super::load_runtime;

/// Input for the run command.
pub struct RunInput {
    pub config: Option<PathBuf>,
    /// Optional bot token (overrides config)
    pub token: Option<String>,
}

/// Strategy for running the Telegram bot.
pub struct RunStrategy;

impl super::CommandStrategy for RunStrategy {
    type Input = RunInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let (config, kb, resolver) = load_runtime(input.config.as_deref())?;

        // Get token from input or config
        let token = if let Some(t) = input.token {
            t
        } else if !config.telegram.token.is_empty() {
            config.telegram.token.clone()
        } else {
            anyhow::bail!("Telegram bot token not configured. Set \"telegram.token\" in config");
        };

        info!("Starting Telegram bot @{}...", config.telegram.username);

        let bot = TelegramBot::new(
            &token,
            Arc::new(kb),
            Arc::new(resolver),
            &config.reply.info_message,
            &config.telegram.allow_from,
        )?;

        info!("Telegram bot is running. Press Ctrl+C to stop.");
        bot.run().await?;

        Ok(())
    }
}
