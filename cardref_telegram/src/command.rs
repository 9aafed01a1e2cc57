use teloxide::types::BotCommand;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Info,
}

impl Command {
    fn all() -> Vec<BotCommand> {
        vec![
            BotCommand {
                command: "start".to_string(),
                description: "Start using the bot".to_string(),
            },
            BotCommand {
                command: "help".to_string(),
                description: "Show help".to_string(),
            },
            BotCommand {
                command: "info".to_string(),
                description: "How card mentions work".to_string(),
            },
        ]
    }

    #[must_use]
    pub fn bot_commands() -> Vec<BotCommand> {
        Self::all()
    }

    /// `/start`, `/help` or `/info`, optionally addressed as `/help@bot_name`.
    /// Any other text is not a command.
    #[must_use]
    pub fn parse_from_text(text: &str) -> Option<Self> {
        let text = text.trim().to_lowercase();
        let word = text.split_whitespace().next()?;

        // Remove bot mention if present (e.g., "/start@my_bot")
        let word = word.split('@').next().unwrap_or(word);

        match word {
            "/start" => Some(Self::Start),
            "/help" => Some(Self::Help),
            "/info" => Some(Self::Info),
            _ => None,
        }
    }

    #[must_use]
    pub const fn help_text() -> &'static str {
        r"
🃏 Card reference bot

Commands:
/start - Start using the bot
/help  - Show this help
/info  - How card mentions work

Write [[card name]] anywhere in a message and I reply with the card text.
"
    }

    #[must_use]
    pub const fn welcome_text() -> &'static str {
        r"
👋 Welcome!

Mention up to 7 cards per message like [[X-Wing]] or [[Push the Limit]].
Send /help for the command list.
"
    }
}
