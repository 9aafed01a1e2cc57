//! One-shot resolution from the command line, handy for checking card data.

use std::io::Read;
use std::path::PathBuf;
use tracing::info;

use super::load_runtime;

/// Input for the lookup command.
#[derive(Debug, Clone)]
pub struct LookupInput {
    pub config: Option<PathBuf>,
    /// Text to resolve; stdin when `None`
    pub text: Option<String>,
    pub strip_quotes: bool,
}

/// Strategy that prints the reply body the bot would post for a text.
#[derive(Debug, Clone, Copy)]
pub struct LookupStrategy;

impl super::CommandStrategy for LookupStrategy {
    type Input = LookupInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let (_config, kb, resolver) = load_runtime(input.config.as_deref())?;

        let text = if let Some(text) = input.text {
            text
        } else {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        };

        let body = if input.strip_quotes {
            resolver.reply_for_message(&kb, &text)
        } else {
            resolver.resolve(&kb, &text)
        };

        if body.is_empty() {
            info!("No card matched, the bot would not reply");
        } else {
            println!("{body}");
        }
        Ok(())
    }
}
