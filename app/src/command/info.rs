use cardref_config::Config;
use std::path::PathBuf;
use tracing::info;

/// Strategy for displaying configuration information.
///
/// Prints the bot identity (token masked), the card data files, the reply
/// signature, and whether the knowledge base builds.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load(input.as_deref())?;

        println!("=== cardref Configuration ===\n");

        if let Some(source) = &config.source {
            println!("Config File: {}", source.display());
            println!();
        }

        println!("Telegram:");
        println!("  Username: @{}", config.telegram.username);
        println!("  Token: {}", mask_token(&config.telegram.token));
        if config.telegram.allow_from.is_empty() {
            println!("  Allow From: (empty - all chats allowed)");
        } else {
            println!("  Allow From: {}", config.telegram.allow_from.join(", "));
        }
        println!();

        let base = config.base_dir();
        let data = &config.data;
        println!("Card Data:");
        println!("  Directory: {}", base.join(&data.dir).display());
        for file in [
            &data.cards,
            &data.pilot_text,
            &data.upgrade_text,
            &data.modification_text,
            &data.title_text,
        ] {
            let status = if data.path_of(&base, file).exists() {
                "ok"
            } else {
                "missing"
            };
            println!("  {file}: {status}");
        }
        println!();

        println!("Reply:");
        match config.reply_config() {
            Ok(reply) => println!("  Signature: {}", reply.signature().trim()),
            Err(e) => println!("  Signature: invalid ({e})"),
        }
        println!();

        info!("Building knowledge base");
        println!("Knowledge Base:");
        match config.load_knowledge_base() {
            Ok(kb) => println!("  Entries: {}", kb.len()),
            Err(e) => {
                println!("  Status: Build failed");
                println!("  Error: {e:#}");
            }
        }

        Ok(())
    }
}

fn mask_token(token: &str) -> String {
    if token.is_empty() {
        "(not set)".to_string()
    } else if token.chars().count() > 8 {
        let head: String = token.chars().take(8).collect();
        format!("{head}...***")
    } else {
        "***".to_string()
    }
}
