//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use cardref_config::Config;
use cardref_core::{KnowledgeBase, Resolver};
use std::path::Path;
use tracing::info;

mod info;
mod init;
mod lookup;
mod run;
mod version;

pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use lookup::{LookupInput, LookupStrategy};
pub use run::{RunInput, RunStrategy};
pub use version::VersionStrategy;

/// Config, knowledge base and resolver, everything a resolving command needs.
///
/// Fails fast: a malformed card asset stops the command before anything runs.
fn load_runtime(config_path: Option<&Path>) -> anyhow::Result<(Config, KnowledgeBase, Resolver)> {
    let config = Config::load(config_path)?;
    if let Some(source) = &config.source {
        info!("Loaded config from {}", source.display());
    }

    let kb = config.load_knowledge_base()?;
    let resolver = Resolver::new(config.reply_config()?);

    Ok((config, kb, resolver))
}

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
