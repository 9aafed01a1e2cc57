use cardref_config::Config;
use std::path::PathBuf;

/// Strategy for initializing the configuration.
///
/// Writes the config template to the given path, or `~/cardref/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        Config::create_config(input.as_deref())?;
        Ok(())
    }
}
