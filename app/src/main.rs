#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use command::{
    CommandStrategy, InfoStrategy, InitStrategy, LookupInput, LookupStrategy, RunInput,
    RunStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "cardref")]
#[command(about = "Card reference bot: answers [[card name]] mentions", long_about = None)]
struct Cli {
    /// Config file (default: ~/cardref/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Telegram bot
    Run {
        /// Bot token (overrides config)
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Resolve card mentions in a text and print the reply body
    Lookup {
        /// Text to scan; read from stdin when omitted
        text: Option<String>,

        /// Ignore lines starting with '>' like the bot does
        #[arg(long)]
        strip_quotes: bool,
    },
    /// Initialize configuration
    Init,
    /// Show configuration and knowledge base summary
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = cli.config;

    match cli.command {
        Commands::Run { token } => RunStrategy.execute(RunInput { config, token }).await,
        Commands::Lookup { text, strip_quotes } => {
            LookupStrategy
                .execute(LookupInput {
                    config,
                    text,
                    strip_quotes,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(config).await,
        Commands::Info => InfoStrategy.execute(config).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
