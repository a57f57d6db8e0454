pub mod cli;
pub mod quiz;
pub mod session;


use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lexi_config::Config;
use lexi_core::wordlist::load_words;
use lexi_lookup::DictionaryApiClient;

use self::cli::Cli;
use self::session::QuizSession;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let mut config = Config::new();
    if let Some(language) = cli.language {
        config.dictionary.language = language;
    }
    if let Some(api_url) = cli.api_url {
        config.dictionary.api_url = api_url;
    }

    let words = load_words(&cli.words)
        .with_context(|| format!("failed to load word list from {}", cli.words.display()))?;
    tracing::info!("Loaded {} words from {}", words.len(), cli.words.display());

    let client = DictionaryApiClient::new(
        config.dictionary.api_url,
        config.dictionary.language,
        Duration::from_secs(config.dictionary.timeout_seconds),
    )?;

    if atty::is(atty::Stream::Stdin) {
        println!(
            "{} words loaded. Blank line flips the card or draws the next word.",
            words.len()
        );
        println!("Commands: load <path>, quit");
    }

    let session = QuizSession::new(words);
    let quiz = quiz::run(session, &client);

    tokio::select! {
        result = quiz => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            Ok(())
        }
    }
}
