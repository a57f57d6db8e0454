use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "lexi", about = "Vocabulary flashcards in the terminal, with live dictionary lookups")]
pub struct Cli {
    /// Word list to quiz from (.csv, .json, or .txt)
    pub words: PathBuf,

    /// Dictionary language code, e.g. en_US
    #[arg(long)]
    pub language: Option<String>,

    /// Base URL of the definition lookup service
    #[arg(long)]
    pub api_url: Option<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
