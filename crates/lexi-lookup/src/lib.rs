mod client;

pub use client::DictionaryApiClient;

use async_trait::async_trait;
use serde::Deserialize;

use lexi_core::format::Meaning;

/// Definition lookup provider interface
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Fetch the dictionary entry for a word.
    ///
    /// `Ok(None)` means the service answered and has no entry for the word,
    /// which callers must keep distinct from transport or decode failures.
    async fn lookup(&self, word: &str) -> Result<Option<WordEntry>, LookupError>;
}

/// First dictionary entry of a lookup response.
#[derive(Debug, Clone, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}
