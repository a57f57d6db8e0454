use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries".to_string()
}

fn default_language() -> String {
    "en_US".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Base URL of the definition lookup service
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Dictionary language code, the path segment between base URL and word
    #[serde(default = "default_language")]
    pub language: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let api_url = env::var("DICTIONARY_API_URL").unwrap_or_else(|_| default_api_url());

        let language = env::var("DICTIONARY_LANGUAGE").unwrap_or_else(|_| default_language());

        let timeout_seconds = env::var("DICTIONARY_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10); // 10 seconds default

        DictionaryConfig {
            api_url,
            language,
            timeout_seconds,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            language: default_language(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
