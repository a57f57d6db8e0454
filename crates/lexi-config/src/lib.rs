use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;

pub mod dictionary;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub dictionary: DictionaryConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
        }
    }
}
