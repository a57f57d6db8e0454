use std::time::Duration;

use async_trait::async_trait;

use crate::{DefinitionSource, LookupError, WordEntry};

/// Client for a dictionaryapi.dev-style entries endpoint.
#[derive(Clone)]
pub struct DictionaryApiClient {
    client: reqwest::Client,
    api_url: String,
    language: String,
}

impl DictionaryApiClient {
    pub fn new(api_url: String, language: String, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url,
            language,
        })
    }

    fn entry_url(&self, word: &str) -> String {
        format!(
            "{}/{}/{}",
            self.api_url.trim_end_matches('/'),
            self.language,
            word
        )
    }
}

#[async_trait]
impl DefinitionSource for DictionaryApiClient {
    async fn lookup(&self, word: &str) -> Result<Option<WordEntry>, LookupError> {
        let url = self.entry_url(word);
        tracing::debug!("Looking up {:?} at {}", word, url);

        let response = self.client.get(&url).send().await?;

        // The service answers 404 for words it has no entry for.
        if response.status() == 404 {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(LookupError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let entries: Vec<WordEntry> = response
            .json()
            .await
            .map_err(|e| LookupError::ApiError(format!("Failed to parse response: {}", e)))?;

        Ok(entries.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_url: &str, language: &str) -> DictionaryApiClient {
        DictionaryApiClient::new(
            api_url.to_string(),
            language.to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn entry_url_joins_base_language_and_word() {
        let c = client("https://api.dictionaryapi.dev/api/v2/entries", "en_US");
        assert_eq!(
            c.entry_url("hello"),
            "https://api.dictionaryapi.dev/api/v2/entries/en_US/hello"
        );
    }

    #[test]
    fn entry_url_tolerates_a_trailing_slash() {
        let c = client("http://localhost:9000/entries/", "en_GB");
        assert_eq!(
            c.entry_url("tea"),
            "http://localhost:9000/entries/en_GB/tea"
        );
    }

    #[test]
    fn decodes_a_dictionaryapi_response() {
        let payload = r#"
        [
            {
                "word": "hello",
                "phonetic": "həˈləʊ",
                "phonetics": [{ "text": "həˈləʊ", "audio": "" }],
                "origin": "early 19th century",
                "meanings": [
                    {
                        "partOfSpeech": "exclamation",
                        "definitions": [
                            {
                                "definition": "used as a greeting or to begin a phone conversation.",
                                "example": "hello there, Katie!",
                                "synonyms": [],
                                "antonyms": []
                            }
                        ]
                    },
                    {
                        "partOfSpeech": "noun",
                        "definitions": [
                            {
                                "definition": "an utterance of 'hello'; a greeting.",
                                "synonyms": ["greeting", "salutation"],
                                "antonyms": []
                            }
                        ]
                    }
                ]
            }
        ]"#;

        let entries: Vec<WordEntry> = serde_json::from_str(payload).unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.phonetic.as_deref(), Some("həˈləʊ"));
        assert_eq!(entry.meanings.len(), 2);
        assert_eq!(
            entry.meanings[0].part_of_speech.as_deref(),
            Some("exclamation")
        );
        assert_eq!(
            entry.meanings[0].definitions[0].example.as_deref(),
            Some("hello there, Katie!")
        );
        assert_eq!(
            entry.meanings[1].definitions[0].synonyms,
            Some(vec!["greeting".to_string(), "salutation".to_string()])
        );
        assert_eq!(entry.meanings[1].definitions[0].example, None);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let payload = r#"[{ "word": "bare", "meanings": [] }]"#;
        let entries: Vec<WordEntry> = serde_json::from_str(payload).unwrap();

        assert_eq!(entries[0].word, "bare");
        assert!(entries[0].phonetic.is_none());
        assert!(entries[0].meanings.is_empty());
    }

    #[test]
    fn a_missing_gloss_fails_to_decode() {
        let payload = r#"
        [
            {
                "word": "broken",
                "meanings": [
                    { "partOfSpeech": "noun", "definitions": [{ "example": "no gloss here" }] }
                ]
            }
        ]"#;
        assert!(serde_json::from_str::<Vec<WordEntry>>(payload).is_err());
    }
}
