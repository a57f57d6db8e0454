use serde::Deserialize;

/// One part-of-speech grouping of sense entries in a dictionary response.
#[derive(Debug, Clone, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<SenseEntry>,
}

/// One distinct sense of a word: the gloss plus optional usage data.
#[derive(Debug, Clone, Deserialize)]
pub struct SenseEntry {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Option<Vec<String>>,
}

/// Flatten meaning groups into display text.
///
/// Each group renders as a `(part of speech)` line when labeled, followed by
/// one block per sense: the gloss, then tab-indented `Example:` and
/// `Synonyms:` lines for whichever of the two is present. Everything is
/// joined with single newlines; an empty slice renders as an empty string.
pub fn format_meanings(meanings: &[Meaning]) -> String {
    meanings
        .iter()
        .map(format_meaning)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_meaning(meaning: &Meaning) -> String {
    let mut parts = Vec::new();
    if let Some(pos) = &meaning.part_of_speech {
        parts.push(format!("({pos})"));
    }
    if !meaning.definitions.is_empty() {
        let senses: Vec<String> = meaning.definitions.iter().map(format_sense).collect();
        parts.push(senses.join("\n"));
    }
    parts.join("\n")
}

fn format_sense(sense: &SenseEntry) -> String {
    let mut lines = vec![sense.definition.clone()];
    if let Some(example) = &sense.example {
        lines.push(format!("\tExample: {example}"));
    }
    if let Some(synonyms) = &sense.synonyms {
        lines.push(format!("\tSynonyms: {}", synonyms.join(", ")));
    }
    lines.join("\n")
}
