use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// Field delimiter of the tabular format.
const DELIMITER: char = ' ';
/// Quote character of the tabular format.
const QUOTE: char = '|';

/// Word-list format, decided by file extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordFileFormat {
    /// `.csv`: space-delimited rows with `|`-quoted fields
    Tabular,
    /// `.json`: a single array of strings
    Json,
    /// `.txt`: one word per line
    PlainText,
}

impl WordFileFormat {
    /// Map a path's extension to a format. Unknown or missing extensions
    /// are rejected before the file is ever opened.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match extension {
            "csv" => Ok(Self::Tabular),
            "json" => Ok(Self::Json),
            "txt" => Ok(Self::PlainText),
            _ => Err(LoadError::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}

/// Read a word list from disk, dispatching on the file extension.
/// A successful load always holds at least one entry.
pub fn load_words(path: &Path) -> Result<Vec<String>, LoadError> {
    let format = WordFileFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;

    let words = match format {
        WordFileFormat::Tabular => words_from_tabular(&content),
        WordFileFormat::Json => words_from_json(path, &content)?,
        WordFileFormat::PlainText => words_from_lines(&content),
    };

    if words.is_empty() {
        return Err(LoadError::MalformedInput {
            path: path.to_path_buf(),
            reason: "no words found".to_string(),
        });
    }
    Ok(words)
}

/// Parse the tabular shape. A single-row file is one comma-separated list
/// (its fields are rejoined with the delimiter before the split, so quoted
/// spaces survive); a multi-row file contributes every field of every row,
/// untrimmed and in file order.
fn words_from_tabular(content: &str) -> Vec<String> {
    let rows: Vec<Vec<String>> = content.lines().map(split_row).collect();

    if rows.len() == 1 && !rows[0].is_empty() {
        return rows[0]
            .join(&DELIMITER.to_string())
            .split(',')
            .map(|word| word.trim().to_string())
            .collect();
    }

    // A lone blank row has no fields and falls through to the empty check.
    rows.into_iter().flatten().collect()
}

fn words_from_json(path: &Path, content: &str) -> Result<Vec<String>, LoadError> {
    serde_json::from_str(content).map_err(|e| LoadError::MalformedInput {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn words_from_lines(content: &str) -> Vec<String> {
    content.lines().map(|line| line.trim().to_string()).collect()
}

/// Split one row into fields. The quote character is only special at the
/// start of a field; inside a quoted region the delimiter is literal and a
/// doubled quote stands for one literal quote.
fn split_row(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }

    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;
    let mut field_start = true;

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    field.push(QUOTE);
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == QUOTE && field_start {
            in_quotes = true;
            field_start = false;
        } else if c == DELIMITER {
            fields.push(std::mem::take(&mut field));
            field_start = true;
        } else {
            field.push(c);
            field_start = false;
        }
    }
    fields.push(field);
    fields
}
