use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::ThreadRng;
use tokio::io::{AsyncBufReadExt, BufReader};

use lexi_core::format::format_meanings;
use lexi_core::wordlist::load_words;
use lexi_lookup::{DefinitionSource, LookupError};

use crate::session::{Flashcard, QuizSession};

/// Command accepted at the quiz prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line: reveal the current card, or draw the next one
    Advance,
    /// Swap in a different word list
    Load(PathBuf),
    Quit,
}

/// Parse one input line. `None` is an unrecognized command.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Some(Command::Advance);
    }
    let mut parts = line.splitn(2, char::is_whitespace);
    match parts.next() {
        Some("q") | Some("quit") => Some(Command::Quit),
        Some("load") => parts
            .next()
            .map(|path| Command::Load(PathBuf::from(path.trim()))),
        _ => None,
    }
}

/// Drive the quiz until quit or end of input.
pub async fn run<S: DefinitionSource>(mut session: QuizSession, source: &S) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    let mut revealed = next_round(&mut session, source, &mut rng).await;

    while let Some(line) = input.next_line().await? {
        match parse_command(&line) {
            Some(Command::Advance) if !revealed => {
                reveal_current(&session);
                revealed = true;
            }
            Some(Command::Advance) => {
                revealed = next_round(&mut session, source, &mut rng).await;
            }
            Some(Command::Load(path)) => match load_words(&path) {
                Ok(words) => {
                    session.replace_words(words);
                    println!(
                        "Loaded {} words from {}",
                        session.word_count(),
                        path.display()
                    );
                    revealed = next_round(&mut session, source, &mut rng).await;
                }
                // The quiz keeps running from the old list when the new one is bad.
                Err(e) => println!("{e}"),
            },
            Some(Command::Quit) => break,
            None => println!("Commands: blank line to flip or advance, load <path>, quit"),
        }
    }

    println!("Reviewed {} cards.", session.rounds());
    Ok(())
}

/// Draw and present the next card. Returns whether the round is already
/// spent: after a failed lookup there is nothing to reveal, so the next
/// blank line draws a fresh word.
async fn next_round<S: DefinitionSource>(
    session: &mut QuizSession,
    source: &S,
    rng: &mut ThreadRng,
) -> bool {
    let word = session.draw(rng);
    match fetch_card(source, word).await {
        Ok(card) => {
            println!();
            println!("  {}", card.word);
            session.set_card(card);
            false
        }
        Err(e) => {
            tracing::warn!("Lookup failed: {e}");
            println!("Lookup failed: {e}");
            true
        }
    }
}

/// Look a word up and build its card. A service with no entry for the word
/// still yields a card, with nothing on the back.
pub(crate) async fn fetch_card<S: DefinitionSource>(
    source: &S,
    word: String,
) -> Result<Flashcard, LookupError> {
    let entry = source.lookup(&word).await?;
    let card = match entry {
        Some(entry) => Flashcard {
            word,
            phonetic: entry.phonetic,
            definition: Some(format_meanings(&entry.meanings)),
        },
        None => Flashcard {
            word,
            phonetic: None,
            definition: None,
        },
    };
    Ok(card)
}

fn reveal_current(session: &QuizSession) {
    let Some(card) = session.card() else {
        return;
    };
    if let Some(phonetic) = &card.phonetic {
        println!("  {phonetic}");
    }
    match &card.definition {
        Some(text) => println!("{text}"),
        None => println!("  No entry found for \"{}\".", card.word),
    }
}
