use rand::Rng;

/// One quiz round: the drawn word and what the dictionary said about it.
/// A card with no definition means the service had no entry for the word.
#[derive(Debug, Clone)]
pub struct Flashcard {
    pub word: String,
    pub phonetic: Option<String>,
    pub definition: Option<String>,
}

/// Quiz state carried between the load, draw, and reveal steps.
pub struct QuizSession {
    words: Vec<String>,
    current: Option<Flashcard>,
    rounds: u64,
}

impl QuizSession {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            current: None,
            rounds: 0,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Draw a word uniformly at random. Loaded lists are never empty.
    pub fn draw(&mut self, rng: &mut impl Rng) -> String {
        let index = rng.gen_range(0..self.words.len());
        self.words[index].clone()
    }

    /// Install the card for the current round.
    pub fn set_card(&mut self, card: Flashcard) {
        self.current = Some(card);
        self.rounds += 1;
    }

    pub fn card(&self) -> Option<&Flashcard> {
        self.current.as_ref()
    }

    /// Swap in a freshly loaded list. The old list and the current card
    /// are discarded wholesale.
    pub fn replace_words(&mut self, words: Vec<String>) {
        self.words = words;
        self.current = None;
    }

    /// Cards shown so far.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }
}
