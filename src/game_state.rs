use crate::error::GuessError;
use crate::wordbank::WordList;
use crate::{debug_log, info_log};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

pub const MAX_GUESSES: usize = 10;
pub const PLACEHOLDER: char = '_';

/// Lowercases one character, keeping it as is when its lowercase form is
/// more than one character. The secret word and every guess go through this,
/// so they always compare equal letter for letter.
fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn fold_word(word: &str) -> String {
    word.chars().map(fold_char).collect()
}

/// What an accepted guess did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word; `revealed` positions were uncovered.
    Hit { revealed: usize },
    /// Wrong letter or wrong word.
    Miss,
    /// The word is now fully revealed.
    Solved,
    /// Empty input, or the game is already over.
    Ignored,
}

/// State of a single round: the secret word, what the player has revealed,
/// and every guess made so far.
///
/// Total guesses are correct letters + incorrect letters + incorrect words.
/// A correct full-word guess wins outright and is not counted.
#[derive(Debug)]
pub struct GameState {
    words: WordList,
    rng: StdRng,
    max_guesses: usize,
    secret: String,
    masked: Vec<char>,
    correct_letters: BTreeSet<char>,
    incorrect_letters: Vec<char>,
    incorrect_words: Vec<String>,
}

impl GameState {
    /// Starts a game with the default budget and an OS-seeded RNG.
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self::with_settings(words, MAX_GUESSES, StdRng::from_os_rng())
    }

    /// A budget of zero is raised to one.
    #[must_use]
    pub fn with_settings(words: WordList, max_guesses: usize, rng: StdRng) -> Self {
        let mut state = Self {
            words,
            rng,
            max_guesses: max_guesses.max(1),
            secret: String::new(),
            masked: Vec::new(),
            correct_letters: BTreeSet::new(),
            incorrect_letters: Vec::new(),
            incorrect_words: Vec::new(),
        };
        state.new_game();
        state
    }

    /// Picks a new secret word and clears every guess.
    pub fn new_game(&mut self) {
        let index = self.rng.random_range(0..self.words.len());
        self.secret = self
            .words
            .get(index)
            .map(fold_word)
            .unwrap_or_default();
        self.masked = self
            .secret
            .chars()
            .map(|c| if c == ' ' { ' ' } else { PLACEHOLDER })
            .collect();
        self.correct_letters.clear();
        self.incorrect_letters.clear();
        self.incorrect_words.clear();
        info_log!(
            "New game: word #{} of {} ({} letters)",
            index,
            self.words.len(),
            self.masked.len()
        );
    }

    /// Applies raw player input: one character is a letter guess, anything
    /// longer is a word guess, empty input does nothing.
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.is_over() {
            return Ok(GuessOutcome::Ignored);
        }
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(GuessOutcome::Ignored),
            (Some(letter), None) => self.guess_letter(letter),
            _ => self.guess_word(input),
        }
    }

    pub fn guess_letter(&mut self, letter: char) -> Result<GuessOutcome, GuessError> {
        if self.is_over() {
            return Ok(GuessOutcome::Ignored);
        }
        let letter = fold_char(letter);
        if !letter.is_alphabetic() {
            debug_log!("Rejected non-letter guess {:?}", letter);
            return Err(GuessError::NotALetter(letter));
        }
        if self.correct_letters.contains(&letter) || self.incorrect_letters.contains(&letter) {
            debug_log!("Rejected repeated letter {:?}", letter);
            return Err(GuessError::AlreadyGuessed(letter));
        }

        let mut revealed = 0;
        for (slot, c) in self.masked.iter_mut().zip(self.secret.chars()) {
            if c == letter {
                *slot = letter;
                revealed += 1;
            }
        }

        if revealed == 0 {
            self.incorrect_letters.push(letter);
            debug_log!("Letter {:?} is not in the word", letter);
            return Ok(GuessOutcome::Miss);
        }

        self.correct_letters.insert(letter);
        debug_log!("Letter {:?} revealed {} position(s)", letter, revealed);
        if self.is_won() {
            Ok(GuessOutcome::Solved)
        } else {
            Ok(GuessOutcome::Hit { revealed })
        }
    }

    pub fn guess_word(&mut self, word: &str) -> Result<GuessOutcome, GuessError> {
        if self.is_over() || word.is_empty() {
            return Ok(GuessOutcome::Ignored);
        }
        let word = fold_word(word);
        if word == self.secret {
            self.masked = self.secret.chars().collect();
            debug_log!("Word guess matched the secret word");
            return Ok(GuessOutcome::Solved);
        }
        if self.incorrect_words.contains(&word) {
            debug_log!("Rejected repeated word guess {:?}", word);
            return Err(GuessError::DuplicateWordGuess(word));
        }
        debug_log!("Word guess {:?} is wrong", word);
        self.incorrect_words.push(word);
        Ok(GuessOutcome::Miss)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.masked.iter().copied().eq(self.secret.chars())
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.total_guesses() >= self.max_guesses && !self.is_won()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.total_guesses() >= self.max_guesses
    }

    #[must_use]
    pub fn total_guesses(&self) -> usize {
        self.correct_letters.len() + self.incorrect_guess_count()
    }

    #[must_use]
    pub fn incorrect_guess_count(&self) -> usize {
        self.incorrect_letters.len() + self.incorrect_words.len()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.total_guesses())
    }

    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn secret_word(&self) -> &str {
        &self.secret
    }

    #[must_use]
    pub fn masked_word(&self) -> String {
        self.masked.iter().collect()
    }

    /// Length of the secret word in characters.
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.masked.len()
    }

    pub fn correct_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.correct_letters.iter().copied()
    }

    #[must_use]
    pub fn incorrect_letters(&self) -> &[char] {
        &self.incorrect_letters
    }

    #[must_use]
    pub fn incorrect_word_guesses(&self) -> &[String] {
        &self.incorrect_words
    }
}
