use thiserror::Error;

/// Reasons a guess is rejected without consuming any of the guess budget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("'{0}' is not a letter")]
    NotALetter(char),

    #[error("letter '{0}' has already been guessed")]
    AlreadyGuessed(char),

    #[error("the word '{0}' has already been guessed")]
    DuplicateWordGuess(String),
}
