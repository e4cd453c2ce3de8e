// Library interface for hangman
// This allows integration tests to access internal modules

pub mod art;
pub mod cli;
pub mod error;
pub mod game_loop;
pub mod game_state;
pub mod logging;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::GuessError;
pub use game_loop::{GameInterface, GameView, UserAction, game_loop};
pub use game_state::{GameState, GuessOutcome, MAX_GUESSES};
pub use session::Session;
pub use wordbank::{WordList, WordSource, load_word_list_from_file, parse_word_list};
