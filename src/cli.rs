use crate::art::{LOSS_BANNER, WIN_BANNER};
use crate::debug_log;
use crate::error::GuessError;
use crate::game_loop::{GameInterface, GameView, UserAction};
use crate::game_state::MAX_GUESSES;
use crate::wordbank::DEFAULT_WORDS_PATH;
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const PROMPT: &str = "Enter full word or a letter: ";
const CONTINUE_PROMPT: &str = "Press Enter to start a new game...";

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a comma-separated word list
    #[arg(short = 'w', long = "words", default_value = DEFAULT_WORDS_PATH)]
    pub words_path: PathBuf,

    /// Number of guesses allowed per game
    #[arg(
        short = 'g',
        long = "max-guesses",
        default_value_t = MAX_GUESSES,
        value_parser = parse_max_guesses
    )]
    pub max_guesses: usize,

    /// Seed for choosing secret words
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Where to write the log file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

fn parse_max_guesses(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("the guess budget must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Console implementation of [`GameInterface`].
///
/// Reads one guess per line from `reader` and writes the board to `writer`.
/// Write failures are logged and otherwise ignored.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            clear_screen: false,
        }
    }

    /// Clear the screen before each board. Only useful on a real terminal.
    #[must_use]
    pub fn with_screen_clearing(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn emit(&mut self, args: fmt::Arguments) {
        if let Err(e) = self.writer.write_fmt(args).and_then(|()| self.writer.flush()) {
            debug_log!("Console write failed: {}", e);
        }
    }

    fn clear(&mut self) {
        if !self.clear_screen {
            return;
        }
        if let Err(e) = queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0)) {
            debug_log!("Clearing the screen failed: {}", e);
        }
    }

    /// `None` on end of input or a read error.
    fn read_line(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_string()),
            Err(e) => {
                debug_log!("Reading input failed: {}", e);
                None
            }
        }
    }

    fn display_banner(&mut self, banner: &str, message: &str) {
        self.clear();
        self.emit(format_args!("{banner}\n\n{message}\n\n{CONTINUE_PROMPT}"));
        // Any line, or end of input, continues
        let _ = self.read_line();
    }
}

/// Renders one turn exactly as the console shows it, ending with the prompt.
#[must_use]
pub fn format_view(view: &GameView) -> String {
    let mut out = format!("Wins: {} Losses: {}\n", view.wins, view.losses);

    if !view.incorrect_words.is_empty() {
        out.push_str(&format!(
            "Incorrect word guesses: {}\n",
            view.incorrect_words.join(", ")
        ));
    }
    if !view.incorrect_letters.is_empty() {
        let letters: String = view.incorrect_letters.iter().collect();
        out.push_str(&format!("Incorrect letter guesses: {letters}\n"));
    }
    if let Some(figure) = view.figure {
        out.push_str(&format!("\n\n{figure}\n"));
    }

    out.push_str(&format!(
        "\n{} letters: {}\n",
        view.word_length, view.masked_word
    ));
    out.push_str(&format!(
        "\nGuesses: {} of {}\n",
        view.total_guesses, view.max_guesses
    ));
    out.push_str(PROMPT);
    out
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_state(&mut self, view: &GameView) {
        self.clear();
        let text = format_view(view);
        self.emit(format_args!("{text}"));
    }

    fn read_guess(&mut self) -> UserAction {
        self.read_line().map_or(UserAction::Exit, UserAction::Guess)
    }

    fn display_error(&mut self, error: &GuessError) {
        self.emit(format_args!("{error}\n{PROMPT}"));
    }

    fn display_win(&mut self, secret: &str) {
        self.display_banner(WIN_BANNER, &format!("You guessed it: {secret}"));
    }

    fn display_loss(&mut self, secret: &str) {
        self.display_banner(LOSS_BANNER, &format!("The word was: {secret}"));
    }
}
