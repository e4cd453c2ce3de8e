// Integration tests for the hangman application
// These tests verify that all modules work together correctly

use hangman::cli::CliInterface;
use hangman::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hangman_it_{}_{}", std::process::id(), name))
}

fn game_with_word(word: &str) -> GameState {
    let words = WordList::new(vec![word.to_string()]).unwrap();
    GameState::with_settings(words, MAX_GUESSES, StdRng::seed_from_u64(11))
}

/// Runs the console interface over scripted input and returns everything it printed.
fn play(state: &mut GameState, session: &mut Session, input: &str) -> String {
    let mut interface = CliInterface::new(Cursor::new(input.to_string()), Vec::new());
    game_loop(state, session, &mut interface);
    String::from_utf8(interface.into_writer()).unwrap()
}

#[test]
fn test_end_to_end_win_through_console() {
    let mut state = game_with_word("cat");
    let mut session = Session::new();

    // The blank line dismisses the win banner
    let output = play(&mut state, &mut session, "z\nc\na\nt\n\n");

    assert_eq!(session.wins(), 1);
    assert!(output.contains("Incorrect letter guesses: z"));
    assert!(output.contains("3 letters: c__"));
    assert!(output.contains("3 letters: ca_"));
    assert!(output.contains("You guessed it: cat"));
    assert!(output.contains("Wins: 1 Losses: 0"));
}

#[test]
fn test_end_to_end_loss_through_console() {
    let mut state = game_with_word("dog");
    let mut session = Session::new();

    let output = play(&mut state, &mut session, "a\nb\nc\ne\nf\nh\ni\nj\nk\nl\n\n");

    assert_eq!(session.losses(), 1);
    assert_eq!(session.wins(), 0);
    assert!(output.contains("Guesses: 10 of 10"));
    assert!(output.contains("The word was: dog"));
    assert!(output.contains("Wins: 0 Losses: 1"));
}

#[test]
fn test_invalid_input_reported_and_not_counted() {
    let mut state = game_with_word("cat");
    let mut session = Session::new();

    let output = play(&mut state, &mut session, "c\nc\n5\ncow\ncow\n");

    assert!(output.contains("letter 'c' has already been guessed"));
    assert!(output.contains("'5' is not a letter"));
    assert!(output.contains("the word 'cow' has already been guessed"));
    assert_eq!(state.total_guesses(), 2);
}

#[test]
fn test_word_guess_wins_regardless_of_progress() {
    let mut state = game_with_word("programmering");
    let mut session = Session::new();

    play(&mut state, &mut session, "r\nx\nProgrammering\n\n");

    assert_eq!(session.wins(), 1);
    // A fresh game was started after the win
    assert_eq!(state.total_guesses(), 0);
}

#[test]
fn test_loss_boundary() {
    let mut state = game_with_word("dog");
    for letter in "abcefhijk".chars() {
        state.guess_letter(letter).unwrap();
    }
    assert_eq!(state.total_guesses(), MAX_GUESSES - 1);
    assert!(!state.is_lost());

    state.guess_letter('l').unwrap();
    assert!(state.is_lost());
    assert_eq!(state.masked_word(), "___");
}

#[test]
fn test_repeated_letter_does_not_double_consume() {
    let mut state = game_with_word("cat");
    state.guess("a").unwrap();
    assert_eq!(state.guess("A"), Err(GuessError::AlreadyGuessed('a')));
    assert_eq!(state.total_guesses(), 1);
}

#[test]
fn test_missing_word_file_yields_fallback() {
    let source = WordSource::new(temp_path("missing_words.txt"));
    let words: Vec<&str> = source.words().iter().collect();
    assert_eq!(words, vec!["svenska", "lexicon", "programmering"]);
}

#[test]
fn test_custom_word_file_to_game() {
    let path = temp_path("custom_words.txt");
    {
        let mut file = File::create(&path).unwrap();
        write!(file, "Rust").unwrap();
    }

    let source = WordSource::new(&path);
    assert_eq!(source.words().len(), 1);

    // The file word is lowercased when it becomes the secret
    let mut state = GameState::with_settings(
        source.words().clone(),
        MAX_GUESSES,
        StdRng::seed_from_u64(5),
    );
    assert_eq!(state.secret_word(), "rust");

    let mut session = Session::new();
    play(&mut state, &mut session, "RUST\n\n");
    assert_eq!(session.wins(), 1);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_word_file_parsing() {
    let path = temp_path("parsed_words.txt");
    fs::write(&path, "apple,banana split,cherry\n").unwrap();

    let words = load_word_list_from_file(&path).unwrap();
    assert_eq!(words, vec!["apple", "banana split", "cherry"]);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_multi_word_secret_pre_reveals_space() {
    let mut state = game_with_word("banana split");
    assert_eq!(state.masked_word(), "______ _____");

    state.guess("a").unwrap();
    assert_eq!(state.masked_word(), "_a_a_a _____");
    assert_eq!(state.guess("banana split"), Ok(GuessOutcome::Solved));
    assert!(state.is_won());
}

#[test]
fn test_session_counts_across_games() {
    let mut state = game_with_word("cat");
    let mut session = Session::new();

    play(&mut state, &mut session, "cat\n\ncat\n\n");
    assert_eq!(session.wins(), 2);

    play(&mut state, &mut session, "b\nd\ne\nf\ng\nh\ni\nj\nk\nl\n\n");
    assert_eq!(session.wins(), 2);
    assert_eq!(session.losses(), 1);
}
