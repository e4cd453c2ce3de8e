use crate::art::hangman_figure;
use crate::error::GuessError;
use crate::game_state::GameState;
use crate::session::Session;
use crate::{debug_log, info_log};

/// What the player asked for at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    /// Input has ended; the loop returns.
    Exit,
}

/// Everything a display needs to draw one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub wins: u32,
    pub losses: u32,
    pub incorrect_letters: Vec<char>,
    pub incorrect_words: Vec<String>,
    pub figure: Option<&'static str>,
    pub masked_word: String,
    pub word_length: usize,
    pub total_guesses: usize,
    pub max_guesses: usize,
}

impl GameView {
    #[must_use]
    pub fn capture(state: &GameState, session: &Session) -> Self {
        Self {
            wins: session.wins(),
            losses: session.losses(),
            incorrect_letters: state.incorrect_letters().to_vec(),
            incorrect_words: state.incorrect_word_guesses().to_vec(),
            figure: hangman_figure(state.incorrect_guess_count(), state.is_lost()),
            masked_word: state.masked_word(),
            word_length: state.word_length(),
            total_guesses: state.total_guesses(),
            max_guesses: state.max_guesses(),
        }
    }
}

/// Display collaborator driven by [`game_loop`].
pub trait GameInterface {
    /// Draws the current turn, including the guess prompt.
    fn display_state(&mut self, view: &GameView);
    /// Blocks until the player submits a line of input.
    fn read_guess(&mut self) -> UserAction;
    /// Reports a rejected guess; the prompt is then read again.
    fn display_error(&mut self, error: &GuessError);
    /// Shows the win banner and waits for the player to continue.
    fn display_win(&mut self, secret: &str);
    /// Shows the loss banner and waits for the player to continue.
    fn display_loss(&mut self, secret: &str);
}

/// Outcome of soliciting one guess.
enum TurnResult {
    Applied,
    Exit,
}

/// Plays game after game until the interface reports the end of input.
///
/// A new secret word is drawn after every win or loss. Rejected guesses are
/// reported and the prompt repeats without drawing the board again.
pub fn game_loop<I: GameInterface + ?Sized>(
    state: &mut GameState,
    session: &mut Session,
    interface: &mut I,
) {
    loop {
        interface.display_state(&GameView::capture(state, session));

        if state.is_won() {
            session.record_win();
            info_log!("Player won ({} wins, {} losses)", session.wins(), session.losses());
            interface.display_win(state.secret_word());
            state.new_game();
            continue;
        }

        if state.is_lost() {
            session.record_loss();
            info_log!("Player lost ({} wins, {} losses)", session.wins(), session.losses());
            interface.display_loss(state.secret_word());
            state.new_game();
            continue;
        }

        if let TurnResult::Exit = play_turn(state, interface) {
            info_log!("Input ended after {} game(s)", session.games_played());
            return;
        }
    }
}

fn play_turn<I: GameInterface + ?Sized>(state: &mut GameState, interface: &mut I) -> TurnResult {
    loop {
        let input = match interface.read_guess() {
            UserAction::Guess(input) => input,
            UserAction::Exit => return TurnResult::Exit,
        };

        match state.guess(input.trim()) {
            Ok(_outcome) => {
                debug_log!("Guess {:?} -> {:?}", input, _outcome);
                return TurnResult::Applied;
            }
            Err(e) => interface.display_error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::MAX_GUESSES;
    use crate::wordbank::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        State(GameView),
        Error(GuessError),
        Win(String),
        Loss(String),
    }

    /// Scripted interface that records every call.
    struct ScriptedInterface {
        inputs: VecDeque<String>,
        events: Vec<Event>,
    }

    impl ScriptedInterface {
        fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| (*s).to_string()).collect(),
                events: Vec::new(),
            }
        }

        fn states(&self) -> Vec<&GameView> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::State(view) => Some(view),
                    _ => None,
                })
                .collect()
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_state(&mut self, view: &GameView) {
            self.events.push(Event::State(view.clone()));
        }

        fn read_guess(&mut self) -> UserAction {
            self.inputs
                .pop_front()
                .map_or(UserAction::Exit, UserAction::Guess)
        }

        fn display_error(&mut self, error: &GuessError) {
            self.events.push(Event::Error(error.clone()));
        }

        fn display_win(&mut self, secret: &str) {
            self.events.push(Event::Win(secret.to_string()));
        }

        fn display_loss(&mut self, secret: &str) {
            self.events.push(Event::Loss(secret.to_string()));
        }
    }

    fn game_with_word(word: &str) -> GameState {
        let words = WordList::new(vec![word.to_string()]).unwrap();
        GameState::with_settings(words, MAX_GUESSES, StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let mut state = game_with_word("cat");
        let mut session = Session::new();
        let mut interface = ScriptedInterface::new(&[]);

        game_loop(&mut state, &mut session, &mut interface);

        assert_eq!(interface.events.len(), 1);
        assert_eq!(session.games_played(), 0);
    }

    #[test]
    fn test_game_loop_win_by_letters() {
        let mut state = game_with_word("cat");
        let mut session = Session::new();
        let mut interface = ScriptedInterface::new(&["c", "a", "t"]);

        game_loop(&mut state, &mut session, &mut interface);

        assert_eq!(session.wins(), 1);
        assert_eq!(session.losses(), 0);
        assert!(interface.events.contains(&Event::Win("cat".to_string())));

        // The board after the win banner belongs to a fresh game
        let last = interface.states().last().copied().unwrap().clone();
        assert_eq!(last.masked_word, "___");
        assert_eq!(last.wins, 1);
        assert_eq!(last.total_guesses, 0);
    }

    #[test]
    fn test_game_loop_win_by_word() {
        let mut state = game_with_word("lexicon");
        let mut session = Session::new();
        let mut interface = ScriptedInterface::new(&["LEXICON"]);

        game_loop(&mut state, &mut session, &mut interface);

        assert_eq!(session.wins(), 1);
    }

    #[test]
    fn test_game_loop_loss_increments_losses() {
        let mut state = game_with_word("dog");
        let mut session = Session::new();
        let inputs = ["a", "b", "c", "e", "f", "h", "i", "j", "k", "l"];
        let mut interface = ScriptedInterface::new(&inputs);

        game_loop(&mut state, &mut session, &mut interface);

        assert_eq!(session.losses(), 1);
        assert_eq!(session.wins(), 0);
        assert!(interface.events.contains(&Event::Loss("dog".to_string())));

        // The final board before the banner shows the full figure
        let states = interface.states();
        let lost_view = states[states.len() - 2];
        assert_eq!(lost_view.total_guesses, 10);
        assert_eq!(lost_view.figure, crate::art::HANGMAN_STAGES.last().copied());
    }

    #[test]
    fn test_game_loop_errors_repeat_prompt_without_redraw() {
        let mut state = game_with_word("cat");
        let mut session = Session::new();
        let mut interface = ScriptedInterface::new(&["c", "c", "7", "c", "a"]);

        game_loop(&mut state, &mut session, &mut interface);

        let kinds: Vec<&str> = interface
            .events
            .iter()
            .map(|e| match e {
                Event::State(_) => "state",
                Event::Error(_) => "error",
                Event::Win(_) => "win",
                Event::Loss(_) => "loss",
            })
            .collect();
        assert_eq!(kinds, ["state", "state", "error", "error", "error", "state"]);

        let errors: Vec<&GuessError> = interface
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Error(err) => Some(err),
                _ => None,
            })
            .collect();
        assert_eq!(
            errors,
            [
                &GuessError::AlreadyGuessed('c'),
                &GuessError::NotALetter('7'),
                &GuessError::AlreadyGuessed('c'),
            ]
        );
        assert_eq!(state.total_guesses(), 2);
        assert_eq!(state.masked_word(), "ca_");
    }

    #[test]
    fn test_game_loop_duplicate_word_reported() {
        let mut state = game_with_word("cat");
        let mut session = Session::new();
        let mut interface = ScriptedInterface::new(&["cow", "cow"]);

        game_loop(&mut state, &mut session, &mut interface);

        assert!(
            interface
                .events
                .contains(&Event::Error(GuessError::DuplicateWordGuess("cow".to_string())))
        );
        assert_eq!(state.incorrect_word_guesses().len(), 1);
    }

    #[test]
    fn test_game_loop_empty_input_redraws() {
        let mut state = game_with_word("cat");
        let mut session = Session::new();
        let mut interface = ScriptedInterface::new(&["", "  "]);

        game_loop(&mut state, &mut session, &mut interface);

        assert_eq!(interface.states().len(), 3);
        assert_eq!(state.total_guesses(), 0);
    }

    #[test]
    fn test_game_loop_multiple_games() {
        let mut state = game_with_word("cat");
        let mut session = Session::new();
        let mut inputs = vec!["cat"];
        inputs.extend(["b", "d", "e", "f", "g", "h", "i", "j", "k", "l"]);
        inputs.push("cat");
        let mut interface = ScriptedInterface::new(&inputs);

        game_loop(&mut state, &mut session, &mut interface);

        assert_eq!(session.wins(), 2);
        assert_eq!(session.losses(), 1);
        assert_eq!(session.games_played(), 3);
    }

    #[test]
    fn test_game_view_capture() {
        let mut state = game_with_word("cat");
        state.guess("z").unwrap();
        state.guess("cow").unwrap();
        state.guess("a").unwrap();
        let mut session = Session::new();
        session.record_loss();

        let view = GameView::capture(&state, &session);
        assert_eq!(view.losses, 1);
        assert_eq!(view.incorrect_letters, vec!['z']);
        assert_eq!(view.incorrect_words, vec!["cow".to_string()]);
        assert_eq!(view.figure, Some(crate::art::HANGMAN_STAGES[1]));
        assert_eq!(view.masked_word, "_a_");
        assert_eq!(view.word_length, 3);
        assert_eq!(view.total_guesses, 3);
        assert_eq!(view.max_guesses, 10);
    }
}
