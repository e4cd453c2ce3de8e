use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::{default_log_path, init_logging};
use hangman::tui::TuiInterface;
use hangman::{GameInterface, GameState, Session, WordSource, game_loop};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();

    let log_path = cli.log_file.clone().or_else(default_log_path);
    if let Err(e) = init_logging(log_path.as_deref()) {
        eprintln!("Logging disabled: {e}");
    }

    let source = WordSource::new(&cli.words_path);
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut state = GameState::with_settings(source.words().clone(), cli.max_guesses, rng);
    let mut session = Session::new();

    let mut interface: Box<dyn GameInterface> = if cli.tui {
        match TuiInterface::new() {
            Ok(tui) => Box::new(tui),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let clear_screen = io::stdout().is_terminal();
        Box::new(CliInterface::new(io::stdin().lock(), io::stdout()).with_screen_clearing(clear_screen))
    };

    game_loop(&mut state, &mut session, interface.as_mut());
    drop(interface);

    println!(
        "\nThanks for playing! Wins: {} Losses: {}",
        session.wins(),
        session.losses()
    );
    ExitCode::SUCCESS
}
