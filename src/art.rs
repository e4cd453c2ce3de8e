//! Hangman figures and end-of-game banners.

pub const HANGMAN_STAGES: [&str; 10] = [
    "      |\n      |\n      |\n=========",
    "      |\n      |\n      |\n      |\n=========",
    "      |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

pub const WIN_BANNER: &str = r"
  ______                                                       __
 /      \                                                     /  |
/$$$$$$  |  ______    ______    ______    ______    _______  _$$ |_
$$ |  $$/  /      \  /      \  /      \  /      \  /       |/ $$   |
$$ |      /$$$$$$  |/$$$$$$  |/$$$$$$  |/$$$$$$  |/$$$$$$$/ $$$$$$/
$$ |   __ $$ |  $$ |$$ |  $$/ $$ |  $$/ $$    $$ |$$ |        $$ | __
$$ \__/  |$$ \__$$ |$$ |      $$ |      $$$$$$$$/ $$ \_____   $$ |/  |
$$    $$/ $$    $$/ $$ |      $$ |      $$       |$$       |  $$  $$/
 $$$$$$/   $$$$$$/  $$/       $$/        $$$$$$$/  $$$$$$$/    $$$$/";

pub const LOSS_BANNER: &str = r"
  ______                                           __                        __
 /      \                                         /  |                      /  |
/$$$$$$  |  ______   _____  ____    ______        $$ |  ______    _______  _$$ |_
$$ | _$$/  /      \ /     \/    \  /      \       $$ | /      \  /       |/ $$   |
$$ |/    | $$$$$$  |$$$$$$ $$$$  |/$$$$$$  |      $$ |/$$$$$$  |/$$$$$$$/ $$$$$$/
$$ |$$$$ | /    $$ |$$ | $$ | $$ |$$    $$ |      $$ |$$ |  $$ |$$      \   $$ | __
$$ \__$$ |/$$$$$$$ |$$ | $$ | $$ |$$$$$$$$/       $$ |$$ \__$$ | $$$$$$  |  $$ |/  |
$$    $$/ $$    $$ |$$ | $$ | $$ |$$       |      $$ |$$    $$/ /     $$/   $$  $$/
 $$$$$$/   $$$$$$$/ $$/  $$/  $$/  $$$$$$$/       $$/  $$$$$$/  $$$$$$$/     $$$$/";

/// Picks the figure for the current number of incorrect guesses.
///
/// There is nothing to draw before the first incorrect guess. A lost game
/// always shows the complete figure, and budgets above ten stay on the last
/// stage once it is reached.
#[must_use]
pub fn hangman_figure(incorrect_guesses: usize, lost: bool) -> Option<&'static str> {
    if lost {
        return HANGMAN_STAGES.last().copied();
    }
    if incorrect_guesses == 0 {
        return None;
    }
    let stage = incorrect_guesses.min(HANGMAN_STAGES.len());
    Some(HANGMAN_STAGES[stage - 1])
}
