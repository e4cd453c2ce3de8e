//! TUI (Terminal User Interface) module for Hangman
//!
//! Full-screen alternative to the console interface, built on Ratatui.
//!
//! # State Machine
//! - `EnteringGuess`: keys edit the input line, Enter submits it
//! - `ShowingBanner`: the win/loss banner covers the board until any key is pressed
//!
//! Raw mode swallows the interrupt signal, so Ctrl-C is handled here and ends
//! the game loop the same way end of input does on the console.

use crate::art::{LOSS_BANNER, WIN_BANNER};
use crate::error::GuessError;
use crate::game_loop::{GameInterface, GameView, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const MAX_INPUT_CHARS: usize = 64;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const WORD_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

const REJECTED_STATUS: &str = "Guess rejected - try again";

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuiState {
    EnteringGuess,
    ShowingBanner,
}

#[derive(Debug)]
struct Banner {
    art: &'static str,
    message: String,
    won: bool,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    view: Option<&'a GameView>,
    current_input: &'a str,
    banner: Option<&'a Banner>,
    error_message: &'a str,
    status: &'a str,
    state: TuiState,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    view: Option<GameView>,
    current_input: String,
    state: TuiState,
    banner: Option<Banner>,
    error_message: String,
    status: String,
    exit_requested: bool,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            view: None,
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            banner: None,
            error_message: String::new(),
            status: "Guess a letter or the whole word".to_string(),
            exit_requested: false,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            view: self.view.as_ref(),
            current_input: &self.current_input,
            banner: self.banner.as_ref(),
            error_message: &self.error_message,
            status: Self::status_text(&self.status, &self.error_message),
            state: self.state,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// The rejection notice lasts only as long as the error it belongs to;
    /// submitting the next guess clears both.
    fn status_text<'a>(status: &'a str, error_message: &str) -> &'a str {
        if error_message.is_empty() {
            status
        } else {
            REJECTED_STATUS
        }
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(5), // Tally and incorrect guesses
                Constraint::Min(10),   // Figure and word, or banner
                Constraint::Length(3), // Input
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        if let Some(view) = ctx.view {
            Self::render_tally(f, chunks[1], view);
        }
        match (ctx.state, ctx.banner, ctx.view) {
            (TuiState::ShowingBanner, Some(banner), _) => Self::render_banner(f, chunks[2], banner),
            (_, _, Some(view)) => Self::render_board(f, chunks[2], view),
            _ => {}
        }
        Self::render_input(f, chunks[3], ctx.current_input, ctx.error_message);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_tally(f: &mut Frame, area: Rect, view: &GameView) {
        let mut lines = vec![Line::from(vec![
            Span::styled("Wins: ", MESSAGE_STYLE),
            Span::raw(view.wins.to_string()),
            Span::styled("  Losses: ", MESSAGE_STYLE),
            Span::raw(view.losses.to_string()),
        ])];

        if !view.incorrect_words.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Incorrect word guesses: ", ERROR_STYLE),
                Span::raw(view.incorrect_words.join(", ")),
            ]));
        }
        if !view.incorrect_letters.is_empty() {
            let letters: String = view.incorrect_letters.iter().collect();
            lines.push(Line::from(vec![
                Span::styled("Incorrect letter guesses: ", ERROR_STYLE),
                Span::raw(letters),
            ]));
        }

        let tally = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Score"))
            .wrap(Wrap { trim: true });
        f.render_widget(tally, area);
    }

    fn render_board(f: &mut Frame, area: Rect, view: &GameView) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(20)])
            .split(area);

        let figure = Paragraph::new(view.figure.unwrap_or_default())
            .block(Block::default().borders(Borders::ALL).title("Gallows"));
        f.render_widget(figure, columns[0]);

        // Spread the letters out so placeholders are easy to count
        let spaced: String = view
            .masked_word
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(spaced, WORD_STYLE)),
            Line::from(""),
            Line::from(format!("{} letters", view.word_length)),
            Line::from(format!(
                "Guesses: {} of {}",
                view.total_guesses, view.max_guesses
            )),
        ];
        let word = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Word"));
        f.render_widget(word, columns[1]);
    }

    fn render_banner(f: &mut Frame, area: Rect, banner: &Banner) {
        let style = if banner.won { SUCCESS_STYLE } else { ERROR_STYLE };
        let mut lines: Vec<Line> = banner
            .art
            .lines()
            .map(|line| Line::from(Span::styled(line, style)))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(banner.message.as_str(), WORD_STYLE)));

        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str, error_message: &str) {
        let mut spans = vec![Span::raw("> "), Span::raw(current_input), Span::raw("_")];
        if !error_message.is_empty() {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(error_message, ERROR_STYLE));
        }
        let input = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title("Enter full word or a letter"));
        f.render_widget(input, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status = Paragraph::new(status)
            .style(MESSAGE_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(status, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "ENTER: guess | BACKSPACE: delete | ESC: clear | CTRL-C: quit",
            TuiState::ShowingBanner => "Press any key to start a new game | CTRL-C: quit",
        };
        let instructions = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
        f.render_widget(instructions, area);
    }

    fn is_interrupt(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
    }

    /// Blocks for the next key press.
    fn next_key() -> Result<KeyEvent, io::Error> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key),
                _other => {
                    debug_log!("next_key() - Ignoring event: {:?}", _other);
                }
            }
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        if Self::is_interrupt(&key) {
            info_log!("handle_guess_input() - Interrupt key pressed, returning Exit");
            return Some(UserAction::Exit);
        }
        match key.code {
            KeyCode::Enter => {
                let guess = std::mem::take(&mut self.current_input);
                self.error_message.clear();
                info_log!("handle_guess_input() - Submitting guess '{}'", guess);
                Some(UserAction::Guess(guess))
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Esc => {
                self.current_input.clear();
                self.error_message.clear();
                None
            }
            KeyCode::Char(c) if (c as u32) >= ASCII_CONTROL_CHAR_THRESHOLD => {
                if self.current_input.chars().count() < MAX_INPUT_CHARS {
                    self.current_input.push(c);
                }
                None
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }

    /// Shows a banner until any key is pressed.
    fn show_banner(&mut self, banner: Banner) {
        self.banner = Some(banner);
        self.state = TuiState::ShowingBanner;
        self.status = "Round over".to_string();
        self.draw_or_log();

        match Self::next_key() {
            Ok(key) if Self::is_interrupt(&key) => {
                info_log!("show_banner() - Interrupt key pressed");
                self.exit_requested = true;
            }
            Ok(_) => {}
            Err(e) => {
                debug_log!("show_banner() - Input error: {}", e);
                self.exit_requested = true;
            }
        }

        self.banner = None;
        self.state = TuiState::EnteringGuess;
        self.status = "New game - guess a letter or the whole word".to_string();
    }
}

impl GameInterface for TuiInterface {
    fn display_state(&mut self, view: &GameView) {
        self.view = Some(view.clone());
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> UserAction {
        if self.exit_requested {
            return UserAction::Exit;
        }
        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return UserAction::Exit;
            }
            match Self::next_key() {
                Ok(key) => {
                    if let Some(action) = self.handle_guess_input(key) {
                        return action;
                    }
                }
                Err(e) => {
                    info_log!("read_guess() - Error reading input: {}", e);
                    return UserAction::Exit;
                }
            }
        }
    }

    fn display_error(&mut self, error: &GuessError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_win(&mut self, secret: &str) {
        self.show_banner(Banner {
            art: WIN_BANNER,
            message: format!("You guessed it: {secret}"),
            won: true,
        });
    }

    fn display_loss(&mut self, secret: &str) {
        self.show_banner(Banner {
            art: LOSS_BANNER,
            message: format!("The word was: {secret}"),
            won: false,
        });
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
