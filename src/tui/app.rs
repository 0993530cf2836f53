//! Application state and input handling.

use crate::game::{GameEngine, Mark, Mode, Outcome, PendingTurn, choose_move};
use crossterm::event::KeyCode;
use rand::rngs::SmallRng;
use tokio::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::input;

/// Pause before the computer's move lands, so the "Computer's turn"
/// status is visible first.
pub const COMPUTER_DELAY: Duration = Duration::from_millis(500);

/// Main application state.
pub struct App {
    engine: GameEngine,
    rng: SmallRng,
    cursor: usize,
    status: String,
    /// Single slot for the deferred computer move; at most one is ever
    /// armed, and a move fully resolves before another is accepted.
    pending: Option<Instant>,
    quit: bool,
}

impl App {
    /// Creates the application with a fresh game.
    pub fn new(mode: Mode, rng: SmallRng) -> Self {
        Self {
            engine: GameEngine::new(mode),
            rng,
            cursor: 4,
            status: "Player X's turn".to_string(),
            pending: None,
            quit: false,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the keyboard cursor's cell index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns true while the computer's move is scheduled but not yet
    /// applied. Cell input is ignored during this window.
    pub fn computer_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns true once the player asked to quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('r') => self.restart(self.engine.mode()),
            KeyCode::Char('m') => {
                let mode = match self.engine.mode() {
                    Mode::TwoPlayers => Mode::VsComputer,
                    Mode::VsComputer => Mode::TwoPlayers,
                };
                self.restart(mode);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(index) = input::digit_to_index(c) {
                    self.cursor = index;
                    self.human_move(index);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.human_move(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Fires the deferred computer move once its deadline passes.
    pub fn tick(&mut self) {
        if matches!(self.pending, Some(due) if Instant::now() >= due) {
            self.pending = None;
            self.computer_move();
        }
    }

    fn human_move(&mut self, index: usize) {
        if self.pending.is_some() {
            // Cells are disabled while the computer's move is pending.
            return;
        }
        match self.engine.apply_move(index, None) {
            Ok(Outcome::Continuing) => match self.engine.next_turn() {
                PendingTurn::Human(mark) => {
                    self.status = format!("Player {mark}'s turn");
                }
                PendingTurn::Computer => {
                    self.status = "Computer's turn".to_string();
                    self.pending = Some(Instant::now() + COMPUTER_DELAY);
                }
            },
            Ok(outcome) => self.finish(outcome),
            Err(err) => debug!(%err, index, "move rejected"),
        }
    }

    fn computer_move(&mut self) {
        let index = match choose_move(self.engine.board(), &mut self.rng) {
            Ok(index) => index,
            Err(err) => {
                warn!(%err, "computer has no move");
                return;
            }
        };
        match self.engine.apply_move(index, Some(Mark::O)) {
            Ok(Outcome::Continuing) => {
                self.engine.next_turn();
                self.status = "Player X's turn".to_string();
            }
            Ok(outcome) => self.finish(outcome),
            Err(err) => warn!(%err, index, "computer move rejected"),
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, board = %self.engine.board().display(), "game over");
        self.status = match outcome {
            Outcome::Win(mark) => {
                format!("Player {mark} wins! Press 'r' to restart or 'q' to quit.")
            }
            Outcome::Draw => "It's a draw! Press 'r' to restart or 'q' to quit.".to_string(),
            Outcome::Continuing => return,
        };
    }

    fn restart(&mut self, mode: Mode) {
        debug!(%mode, "restarting game");
        self.engine.reset(mode);
        self.pending = None;
        self.status = "Player X's turn".to_string();
    }
}
