//! Game engine: owns the game state and enforces the rules.

use super::rules;
use super::rules::win::WinLine;
use super::types::{Board, GameState, Mark, Mode, Outcome};
use tracing::{debug, instrument};

/// Error from attempting an illegal move.
///
/// All variants are recoverable by the caller; the board is left
/// unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has ended; no moves are accepted until reset.
    #[display("game is over")]
    Inactive,

    /// The target cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The index is outside the board.
    #[display("cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// Who acts next after a non-terminal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingTurn {
    /// A human player acts next with the given mark.
    Human(Mark),
    /// The computer acts next; the caller should schedule its move
    /// after a presentation delay.
    Computer,
}

/// Tic-tac-toe engine.
///
/// Owns a [`GameState`] exclusively and mediates every mutation. The
/// state is replaced wholesale on [`reset`](GameEngine::reset), never
/// partially repaired.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    mode: Mode,
}

impl GameEngine {
    /// Creates an engine with a fresh game in the given mode.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            state: GameState::new(),
            mode,
        }
    }

    /// Resets to an empty board with X to move, storing the mode.
    ///
    /// Idempotent; cannot fail.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: Mode) {
        debug!(%mode, "resetting game");
        self.state = GameState::new();
        self.mode = mode;
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the stored mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the mark whose turn it is.
    pub fn current_player(&self) -> Mark {
        self.state.current_player()
    }

    /// Returns false once a win or draw has been reached.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Applies a move at the given cell index.
    ///
    /// The marker defaults to the current player; the computer-move path
    /// passes its mark explicitly. The board is evaluated immediately
    /// after the write, and a terminal outcome deactivates the engine.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Inactive`] after game end,
    /// [`MoveError::CellOccupied`] for a filled cell, or
    /// [`MoveError::OutOfBounds`] for an index outside 0-8. The board is
    /// unchanged on error.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, marker: Option<Mark>) -> Result<Outcome, MoveError> {
        if !self.state.is_active() {
            return Err(MoveError::Inactive);
        }
        if index >= 9 {
            return Err(MoveError::OutOfBounds(index));
        }
        if !self.state.board().is_empty(index) {
            return Err(MoveError::CellOccupied(index));
        }

        let mark = marker.unwrap_or_else(|| self.state.current_player());
        self.state.place(index, mark);

        let outcome = self.evaluate();
        if outcome.is_terminal() {
            self.state.finish();
        }
        debug!(index, %mark, %outcome, "move applied");

        Ok(outcome)
    }

    /// Evaluates the board without mutating state.
    pub fn evaluate(&self) -> Outcome {
        rules::evaluate(self.state.board())
    }

    /// Returns the first completed line, if any, for highlighting.
    pub fn winning_line(&self) -> Option<WinLine> {
        rules::win::winning_line(self.state.board())
    }

    /// Advances the turn after a non-terminal move.
    ///
    /// Two-players mode flips X and O. Vs-computer mode forces the turn
    /// to O after a human move (reporting [`PendingTurn::Computer`] so
    /// the caller schedules the computer), and back to X after the
    /// computer's move. Once the game has ended the turn is left as is.
    #[instrument(skip(self))]
    pub fn next_turn(&mut self) -> PendingTurn {
        if !self.state.is_active() {
            return PendingTurn::Human(self.state.current_player());
        }
        match self.mode {
            Mode::TwoPlayers => {
                let next = self.state.current_player().opponent();
                self.state.set_current(next);
                PendingTurn::Human(next)
            }
            Mode::VsComputer => {
                if self.state.current_player() == Mark::X {
                    self.state.set_current(Mark::O);
                    PendingTurn::Computer
                } else {
                    self.state.set_current(Mark::X);
                    PendingTurn::Human(Mark::X)
                }
            }
        }
    }
}
