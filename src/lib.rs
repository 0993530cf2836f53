//! Terminal tic-tac-toe: a 3x3 board with two-player and vs-computer
//! modes.
//!
//! The crate splits into a pure game core and a terminal front-end:
//!
//! - [`game`]: the [`GameEngine`] owning board and turn state, rules
//!   evaluation, and the random-move computer opponent.
//! - [`tui`]: ratatui rendering, keyboard handling, and the deferred
//!   computer-move scheduling.
//!
//! # Example
//!
//! ```
//! use noughts::{GameEngine, Mode, Outcome};
//!
//! let mut engine = GameEngine::new(Mode::TwoPlayers);
//! engine.apply_move(0, None)?; // X takes the top-left corner
//! engine.next_turn();
//! assert_eq!(engine.evaluate(), Outcome::Continuing);
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod game;
pub mod tui;

pub use game::{
    Board, Cell, ChooseError, GameEngine, GameState, Mark, Mode, MoveError, Outcome, PendingTurn,
    WIN_LINES, WinLine, choose_move, evaluate, winning_line,
};
