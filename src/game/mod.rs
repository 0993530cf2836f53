//! Game core: domain types, board evaluation, engine, and the computer
//! player.

mod ai;
mod engine;
mod rules;
mod types;

pub use ai::{ChooseError, choose_move};
pub use engine::{GameEngine, MoveError, PendingTurn};
pub use rules::evaluate;
pub use rules::win::{WIN_LINES, WinLine, winning_line};
pub use types::{Board, Cell, GameState, Mark, Mode, Outcome};
