//! Computer opponent: uniform-random choice among empty cells.

use super::types::Board;
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::{debug, instrument};

/// Error from asking the computer to choose on a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ChooseError {
    /// Every cell is taken; callers should check before asking.
    #[display("no moves available")]
    NoMovesAvailable,
}

impl std::error::Error for ChooseError {}

/// Picks a cell for the computer, uniformly at random among empty cells.
///
/// The policy is deliberately the simplest possible: no lookahead, no
/// blocking or winning heuristic. The RNG is injected so tests can seed
/// the selection.
///
/// # Errors
///
/// Returns [`ChooseError::NoMovesAvailable`] if the board is full.
#[instrument(skip(rng))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize, ChooseError> {
    let open = board.empty_cells();
    let index = *open.choose(rng).ok_or(ChooseError::NoMovesAvailable)?;
    debug!(index, candidates = open.len(), "computer chose a cell");
    Ok(index)
}
