//! Draw detection.

use super::super::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells taken).
///
/// A full board with no completed line is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::types::Mark;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(4, Cell::Taken(Mark::X)).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for index in 0..9 {
            board.set(index, Cell::Taken(Mark::X)).unwrap();
        }
        assert!(is_full(&board));
    }
}
