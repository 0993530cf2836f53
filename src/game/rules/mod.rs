//! Board evaluation: win and draw detection.

pub mod draw;
pub mod win;

use super::types::{Board, Outcome};
use tracing::instrument;

/// Evaluates the board.
///
/// Scans the eight fixed lines in table order (rows, then columns, then
/// diagonals) and reports the first completed line's mark as the winner.
/// A full board with no completed line is a draw; anything else continues.
/// Does not mutate state.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = win::winning_line(board) {
        return Outcome::Win(line.mark);
    }
    if draw::is_full(board) {
        return Outcome::Draw;
    }
    Outcome::Continuing
}

#[cfg(test)]
mod tests {
    use super::super::types::{Cell, Mark};
    use super::*;

    #[test]
    fn test_empty_board_continues() {
        assert_eq!(evaluate(&Board::new()), Outcome::Continuing);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let marks = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
        ];
        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            board.set(index, Cell::Taken(mark)).unwrap();
        }
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_beats_draw_on_full_board() {
        // X wins the top row even though the board is full.
        let marks = [
            Mark::X,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
        ];
        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            board.set(index, Cell::Taken(mark)).unwrap();
        }
        assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
    }
}
