//! Core domain types for the game.

/// Player mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Mark {
    /// Mark X (goes first).
    X,
    /// Mark O (goes second; the computer in vs-computer mode).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Unclaimed cell.
    Empty,
    /// Cell taken by a mark.
    Taken(Mark),
}

/// 3x3 board with cells in row-major order (index = row * 3 + col).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at the given index.
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), &'static str> {
        if index >= 9 {
            return Err("cell index out of bounds");
        }
        self.cells[index] = cell;
        Ok(())
    }

    /// Checks if the cell at the given index is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Indexes of all empty cells, in board order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..self.cells.len()).filter(|&i| self.is_empty(i)).collect()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Taken(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Opponent mode, selected externally and passed in at reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Two humans at one keyboard.
    TwoPlayers,
    /// Human (X) against the random-move computer (O).
    VsComputer,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::VsComputer
    }
}

/// Result of evaluating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No line is complete and empty cells remain.
    Continuing,
    /// A line is complete for the mark.
    Win(Mark),
    /// The board is full with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }

    /// Returns true once no further moves can be accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continuing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Continuing => write!(f, "in progress"),
            Outcome::Win(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state: board, turn, and liveness.
///
/// Replaced wholesale on reset, mutated only through the engine's
/// move operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    active: bool,
}

impl GameState {
    /// Creates a fresh state: empty board, X to move, active.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            active: true,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns false once a win or draw has been reached.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Writes a mark into a cell (unchecked; the engine validates first).
    pub(super) fn place(&mut self, index: usize, mark: Mark) {
        self.board.cells[index] = Cell::Taken(mark);
    }

    /// Hands the turn to the given mark.
    pub(super) fn set_current(&mut self, mark: Mark) {
        self.current_player = mark;
    }

    /// Ends the game; no further moves are accepted.
    pub(super) fn finish(&mut self) {
        self.active = false;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
