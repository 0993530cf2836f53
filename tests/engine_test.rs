//! Integration tests for the game engine.

use noughts::{
    Board, Cell, GameEngine, Mark, Mode, MoveError, Outcome, PendingTurn, WIN_LINES, evaluate,
    winning_line,
};

/// Plays a sequence of alternating moves, advancing the turn after each
/// non-terminal one, and returns the last outcome.
fn play(engine: &mut GameEngine, moves: &[usize]) -> Outcome {
    let mut last = Outcome::Continuing;
    for &index in moves {
        last = engine.apply_move(index, None).expect("legal move");
        if last == Outcome::Continuing {
            engine.next_turn();
        }
    }
    last
}

#[test]
fn test_column_win_scenario() {
    // X plays 0, O plays 1, X plays 3, O plays 2, X plays 6.
    let mut engine = GameEngine::new(Mode::TwoPlayers);
    let outcome = play(&mut engine, &[0, 1, 3, 2, 6]);

    assert_eq!(outcome, Outcome::Win(Mark::X));
    assert_eq!(engine.evaluate(), Outcome::Win(Mark::X));
    assert!(!engine.is_active());

    let line = engine.winning_line().expect("column 0,3,6 is complete");
    assert_eq!(line.mark, Mark::X);
    assert_eq!(line.cells, [0, 3, 6]);
}

#[test]
fn test_draw_scenario() {
    // X:0 O:1 X:2 O:3 X:4 O:6 X:5 O:8 X:7 fills the board with no line.
    let mut engine = GameEngine::new(Mode::TwoPlayers);
    let outcome = play(&mut engine, &[0, 1, 2, 3, 4, 6, 5, 8, 7]);

    assert_eq!(outcome, Outcome::Draw);
    assert!(!engine.is_active());
    assert_eq!(engine.winning_line(), None);
}

#[test]
fn test_occupied_cell_rejected_board_unchanged() {
    let mut engine = GameEngine::new(Mode::TwoPlayers);
    play(&mut engine, &[4]);
    let before = engine.board().clone();

    let result = engine.apply_move(4, None);
    assert_eq!(result, Err(MoveError::CellOccupied(4)));
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.current_player(), Mark::O);
}

#[test]
fn test_move_after_game_end_rejected_board_unchanged() {
    let mut engine = GameEngine::new(Mode::TwoPlayers);
    play(&mut engine, &[0, 1, 3, 2, 6]);
    let before = engine.board().clone();

    let result = engine.apply_move(5, None);
    assert_eq!(result, Err(MoveError::Inactive));
    assert_eq!(engine.board(), &before);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut engine = GameEngine::new(Mode::TwoPlayers);
    let before = engine.board().clone();

    assert_eq!(engine.apply_move(9, None), Err(MoveError::OutOfBounds(9)));
    assert_eq!(engine.board(), &before);
}

#[test]
fn test_every_line_wins_for_its_mark() {
    for cells in WIN_LINES {
        let mut board = Board::new();
        for index in cells {
            board.set(index, Cell::Taken(Mark::O)).expect("in bounds");
        }
        assert_eq!(evaluate(&board), Outcome::Win(Mark::O));
        let line = winning_line(&board).expect("line is complete");
        assert_eq!(line.cells, cells);
    }
}

#[test]
fn test_win_regardless_of_other_cells() {
    // Column 1,4,7 for O with unrelated X marks scattered around.
    let mut board = Board::new();
    for index in [1, 4, 7] {
        board.set(index, Cell::Taken(Mark::O)).expect("in bounds");
    }
    for index in [0, 5, 6] {
        board.set(index, Cell::Taken(Mark::X)).expect("in bounds");
    }
    assert_eq!(evaluate(&board), Outcome::Win(Mark::O));
}

#[test]
fn test_reset_restores_fresh_state() {
    let mut engine = GameEngine::new(Mode::TwoPlayers);
    play(&mut engine, &[0, 1, 3, 2, 6]);
    assert!(!engine.is_active());

    engine.reset(Mode::VsComputer);
    assert!(engine.is_active());
    assert_eq!(engine.current_player(), Mark::X);
    assert_eq!(engine.mode(), Mode::VsComputer);
    assert_eq!(engine.board().empty_cells().len(), 9);
    assert_eq!(engine.evaluate(), Outcome::Continuing);
}

#[test]
fn test_two_players_turns_alternate() {
    let mut engine = GameEngine::new(Mode::TwoPlayers);

    engine.apply_move(0, None).expect("legal move");
    assert_eq!(engine.next_turn(), PendingTurn::Human(Mark::O));

    engine.apply_move(1, None).expect("legal move");
    assert_eq!(engine.next_turn(), PendingTurn::Human(Mark::X));
}

#[test]
fn test_vs_computer_turn_forcing() {
    let mut engine = GameEngine::new(Mode::VsComputer);

    // Human X moves; the turn is forced to the computer.
    engine.apply_move(0, None).expect("legal move");
    assert_eq!(engine.next_turn(), PendingTurn::Computer);
    assert_eq!(engine.current_player(), Mark::O);

    // Computer O moves with an explicit marker; the turn is forced back
    // to the human.
    engine.apply_move(4, Some(Mark::O)).expect("legal move");
    assert_eq!(engine.next_turn(), PendingTurn::Human(Mark::X));
    assert_eq!(engine.current_player(), Mark::X);
}

#[test]
fn test_next_turn_after_game_end_leaves_state_alone() {
    let mut engine = GameEngine::new(Mode::TwoPlayers);
    play(&mut engine, &[0, 1, 3, 2, 6]);

    let current = engine.current_player();
    assert_eq!(engine.next_turn(), PendingTurn::Human(current));
    assert_eq!(engine.current_player(), current);
}

#[test]
fn test_cells_written_at_most_once_in_legal_play() {
    // Every legal game writes each cell once; replaying the draw
    // scenario leaves exactly the marks played, none overwritten.
    let mut engine = GameEngine::new(Mode::TwoPlayers);
    play(&mut engine, &[0, 1, 2, 3, 4, 6, 5, 8, 7]);

    let expected = [
        Cell::Taken(Mark::X),
        Cell::Taken(Mark::O),
        Cell::Taken(Mark::X),
        Cell::Taken(Mark::O),
        Cell::Taken(Mark::X),
        Cell::Taken(Mark::X),
        Cell::Taken(Mark::O),
        Cell::Taken(Mark::X),
        Cell::Taken(Mark::O),
    ];
    assert_eq!(engine.board().cells(), &expected);
}
