use tictactoe::{Board, Cell, MoveError};

const EMPTY_GRID: &str = "   1 2 3\n  ------\na| _ _ _\nb| _ _ _\nc| _ _ _\n";

fn board_with(moves: &[(Cell, &str)]) -> Board {
    let mut board = Board::new();
    for (mark, raw) in moves {
        board.apply_move(*mark, raw).unwrap();
    }
    board
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(board.get(r, c), Some(Cell::Empty));
        }
    }
    assert_eq!(board.get(3, 0), None);
    assert!(board.has_available_move());
    assert_eq!(board.check_win(), Cell::Empty);
    assert_eq!(board, Board::default());
}

#[test]
fn test_format_empty_board() {
    assert_eq!(Board::new().format(), EMPTY_GRID);
    assert_eq!(Board::new().to_string(), EMPTY_GRID);
}

#[test]
fn test_format_marks() {
    let board = board_with(&[(Cell::X, "a1"), (Cell::O, "b2"), (Cell::X, "c3")]);
    assert_eq!(
        board.format(),
        "   1 2 3\n  ------\na| X _ _\nb| _ O _\nc| _ _ X\n"
    );
}

#[test]
fn test_apply_move_maps_tokens() {
    let mut board = Board::new();
    assert_eq!(board.apply_move(Cell::X, "a1"), Ok((0, 0)));
    assert_eq!(board.apply_move(Cell::O, "b3"), Ok((1, 2)));
    assert_eq!(board.apply_move(Cell::X, "c2"), Ok((2, 1)));
    assert_eq!(board.get(0, 0), Some(Cell::X));
    assert_eq!(board.get(1, 2), Some(Cell::O));
    assert_eq!(board.get(2, 1), Some(Cell::X));
    assert_eq!(board.occupied(), 3);
}

#[test]
fn test_invalid_input_leaves_board_unchanged() {
    let mut board = board_with(&[(Cell::X, "b2")]);
    let before = board;
    for raw in ["d4", "", "a", "a0", "a4", "A1", " a1", "a1 ", "a1\n", "1a", "a10", "b22", "xx"] {
        assert_eq!(
            board.apply_move(Cell::O, raw),
            Err(MoveError::InvalidInput),
            "{:?} should be rejected",
            raw
        );
    }
    assert_eq!(board, before);
}

#[test]
fn test_occupied_cell_rejected() {
    let mut board = board_with(&[(Cell::X, "a1")]);
    let before = board;
    assert_eq!(board.apply_move(Cell::O, "a1"), Err(MoveError::CellOccupied));
    assert_eq!(board.apply_move(Cell::X, "a1"), Err(MoveError::CellOccupied));
    assert_eq!(board, before);
}

#[test]
fn test_empty_mark_rejected() {
    let mut board = Board::new();
    assert_eq!(board.apply_move(Cell::Empty, "a1"), Err(MoveError::InvalidMark));
    assert_eq!(board, Board::new());
}

#[test]
fn test_rows_and_columns() {
    use Cell::{Empty as E, O, X};
    let row = Board::from_rows([[E, E, E], [O, O, O], [X, X, E]]);
    assert_eq!(row.check_rows_and_columns(), O);
    assert_eq!(row.check_diagonals(), E);
    assert_eq!(row.check_win(), O);

    let col = Board::from_rows([[E, X, O], [E, X, O], [E, X, E]]);
    assert_eq!(col.check_rows_and_columns(), X);
    assert_eq!(col.check_win(), X);
}

#[test]
fn test_diagonals() {
    use Cell::{Empty as E, O, X};
    let main = Board::from_rows([[O, X, E], [X, O, E], [E, X, O]]);
    assert_eq!(main.check_rows_and_columns(), E);
    assert_eq!(main.check_diagonals(), O);
    assert_eq!(main.check_win(), O);

    let anti = Board::from_rows([[O, E, X], [O, X, E], [X, E, E]]);
    assert_eq!(anti.check_diagonals(), X);
    assert_eq!(anti.check_win(), X);
}

#[test]
fn test_row_scan_order_on_malformed_board() {
    use Cell::{Empty as E, O, X};
    // O owns row a, X owns row b: index 0 is reported first.
    let board = Board::from_rows([[O, O, O], [X, X, X], [E, E, E]]);
    assert_eq!(board.check_rows_and_columns(), O);
    // Same for columns: O in column 1 is found before X in column 2.
    let board = Board::from_rows([[O, X, E], [O, X, E], [O, X, E]]);
    assert_eq!(board.check_rows_and_columns(), O);
}

#[test]
fn test_check_win_on_malformed_board_reports_first_line() {
    use Cell::{Empty as E, O, X};
    // The row scan stops at row a, so X's row c is never seen.
    let board = Board::from_rows([[O, O, O], [E, E, E], [X, X, X]]);
    assert_eq!(board.check_win(), O);
    let board = Board::from_rows([[X, X, X], [E, E, E], [O, O, O]]);
    assert_eq!(board.check_win(), X);
}

#[test]
fn test_full_board_without_line() {
    use Cell::{O, X};
    let board = Board::from_rows([[X, O, X], [X, O, X], [O, X, O]]);
    assert!(!board.has_available_move());
    assert_eq!(board.check_win(), Cell::Empty);
}

#[test]
fn test_cell_symbols() {
    assert_eq!(Cell::X.symbol(), 'X');
    assert_eq!(Cell::O.symbol(), 'O');
    assert_eq!(Cell::Empty.symbol(), '_');
    assert_eq!(Cell::X.opponent(), Cell::O);
    assert_eq!(Cell::O.opponent(), Cell::X);
    assert_eq!(Cell::Empty.opponent(), Cell::Empty);
}
