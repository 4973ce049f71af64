pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Row labels, top to bottom.
pub const ROW_LABELS: [char; BOARD_SIZE] = ['a', 'b', 'c'];
/// Column labels, left to right.
pub const COL_LABELS: [char; BOARD_SIZE] = ['1', '2', '3'];

/// Every move token a player may enter, in row-major order.
pub const ALLOWED_MOVES: [&str; CELL_COUNT] =
    ["a1", "a2", "a3", "b1", "b2", "b3", "c1", "c2", "c3"];

/// Returns `true` if `token` is one of the nine accepted move strings.
pub fn is_allowed_move(token: &str) -> bool {
    ALLOWED_MOVES.iter().any(|m| *m == token)
}
