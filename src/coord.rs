//! Mapping between move tokens such as `b3` and board indices.

use crate::common::MoveError;
use crate::config::{is_allowed_move, ALLOWED_MOVES, BOARD_SIZE};

/// Row index for a row letter, counted from `a`.
pub fn row_index(letter: char) -> Option<usize> {
    let idx = (letter as u32).checked_sub('a' as u32)? as usize;
    (idx < BOARD_SIZE).then_some(idx)
}

/// Column index for a column digit, counted from `1`.
pub fn col_index(digit: char) -> Option<usize> {
    let idx = (digit as u32).checked_sub('1' as u32)? as usize;
    (idx < BOARD_SIZE).then_some(idx)
}

/// Parse a raw move token into `(row, col)`.
///
/// Only the nine tokens in [`ALLOWED_MOVES`](crate::config::ALLOWED_MOVES) are
/// accepted. Matching is exact: no case folding and no trimming.
pub fn parse_move(raw: &str) -> Result<(usize, usize), MoveError> {
    if !is_allowed_move(raw) || raw.len() != 2 {
        return Err(MoveError::InvalidInput);
    }
    let mut chars = raw.chars();
    let row = chars.next().and_then(row_index);
    let col = chars.next().and_then(col_index);
    match (row, col) {
        (Some(r), Some(c)) => Ok((r, c)),
        _ => Err(MoveError::InvalidInput),
    }
}

/// Render `(row, col)` back to its move token.
pub fn coord_to_token(row: usize, col: usize) -> Option<&'static str> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some(ALLOWED_MOVES[row * BOARD_SIZE + col])
}

