use alloc::string::String;

use crate::{
    board::Board,
    common::{Cell, MoveError},
};

/// Interface implemented by different player types.
pub trait Player {
    /// Produce the raw move token for `mark` given the current board.
    ///
    /// The token is validated by the engine, not by the player.
    fn select_move(&mut self, mark: Cell, board: &Board) -> anyhow::Result<String>;

    /// Inform the player that its last token was refused.
    fn handle_rejected(&mut self, _mark: Cell, _raw: &str, _err: MoveError) {}
}
