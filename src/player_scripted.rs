use alloc::{
    collections::VecDeque,
    string::{String, ToString},
    vec::Vec,
};

use crate::{
    board::Board,
    common::{Cell, MoveError},
    player::Player,
};

/// Player that replays a fixed list of move tokens.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<String>,
    rejected: Vec<(String, MoveError)>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            moves: moves.into_iter().map(|m| m.as_ref().to_string()).collect(),
            rejected: Vec::new(),
        }
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    /// Tokens the engine refused, in order.
    pub fn rejected(&self) -> &[(String, MoveError)] {
        &self.rejected
    }
}

impl Player for ScriptedPlayer {
    fn select_move(&mut self, mark: Cell, _board: &Board) -> anyhow::Result<String> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("scripted player {} ran out of moves", mark))
    }

    fn handle_rejected(&mut self, _mark: Cell, raw: &str, err: MoveError) {
        self.rejected.push((raw.to_string(), err));
    }
}
