#![cfg(feature = "std")]

use std::io::Write;

use crate::{
    common::Cell,
    config::ALLOWED_MOVES,
    game::{GameEngine, GameStatus},
    player::Player,
};

/// One console game: the engine plus the two players taking turns on it.
pub struct Session<X, O> {
    engine: GameEngine,
    x: X,
    o: O,
}

impl<X: Player, O: Player> Session<X, O> {
    pub fn new(x: X, o: O) -> Self {
        Self {
            engine: GameEngine::new(),
            x,
            o,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Players as `(x, o)`.
    pub fn players(&self) -> (&X, &O) {
        (&self.x, &self.o)
    }

    fn player_mut(&mut self, mark: Cell) -> &mut dyn Player {
        match mark {
            Cell::O => &mut self.o,
            _ => &mut self.x,
        }
    }

    /// Alternate turns until the game reaches a terminal state.
    ///
    /// A refused move is reported to `out` and the same player is asked
    /// again. Fails only if a player cannot produce input or `out` cannot be
    /// written.
    pub fn run<W: Write>(&mut self, out: &mut W) -> anyhow::Result<GameStatus> {
        log::info!("new game started");
        while !self.engine.status().is_terminal() {
            let mark = self.engine.current_player();
            writeln!(out, "\n\n{} to move", mark)?;
            write!(out, "{}", self.engine.board())?;
            writeln!(out, "Allowed moves: [{}]", ALLOWED_MOVES.join(", "))?;
            writeln!(out, "Enter move:")?;
            out.flush()?;

            let board = *self.engine.board();
            let raw = self.player_mut(mark).select_move(mark, &board)?;
            if let Err(err) = self.engine.play(&raw) {
                writeln!(out, "\n{}", err)?;
                self.player_mut(mark).handle_rejected(mark, &raw, err);
            }
        }

        let status = self.engine.status();
        write!(out, "{}", self.engine.board())?;
        writeln!(out, "{}", status)?;
        out.flush()?;
        log::info!(
            "game finished: {} after {} moves",
            status,
            self.engine.move_count()
        );
        Ok(status)
    }
}
