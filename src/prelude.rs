//! Commonly used types and utilities for ease of import.

pub use crate::{Board, Cell, GameEngine, GameStatus, MoveError, Player, ScriptedPlayer};

#[cfg(feature = "std")]
pub use crate::{CliPlayer, Session};
