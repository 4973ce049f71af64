use crate::{
    board::Board,
    common::{Cell, MoveError},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    WonByX,
    WonByO,
    Draw,
}

impl GameStatus {
    /// Status of an arbitrary board.
    pub fn of(board: &Board) -> Self {
        match board.check_win() {
            Cell::X => GameStatus::WonByX,
            Cell::O => GameStatus::WonByO,
            Cell::Empty if board.has_available_move() => GameStatus::InProgress,
            Cell::Empty => GameStatus::Draw,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Cell> {
        match self {
            GameStatus::WonByX => Some(Cell::X),
            GameStatus::WonByO => Some(Cell::O),
            _ => None,
        }
    }
}

impl core::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::WonByX => write!(f, "X wins"),
            GameStatus::WonByO => write!(f, "O wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Core game logic: the board plus whose turn it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    move_count: usize,
}

impl GameEngine {
    /// Start a game on an empty board with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            move_count: 0,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves accepted so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Mark that plays next. X moves on even counts.
    pub fn current_player(&self) -> Cell {
        if self.move_count % 2 == 0 {
            Cell::X
        } else {
            Cell::O
        }
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// Play `raw` for the current player and report the resulting status.
    ///
    /// On error the turn does not advance and the board is unchanged.
    pub fn play(&mut self, raw: &str) -> Result<GameStatus, MoveError> {
        if self.status().is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.board.apply_move(self.current_player(), raw)?;
        self.move_count += 1;
        Ok(self.status())
    }
}
