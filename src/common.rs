//! Common types for Tic-Tac-Toe: cell values and move errors.

/// Contents of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    X,
    O,
    #[default]
    Empty,
}

impl Cell {
    /// Symbol used when rendering the board.
    pub const fn symbol(self) -> char {
        match self {
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Empty => '_',
        }
    }

    /// The mark that moves after `self`. `Empty` has no opponent.
    pub const fn opponent(self) -> Cell {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }

    pub const fn is_mark(self) -> bool {
        !matches!(self, Cell::Empty)
    }
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Errors returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Input is not one of the nine move tokens.
    InvalidInput,
    /// Target cell already holds a mark.
    CellOccupied,
    /// Attempted to write `Empty` as a player's mark.
    InvalidMark,
    /// The game has already reached a terminal state.
    GameOver,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::InvalidInput => write!(f, "Invalid input"),
            MoveError::CellOccupied => write!(f, "Cell is already occupied"),
            MoveError::InvalidMark => write!(f, "Only X or O can be placed on the board"),
            MoveError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
