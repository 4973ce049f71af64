//! Board state, rendering, move application and win detection.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::common::{Cell, MoveError};
use crate::config::{BOARD_SIZE, CELL_COUNT, COL_LABELS, ROW_LABELS};
use crate::coord::parse_move;

/// A 3×3 grid of cells, row-major. Rows are `a..c`, columns `1..3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from explicit rows. Useful for setting up positions that
    /// legal play would not reach.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    /// Immutable view of all rows.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Cell at (row, col), or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Number of cells holding a mark.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_mark())
            .count()
    }

    /// Returns `true` while at least one cell is empty.
    pub fn has_available_move(&self) -> bool {
        self.occupied() < CELL_COUNT
    }

    /// Scan rows and columns together. For each index `i`, row `i` and column
    /// `i` are counted; an X line wins over an O line at the same index, and
    /// lower indices are reported first.
    pub fn check_rows_and_columns(&self) -> Cell {
        for i in 0..BOARD_SIZE {
            let (mut x_row, mut o_row, mut x_col, mut o_col) = (0, 0, 0, 0);
            for j in 0..BOARD_SIZE {
                match self.cells[i][j] {
                    Cell::X => x_row += 1,
                    Cell::O => o_row += 1,
                    Cell::Empty => {}
                }
                match self.cells[j][i] {
                    Cell::X => x_col += 1,
                    Cell::O => o_col += 1,
                    Cell::Empty => {}
                }
            }
            if x_row == BOARD_SIZE || x_col == BOARD_SIZE {
                return Cell::X;
            }
            if o_row == BOARD_SIZE || o_col == BOARD_SIZE {
                return Cell::O;
            }
        }
        Cell::Empty
    }

    /// Scan the main diagonal `(i, i)` and the anti-diagonal `(i, 2 - i)`.
    pub fn check_diagonals(&self) -> Cell {
        let (mut x_main, mut o_main, mut x_anti, mut o_anti) = (0, 0, 0, 0);
        for i in 0..BOARD_SIZE {
            match self.cells[i][i] {
                Cell::X => x_main += 1,
                Cell::O => o_main += 1,
                Cell::Empty => {}
            }
            match self.cells[i][BOARD_SIZE - 1 - i] {
                Cell::X => x_anti += 1,
                Cell::O => o_anti += 1,
                Cell::Empty => {}
            }
        }
        if x_main == BOARD_SIZE || x_anti == BOARD_SIZE {
            Cell::X
        } else if o_main == BOARD_SIZE || o_anti == BOARD_SIZE {
            Cell::O
        } else {
            Cell::Empty
        }
    }

    /// The winning mark, or `Empty` if no line is complete.
    ///
    /// X is checked first, so a board where both marks complete a line
    /// reports X. Such a board cannot arise from alternating single moves.
    pub fn check_win(&self) -> Cell {
        let lines = self.check_rows_and_columns();
        let diagonals = self.check_diagonals();
        if lines == Cell::X || diagonals == Cell::X {
            Cell::X
        } else if lines == Cell::O || diagonals == Cell::O {
            Cell::O
        } else {
            Cell::Empty
        }
    }

    /// Validate `raw` and write `mark` into the cell it names.
    ///
    /// The board is left untouched on every error.
    pub fn apply_move(&mut self, mark: Cell, raw: &str) -> Result<(usize, usize), MoveError> {
        if !mark.is_mark() {
            return Err(MoveError::InvalidMark);
        }
        let (row, col) = parse_move(raw)?;
        if self.cells[row][col] != Cell::Empty {
            log::debug!("{} rejected: {} already occupied", mark, raw);
            return Err(MoveError::CellOccupied);
        }
        self.cells[row][col] = mark;
        log::debug!("{} plays {}", mark, raw);
        Ok((row, col))
    }

    /// Render the board as the fixed ASCII table.
    pub fn format(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", self);
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for label in COL_LABELS {
            write!(f, " {}", label)?;
        }
        writeln!(f)?;
        write!(f, "  ")?;
        for _ in COL_LABELS {
            write!(f, "--")?;
        }
        writeln!(f)?;
        for (label, row) in ROW_LABELS.iter().zip(self.cells.iter()) {
            write!(f, "{}|", label)?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
