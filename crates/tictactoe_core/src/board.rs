//! The 3x3 grid and its placement rules.

use crate::error::BoardError;
use crate::position::Coord;
use crate::rules;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length of the board.
pub const SIZE: usize = 3;

const ROW_SEPARATOR: &str = "---+---+---\n";

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// Returns `Ok(false)` without touching the grid if the cell is
    /// already occupied.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if either index is outside `0..3`.
    #[instrument(skip(self))]
    pub fn place_symbol(&mut self, row: usize, col: usize, mark: Mark) -> Result<bool, BoardError> {
        let coord = Coord::new(row, col)?;
        Ok(self.place(coord, mark))
    }

    /// Places `mark` at an already validated coordinate.
    pub fn place(&mut self, coord: Coord, mark: Mark) -> bool {
        let cell = &mut self.cells[coord.row()][coord.col()];
        if !cell.is_empty() {
            debug!(%coord, "Cell already occupied");
            return false;
        }
        *cell = Cell::Occupied(mark);
        true
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if either index is outside `0..3`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Coord::new(row, col).map(|coord| self.get(coord))
    }

    /// Returns the cell at a validated coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Resets every cell to empty.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(|&coord| self.get(coord).is_empty())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(mark))
            .count()
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Mark of the first completed line, if any.
    pub fn winning_mark(&self) -> Option<Mark> {
        rules::winning_mark(self)
    }

    /// Checks if some line is complete.
    pub fn has_winner(&self) -> bool {
        self.winning_mark().is_some()
    }

    /// Checks if the board is full with no completed line.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// ```text
    ///  X | O | X
    /// ---+---+---
    ///    | X |
    /// ---+---+---
    ///  O |   | O
    /// ```
    ///
    /// Every row ends with a newline and empty cells render as a space.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            result.push(' ');
            for (col, cell) in cells.iter().enumerate() {
                result.push(cell.symbol());
                if col < SIZE - 1 {
                    result.push_str(" | ");
                }
            }
            result.push('\n');
            if row < SIZE - 1 {
                result.push_str(ROW_SEPARATOR);
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
