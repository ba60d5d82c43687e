//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Coord;
use crate::types::{Cell, Mark};
use tracing::instrument;

/// Every line in evaluation order: rows top-to-bottom, columns
/// left-to-right, main diagonal, anti-diagonal.
const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Diagonals
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// Returns the mark of the first completed line, if any.
#[instrument(skip(board))]
pub fn winning_mark(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Cell::Occupied(mark) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some(mark);
        }
    }

    None
}
