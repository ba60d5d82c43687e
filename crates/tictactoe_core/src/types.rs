//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A mark placed on the board by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(try_from = "char", into = "char")]
pub enum Mark {
    /// Mark X.
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used when rendering this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl TryFrom<char> for Mark {
    type Error = BoardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'X' => Ok(Mark::X),
            'O' => Ok(Mark::O),
            _ => Err(BoardError::InvalidMark { symbol }),
        }
    }
}

impl From<Mark> for char {
    fn from(mark: Mark) -> Self {
        mark.symbol()
    }
}

impl FromStr for Mark {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Mark::try_from(symbol),
            // Report the first offending character, or a space for empty input
            (first, _) => Err(BoardError::InvalidMark {
                symbol: first.unwrap_or(' '),
            }),
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Character used when rendering this cell.
    pub fn symbol(self) -> char {
        self.mark().map_or(' ', Mark::symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_from_char() {
        assert_eq!(Mark::try_from('X'), Ok(Mark::X));
        assert_eq!(Mark::try_from('O'), Ok(Mark::O));
        for symbol in ['x', 'o', '0', ' '] {
            assert_eq!(Mark::try_from(symbol), Err(BoardError::InvalidMark { symbol }));
        }
        assert_eq!(
            Mark::try_from('Z'),
            Err(BoardError::InvalidMark { symbol: 'Z' })
        );
    }

    #[test]
    fn test_mark_from_str_rejects_multiple_chars() {
        assert_eq!(" O ".parse::<Mark>(), Ok(Mark::O));
        assert_eq!("x".parse::<Mark>(), Err(BoardError::InvalidMark { symbol: 'x' }));
        assert!("XO".parse::<Mark>().is_err());
        assert!("".parse::<Mark>().is_err());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_cell_symbol() {
        assert_eq!(Cell::Empty.symbol(), ' ');
        assert_eq!(Cell::Occupied(Mark::O).symbol(), 'O');
    }

    #[test]
    fn test_mark_serializes_as_char() {
        assert_eq!(serde_json::to_string(&Mark::X).unwrap(), "\"X\"");
        assert!(serde_json::from_str::<Mark>("\"Q\"").is_err());
    }
}
