//! Error types for board, player and game operations.

use derive_more::{Display, Error};

/// Structural error raised by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column outside `0..3`.
    #[display("Row and column must be between 0 and 2 (got row {row}, column {col})")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Symbol that is neither X nor O.
    #[display("Symbol must be X or O (got {symbol:?})")]
    InvalidMark {
        /// Offending symbol.
        symbol: char,
    },
}

/// Error constructing a [`Player`](crate::Player).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PlayerError {
    /// Name is empty or whitespace only.
    #[display("Player name must not be empty")]
    InvalidName,

    /// Symbol could not be converted to a mark.
    #[display("Invalid player mark: {_0}")]
    InvalidMark(BoardError),
}

impl From<BoardError> for PlayerError {
    fn from(err: BoardError) -> Self {
        PlayerError::InvalidMark(err)
    }
}

/// Error constructing a [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Missing player or players sharing a mark.
    #[display("Invalid players: {reason}")]
    InvalidPlayers {
        /// Why the players were rejected.
        reason: String,
    },
}

impl GameError {
    pub(crate) fn invalid_players(reason: impl Into<String>) -> Self {
        GameError::InvalidPlayers {
            reason: reason.into(),
        }
    }
}

/// Error that can occur when making a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Board rejected the coordinates or mark.
    #[display("{_0}")]
    Board(BoardError),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_move_error_keeps_board_error_as_source() {
        let err = MoveError::from(BoardError::OutOfRange { row: 3, col: 0 });
        assert_eq!(err, MoveError::Board(BoardError::OutOfRange { row: 3, col: 0 }));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("between 0 and 2"));
    }

    #[test]
    fn test_game_over_has_no_source() {
        assert!(MoveError::GameOver.source().is_none());
    }
}
