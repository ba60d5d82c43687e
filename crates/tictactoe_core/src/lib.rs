//! Tic-tac-toe core - board state machine and turn controller.
//!
//! The crate is split into two layers:
//!
//! - **Board**: owns the 3x3 grid, placement rules and win/draw evaluation.
//!   It knows nothing about players or turns.
//! - **Game**: owns two [`Player`]s, the current-player pointer and turn
//!   alternation. Placement legality is delegated to the board.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Mark, Player};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let alice = Player::new("Alice", Mark::X)?;
//! let bob = Player::new("Bob", Mark::O)?;
//! let mut game = Game::new(alice, bob)?;
//!
//! assert!(game.make_move(1, 1)?);
//! assert_eq!(game.current_player().name(), "Bob");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod invariants;
mod player;
mod position;
mod rules;
mod types;

pub use board::{Board, SIZE};
pub use error::{BoardError, GameError, MoveError, PlayerError};
pub use game::{Game, GameBuilder, GameStatus, Seat};
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    TurnParityInvariant,
};
pub use player::Player;
pub use position::Coord;
pub use rules::{is_draw, is_full, winning_mark};
pub use types::{Cell, Mark};
