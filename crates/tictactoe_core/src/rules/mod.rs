//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. They are kept apart from board
//! storage so the game layer and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::winning_mark;
