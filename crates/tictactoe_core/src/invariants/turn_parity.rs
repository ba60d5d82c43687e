//! Turn parity invariant: the seat to move follows from the mark count.

use super::Invariant;
use crate::game::{Game, Seat};
use crate::Mark;
use strum::IntoEnumIterator;

/// Invariant: player one moves on an even number of placed marks.
pub struct TurnParityInvariant;

impl Invariant<Game> for TurnParityInvariant {
    fn holds(game: &Game) -> bool {
        let placed: usize = Mark::iter().map(|mark| game.board().count(mark)).sum();
        let expected = if placed % 2 == 0 { Seat::One } else { Seat::Two };
        game.current_seat() == expected
    }

    fn description() -> &'static str {
        "Player one moves after an even number of marks, player two after an odd number"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_rejected_move_keeps_parity() {
        let mut game = Game::new(
            Player::new("P1", Mark::X).unwrap(),
            Player::new("P2", Mark::O).unwrap(),
        )
        .unwrap();
        game.make_move(1, 1).unwrap();
        assert!(!game.make_move(1, 1).unwrap());
        assert!(TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_stale_seat_violates() {
        let mut game = Game::new(
            Player::new("P1", Mark::X).unwrap(),
            Player::new("P2", Mark::O).unwrap(),
        )
        .unwrap();
        game.board.place_symbol(0, 0, Mark::X).unwrap();
        assert!(!TurnParityInvariant::holds(&game));
    }
}
