//! Mark balance invariant: player one is never behind, never two ahead.

use super::Invariant;
use crate::game::Game;

/// Invariant: player one has placed as many marks as player two, or one more.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let first = board.count(game.player_one().mark());
        let second = board.count(game.player_two().mark());
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "Player one has the same number of marks as player two, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Player};

    #[test]
    fn test_holds_through_a_game() {
        let mut game = Game::new(
            Player::new("P1", Mark::O).unwrap(),
            Player::new("P2", Mark::X).unwrap(),
        )
        .unwrap();

        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 0)] {
            game.make_move(row, col).unwrap();
            assert!(MarkBalanceInvariant::holds(&game));
        }
    }

    #[test]
    fn test_player_two_ahead_violates() {
        let mut game = Game::new(
            Player::new("P1", Mark::X).unwrap(),
            Player::new("P2", Mark::O).unwrap(),
        )
        .unwrap();
        game.board.place_symbol(2, 2, Mark::O).unwrap();
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}
