//! Turn controller for two-player tic-tac-toe.

use crate::board::Board;
use crate::error::{GameError, MoveError};
use crate::player::Player;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The first player (moves first).
    One,
    /// The second player.
    Two,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A line was completed with this mark.
    Won(Mark),
    /// Board filled without a completed line.
    Drawn,
}

/// Tic-tac-toe game engine.
///
/// Owns the board, both players and the current-player pointer. Moves
/// are placed with the current player's mark and the turn passes only
/// when the board accepts the placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    player_one: Player,
    player_two: Player,
    pub(crate) current: Seat,
}

impl Game {
    /// Creates a game with `player_one` to move first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayers`] if both players share a mark.
    #[instrument(skip_all, fields(player_one = %player_one, player_two = %player_two))]
    pub fn new(player_one: Player, player_two: Player) -> Result<Self, GameError> {
        if player_one.mark() == player_two.mark() {
            warn!("Players share a mark");
            return Err(GameError::invalid_players(format!(
                "both players use mark {}",
                player_one.mark()
            )));
        }

        debug!("Game created");
        Ok(Self {
            board: Board::new(),
            player_one,
            player_two,
            current: Seat::One,
        })
    }

    /// Starts a builder, for callers whose players may be missing.
    pub fn builder() -> GameBuilder {
        GameBuilder::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.player_one,
            Seat::Two => &self.player_two,
        }
    }

    /// Returns the first player.
    pub fn player_one(&self) -> &Player {
        &self.player_one
    }

    /// Returns the second player.
    pub fn player_two(&self) -> &Player {
        &self.player_two
    }

    /// Returns the seat whose turn it is.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Returns the player entitled to the next move.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns `Ok(true)` and passes the turn if the mark was placed, or
    /// `Ok(false)` with the turn unchanged if the cell was occupied.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn.
    /// - [`MoveError::Board`] carrying the board's error for coordinates
    ///   outside `0..3`.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<bool, MoveError> {
        if self.is_game_over() {
            warn!("Move rejected, game is already over");
            return Err(MoveError::GameOver);
        }

        let mark = self.current_player().mark();
        if !self.board.place_symbol(row, col, mark)? {
            debug!("Cell occupied, turn unchanged");
            return Ok(false);
        }

        self.current = self.current.other();

        match self.status() {
            GameStatus::Won(_) => {
                if let Some(winner) = self.winner() {
                    info!(winner = %winner, "Game won");
                }
            }
            GameStatus::Drawn => info!("Game drawn"),
            GameStatus::InProgress => debug!(next = %self.current_player(), "Turn passed"),
        }

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(self);

        Ok(true)
    }

    /// Derives the status from the board.
    pub fn status(&self) -> GameStatus {
        if let Some(mark) = self.board.winning_mark() {
            GameStatus::Won(mark)
        } else if self.board.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Checks if a line is complete.
    pub fn has_winner(&self) -> bool {
        self.board.has_winner()
    }

    /// Checks if the board is full with no completed line.
    pub fn is_draw(&self) -> bool {
        self.board.is_draw()
    }

    /// Checks if the game is won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.has_winner() || self.is_draw()
    }

    /// Returns the player owning the winning mark.
    pub fn winner(&self) -> Option<&Player> {
        let mark = self.board.winning_mark()?;
        [&self.player_one, &self.player_two]
            .into_iter()
            .find(|player| player.mark() == mark)
    }

    /// Clears the board and gives the first move back to player one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Seat::One;
        debug!("Game reset");
    }
}

/// Builder for [`Game`] that reports missing players.
#[derive(Debug, Clone, Default)]
pub struct GameBuilder {
    player_one: Option<Player>,
    player_two: Option<Player>,
}

impl GameBuilder {
    /// Sets the first player.
    pub fn player_one(mut self, player: Player) -> Self {
        self.player_one = Some(player);
        self
    }

    /// Sets the second player.
    pub fn player_two(mut self, player: Player) -> Self {
        self.player_two = Some(player);
        self
    }

    /// Builds the game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayers`] if a player is missing or
    /// both players share a mark.
    pub fn build(self) -> Result<Game, GameError> {
        match (self.player_one, self.player_two) {
            (Some(one), Some(two)) => Game::new(one, two),
            (None, _) => Err(GameError::invalid_players("player one is missing")),
            (_, None) => Err(GameError::invalid_players("player two is missing")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    fn x_and_o() -> Game {
        Game::new(
            Player::new("P1", Mark::X).unwrap(),
            Player::new("P2", Mark::O).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_game_starts_with_player_one() {
        let game = x_and_o();
        assert_eq!(game.current_seat(), Seat::One);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_duplicate_marks_rejected() {
        let result = Game::new(
            Player::new("P1", Mark::O).unwrap(),
            Player::new("P2", Mark::O).unwrap(),
        );
        assert!(matches!(result, Err(GameError::InvalidPlayers { .. })));
    }

    #[test]
    fn test_builder_reports_missing_player() {
        let one = Player::new("P1", Mark::X).unwrap();
        let err = Game::builder().player_one(one).build().unwrap_err();
        assert_eq!(err, GameError::invalid_players("player two is missing"));

        let err = Game::builder().build().unwrap_err();
        assert_eq!(err, GameError::invalid_players("player one is missing"));
    }

    #[test]
    fn test_player_two_may_hold_x() {
        let mut game = Game::new(
            Player::new("Oscar", Mark::O).unwrap(),
            Player::new("Xena", Mark::X).unwrap(),
        )
        .unwrap();
        assert!(game.make_move(0, 0).unwrap());
        assert_eq!(game.board().cell(0, 0).unwrap().mark(), Some(Mark::O));
        assert_eq!(game.current_player().name(), "Xena");
    }

    #[test]
    fn test_out_of_range_keeps_turn() {
        let mut game = x_and_o();
        assert_eq!(
            game.make_move(0, 3),
            Err(MoveError::Board(BoardError::OutOfRange { row: 0, col: 3 }))
        );
        assert_eq!(game.current_seat(), Seat::One);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_status_tracks_win() {
        let mut game = x_and_o();
        for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
            assert!(game.make_move(row, col).unwrap());
        }
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
        assert_eq!(game.winner().map(Player::name), Some("P1"));
    }
}
