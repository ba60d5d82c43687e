//! Round loop and play-again loop driven through a [`Console`].

use crate::console::Console;
use derive_getters::Getters;
use std::io;
use tictactoe_core::{Game, Seat};
use tracing::{debug, info, instrument, warn};

const WELCOME: &str = "Welcome to Tic Tac Toe";
const ROW_PROMPT: &str = "Enter row (0 to 2): ";
const COL_PROMPT: &str = "Enter column (0 to 2): ";
const NOT_A_NUMBER: &str = "Invalid input. Please enter numbers only.";
const MOVE_NOT_ALLOWED: &str = "That move is not allowed. Try again.";
const DRAW: &str = "The game ended in a draw.";
const PLAY_AGAIN_PROMPT: &str = "Play again? (y/n): ";

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player in this seat completed a line.
    Won(Seat),
    /// The board filled without a line.
    Drawn,
    /// Input ran out before the round finished.
    Abandoned,
}

/// Tally of completed rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Rounds that reached a win or a draw.
    rounds: usize,
    /// Rounds won by player one.
    wins_one: usize,
    /// Rounds won by player two.
    wins_two: usize,
    /// Drawn rounds.
    draws: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won(Seat::One) => self.wins_one += 1,
            RoundOutcome::Won(Seat::Two) => self.wins_two += 1,
            RoundOutcome::Drawn => self.draws += 1,
            RoundOutcome::Abandoned => return,
        }
        self.rounds += 1;
    }
}

/// Parses a row or column typed by the user.
///
/// Returns `None` for text that is not an integer. Negative numbers map
/// to `usize::MAX` so the board reports them as out of range.
pub fn parse_index(text: &str) -> Option<usize> {
    let value: i64 = text.trim().parse().ok()?;
    Some(usize::try_from(value).unwrap_or(usize::MAX))
}

/// Runs rounds until the players decline another or input runs out.
#[instrument(skip_all, fields(player_one = %game.player_one(), player_two = %game.player_two()))]
pub fn run_session<C>(game: &mut Game, console: &mut C) -> io::Result<SessionSummary>
where
    C: Console + ?Sized,
{
    console.write_line(WELCOME)?;
    console.write_line("")?;

    let mut summary = SessionSummary::default();
    loop {
        let outcome = play_round(game, console)?;
        summary.record(outcome);

        if outcome == RoundOutcome::Abandoned || !prompt_play_again(console)? {
            break;
        }

        game.reset();
        console.write_line("")?;
    }

    info!(?summary, "Session finished");
    Ok(summary)
}

/// Plays one round to a win, a draw, or the end of input.
#[instrument(skip_all)]
pub fn play_round<C>(game: &mut Game, console: &mut C) -> io::Result<RoundOutcome>
where
    C: Console + ?Sized,
{
    while !game.is_game_over() {
        console.write_line(&game.board().render())?;
        let player = game.current_player();
        console.write_line(&format!("{}'s turn ({})", player.name(), player.mark()))?;

        let Some((row, col)) = prompt_move(console)? else {
            warn!("Input closed mid-round");
            return Ok(RoundOutcome::Abandoned);
        };

        match game.make_move(row, col) {
            Ok(true) => {}
            Ok(false) => {
                debug!(row, col, "Cell occupied");
                console.write_line(MOVE_NOT_ALLOWED)?;
            }
            Err(err) => {
                debug!(%err, "Move rejected");
                console.write_line(MOVE_NOT_ALLOWED)?;
            }
        }
        console.write_line("")?;
    }

    console.write_line(&game.board().render())?;
    console.write_line("")?;

    let outcome = match game.winner() {
        Some(winner) => {
            console.write_line(&format!("Winner: {} ({})", winner.name(), winner.mark()))?;
            let seat = if winner == game.player_one() { Seat::One } else { Seat::Two };
            RoundOutcome::Won(seat)
        }
        None => {
            console.write_line(DRAW)?;
            RoundOutcome::Drawn
        }
    };
    Ok(outcome)
}

/// Reads a row and then a column. Non-numeric text for either one
/// starts over at the row prompt.
fn prompt_move<C>(console: &mut C) -> io::Result<Option<(usize, usize)>>
where
    C: Console + ?Sized,
{
    loop {
        let Some(row) = console.read_line(ROW_PROMPT)? else {
            return Ok(None);
        };
        let Some(row) = parse_index(&row) else {
            debug!(%row, "Non-numeric row input");
            console.write_line(NOT_A_NUMBER)?;
            continue;
        };

        let Some(col) = console.read_line(COL_PROMPT)? else {
            return Ok(None);
        };
        let Some(col) = parse_index(&col) else {
            debug!(%col, "Non-numeric column input");
            console.write_line(NOT_A_NUMBER)?;
            continue;
        };

        return Ok(Some((row, col)));
    }
}

fn prompt_play_again<C>(console: &mut C) -> io::Result<bool>
where
    C: Console + ?Sized,
{
    let answer = console.read_line(PLAY_AGAIN_PROMPT)?;
    Ok(answer.is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")))
}
