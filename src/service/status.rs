use std::time::Instant;

use crate::error::LookupError;
use crate::status::{GameStatus, StatusCode};
use crate::table::{GameId, SlotStatus};

use super::GameService;

impl GameService {
    /// Reports the caller's situation, blocking until there is something to do.
    ///
    /// The call first waits for a rival to join, then for the caller's turn or
    /// the end of the game. Once unblocked it returns:
    /// - [`StatusCode::TurnPlay`] with the caller's score when it is their turn,
    /// - [`StatusCode::GameWin`] or [`StatusCode::GameLose`] once the game is
    ///   over (a draw is reported as a loss),
    /// - [`StatusCode::TurnWait`] if the table's wait timeout expired first.
    ///
    /// # Errors
    ///
    /// Returns an error without blocking if the game id is out of range or the
    /// name matches neither seat.
    pub fn get_status(&self, name: &str, game_id: GameId) -> Result<GameStatus, LookupError> {
        let (slot, state, seat) = self.locate(name, game_id)?;
        // A timeout too large to represent as an instant waits unbounded.
        let deadline = self
            .table
            .options()
            .wait_timeout
            .and_then(|timeout| Instant::now().checked_add(timeout));

        if state.status == SlotStatus::WaitingForSecondPlayer {
            log::debug!("player {name} waiting for a rival in game {game_id}");
        } else if !state.end_of_game && state.current_player != seat {
            log::debug!("player {name} waiting for turn in game {game_id}");
        }

        let (mut state, timed_out) = slot.wait_while(state, deadline, |state| {
            state.seat_of(name) == Some(seat)
                && (state.status == SlotStatus::WaitingForSecondPlayer
                    || (!state.end_of_game && state.current_player != seat))
        });

        // The slot was recycled while this call slept.
        if state.seat_of(name) != Some(seat) {
            return Err(LookupError::PlayerNotFound);
        }

        if timed_out {
            let message = if state.status == SlotStatus::WaitingForSecondPlayer {
                "Still waiting for a rival to join"
            } else {
                "Still waiting for the rival to move"
            };
            return Ok(GameStatus::new(
                StatusCode::TurnWait,
                message,
                state.hand(seat),
            ));
        }

        if state.end_of_game {
            log::debug!("sending final result to {name} in game {game_id}");
            return Ok(self.conclude(&mut state, seat));
        }

        let points = state.hand(seat).score();
        log::debug!("player {name} to play in game {game_id}");
        Ok(GameStatus::new(
            StatusCode::TurnPlay,
            format!("Your turn! Your points: {points}"),
            state.hand(seat),
        ))
    }
}
