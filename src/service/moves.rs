use core::cmp::Ordering;

use crate::card::GOAL;
use crate::error::MoveError;
use crate::status::{Action, GameStatus, StatusCode};
use crate::table::{GameId, GameSlot, Seat, SlotState, SlotStatus};

use super::GameService;

impl GameService {
    /// Applies a player's move.
    ///
    /// Moves out of turn are not applied and report [`StatusCode::TurnWait`].
    /// Moves before a rival has joined are treated the same way, and moves
    /// after the game ended return the caller's final result.
    ///
    /// # Errors
    ///
    /// Returns an error if the game id is out of range, the name matches
    /// neither seat, or the shared deck is exhausted.
    pub fn player_move(
        &self,
        name: &str,
        game_id: GameId,
        action: Action,
    ) -> Result<GameStatus, MoveError> {
        let (slot, mut state, seat) = self.locate(name, game_id)?;

        if state.status != SlotStatus::Ready {
            return Ok(GameStatus::new(
                StatusCode::TurnWait,
                "Waiting for a rival to join",
                state.hand(seat),
            ));
        }

        if state.end_of_game {
            return Ok(self.conclude(&mut state, seat));
        }

        if state.current_player != seat {
            return Ok(GameStatus::new(
                StatusCode::TurnWait,
                "It's not your turn!",
                state.hand(seat),
            ));
        }

        log::debug!("player {name} action {action:?} in game {game_id}");

        match action {
            Action::Hit => self.hit(slot, &mut state, seat),
            Action::Stand => Ok(self.stand(slot, &mut state, seat)),
        }
    }

    fn hit(
        &self,
        slot: &GameSlot,
        state: &mut SlotState,
        seat: Seat,
    ) -> Result<GameStatus, MoveError> {
        let card = state.draw_into(seat)?;
        let points = state.hand(seat).score();

        match points.cmp(&GOAL) {
            Ordering::Greater => {
                state.end_of_game = true;
                slot.notify_all();
                log::info!(
                    "{} went over {GOAL} with {points}, game over",
                    state.name(seat).unwrap_or_default()
                );
                Ok(self.conclude(state, seat))
            }
            Ordering::Equal => {
                state.yield_turn(seat);
                slot.notify_all();
                Ok(GameStatus::new(
                    StatusCode::TurnPlay,
                    format!("You drew {card} and reached {GOAL}! You must stand. Your points: {points}"),
                    state.hand(seat),
                ))
            }
            Ordering::Less => Ok(GameStatus::new(
                StatusCode::TurnPlay,
                format!("You drew {card}. Your points: {points}"),
                state.hand(seat),
            )),
        }
    }

    fn stand(&self, slot: &GameSlot, state: &mut SlotState, seat: Seat) -> GameStatus {
        let points = state.hand(seat).score();

        if state.finished[seat.other().index()] {
            state.end_of_game = true;
            slot.notify_all();
            log::info!(
                "both {} and {} stood, game over",
                state.name(Seat::Player1).unwrap_or_default(),
                state.name(Seat::Player2).unwrap_or_default()
            );
            return self.conclude(state, seat);
        }

        state.yield_turn(seat);
        slot.notify_all();
        GameStatus::new(
            StatusCode::TurnWait,
            format!("You stand with {points} points. Rival's turn now."),
            state.hand(seat),
        )
    }
}
