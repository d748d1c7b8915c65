//! The three operations offered to remote players.
//!
//! Every operation locks exactly one slot. [`GameService::get_status`] is the
//! only one that blocks; it doubles as the barrier a player waits on until a
//! rival joins and until their turn comes around.

use std::sync::MutexGuard;

use crate::error::{LookupError, RegisterError};
use crate::options::TableOptions;
use crate::status::GameStatus;
use crate::table::{GameId, GameSlot, GameTable, Seat, SlotState};

mod moves;
mod outcome;
mod status;

pub use outcome::rank;

/// Game service backed by a [`GameTable`].
///
/// # Example
///
/// ```
/// use bjduel::{GameService, StatusCode, TableOptions};
///
/// let service = GameService::new(TableOptions::default().with_seed(1));
/// let game = service.register("alice").unwrap();
/// assert_eq!(service.register("bob").unwrap(), game);
///
/// let current = service.current_player(game).unwrap();
/// let status = service.get_status(&current, game).unwrap();
/// assert_eq!(status.code, StatusCode::TurnPlay);
/// ```
pub struct GameService {
    table: GameTable,
}

impl GameService {
    /// Creates a service over a fresh table.
    #[must_use]
    pub fn new(options: TableOptions) -> Self {
        Self {
            table: GameTable::new(options),
        }
    }

    /// Creates a service over an existing table.
    #[must_use]
    pub const fn with_table(table: GameTable) -> Self {
        Self { table }
    }

    /// Returns the underlying table.
    #[must_use]
    pub const fn table(&self) -> &GameTable {
        &self.table
    }

    /// Registers a player and returns the game they were seated in.
    ///
    /// # Errors
    ///
    /// See [`GameTable::register`].
    pub fn register(&self, name: &str) -> Result<GameId, RegisterError> {
        self.table.register(name)
    }

    /// Returns the name of the player whose turn it is.
    ///
    /// Returns `None` for unknown ids, games still waiting for a rival, and
    /// games that are over.
    pub fn current_player(&self, game_id: GameId) -> Option<String> {
        let state = self.table.slot(game_id)?.lock();
        let seat = state.current_player;
        if state.is_turn_of(seat) {
            state.name(seat).map(str::to_owned)
        } else {
            None
        }
    }

    /// Finds the caller's seat and returns the slot locked.
    fn locate(
        &self,
        name: &str,
        game_id: GameId,
    ) -> Result<(&GameSlot, MutexGuard<'_, SlotState>, Seat), LookupError> {
        let slot = self
            .table
            .slot(game_id)
            .ok_or(LookupError::InvalidGameId(game_id))?;
        let state = slot.lock();
        let Some(seat) = state.seat_of(name) else {
            log::debug!("player {name} not found in game {game_id}");
            return Err(LookupError::PlayerNotFound);
        };
        Ok((slot, state, seat))
    }

    /// Builds the final result for `seat` and records that it was delivered.
    ///
    /// With recycling enabled, the slot is emptied once both seats have seen
    /// their result.
    fn conclude(&self, state: &mut SlotState, seat: Seat) -> GameStatus {
        let status = outcome::final_status(state, seat);
        state.delivered[seat.index()] = true;

        if self.table.options().recycle_finished && state.delivered.iter().all(|&seen| seen) {
            log::info!(
                "recycling slot of {} and {}",
                state.name(Seat::Player1).unwrap_or_default(),
                state.name(Seat::Player2).unwrap_or_default()
            );
            state.reset();
        }

        status
    }
}
