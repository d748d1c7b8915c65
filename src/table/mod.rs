//! The fixed pool of game slots and player pairing.

use crate::error::RegisterError;
use crate::options::TableOptions;

pub mod slot;

pub use slot::{GameSlot, Seat, SlotState, SlotStatus};

/// Externally visible game identifier: the slot's index in the table.
pub type GameId = usize;

/// A fixed-capacity table of games.
///
/// Slots are allocated once and never added or removed. Each slot carries its
/// own lock, so there is no table-wide lock.
pub struct GameTable {
    slots: Box<[GameSlot]>,
    options: TableOptions,
}

impl GameTable {
    /// Creates a table with `options.capacity` empty slots.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::{GameTable, TableOptions};
    ///
    /// let table = GameTable::new(TableOptions::default().with_capacity(2));
    /// assert_eq!(table.capacity(), 2);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions) -> Self {
        let base = options.seed.unwrap_or_else(rand::random);
        let slots = (0..options.capacity)
            .map(|index| GameSlot::new(base.wrapping_add(index as u64)))
            .collect();

        Self { slots, options }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the slot behind a game id.
    #[must_use]
    pub fn slot(&self, game_id: GameId) -> Option<&GameSlot> {
        self.slots.get(game_id)
    }

    /// Seats a player in the first free position.
    ///
    /// Slots are scanned in index order. An empty slot is claimed for the
    /// player to wait in; a slot with a waiting player is completed, dealt, and
    /// its waiters woken. Slots holding a running or finished game are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, if the first waiting player
    /// found already uses the name, or if no slot is free.
    pub fn register(&self, name: &str) -> Result<GameId, RegisterError> {
        if name.trim().is_empty() {
            return Err(RegisterError::EmptyName);
        }

        log::debug!("registering player {name}");

        for (game_id, slot) in self.slots.iter().enumerate() {
            let mut state = slot.lock();
            let status = state.status;

            match status {
                SlotStatus::Empty => {
                    state.claim(name);
                    log::debug!("player {name} waiting for a rival in game {game_id}");
                    return Ok(game_id);
                }
                SlotStatus::WaitingForSecondPlayer => {
                    if state.name(Seat::Player1) == Some(name) {
                        log::warn!("name {name} already waiting in game {game_id}");
                        return Err(RegisterError::NameRepeated);
                    }

                    state.pair(name);
                    drop(state);
                    slot.notify_all();
                    log::info!("player {name} joined game {game_id}, game ready");
                    return Ok(game_id);
                }
                SlotStatus::Ready => {}
            }
        }

        log::warn!("rejecting {name}: server full");
        Err(RegisterError::ServerFull)
    }
}
