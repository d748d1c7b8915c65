//! A single game slot and the state guarded by its lock.

use std::sync::MutexGuard;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::sync::{Condvar, Mutex};

/// Cards dealt to each seat when a game starts.
pub const INITIAL_CARDS: usize = 2;

/// Lifecycle of a slot.
///
/// The end of a game is tracked separately by [`SlotState::end_of_game`]; a
/// finished game stays [`SlotStatus::Ready`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// No player has claimed the slot.
    Empty,
    /// One player registered and is waiting for a rival.
    WaitingForSecondPlayer,
    /// Both seats are filled and cards are dealt.
    Ready,
}

/// One of the two player positions in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player who registered first.
    Player1,
    /// The player who completed the pairing.
    Player2,
}

impl Seat {
    /// Returns the opposite seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }

    /// Returns the seat's position in per-seat arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Player1 => 0,
            Self::Player2 => 1,
        }
    }
}

/// Everything a slot knows about its game.
///
/// Only reachable through [`GameSlot::lock`].
#[derive(Debug, Clone)]
pub struct SlotState {
    /// Lifecycle status.
    pub status: SlotStatus,
    /// Player names, indexed by [`Seat::index`].
    pub names: [Option<String>; 2],
    /// Player hands, indexed by [`Seat::index`].
    pub hands: [Deck; 2],
    /// Shared draw pile.
    pub game_deck: Deck,
    /// Seat allowed to act.
    pub current_player: Seat,
    /// Whether the game is over.
    pub end_of_game: bool,
    /// Seats that stood or reached the goal and handed the turn over.
    pub finished: [bool; 2],
    /// Seats that have been told the final result.
    pub delivered: [bool; 2],
    rng: ChaCha8Rng,
}

impl SlotState {
    fn new(rng: ChaCha8Rng) -> Self {
        Self {
            status: SlotStatus::Empty,
            names: [None, None],
            hands: [Deck::empty(), Deck::empty()],
            game_deck: Deck::full(),
            current_player: Seat::Player1,
            end_of_game: false,
            finished: [false; 2],
            delivered: [false; 2],
            rng,
        }
    }

    /// Returns the seat registered under `name`, if any.
    #[must_use]
    pub fn seat_of(&self, name: &str) -> Option<Seat> {
        [Seat::Player1, Seat::Player2]
            .into_iter()
            .find(|seat| self.names[seat.index()].as_deref() == Some(name))
    }

    /// Returns the hand of the given seat.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Deck {
        &self.hands[seat.index()]
    }

    /// Returns the name of the given seat.
    #[must_use]
    pub fn name(&self, seat: Seat) -> Option<&str> {
        self.names[seat.index()].as_deref()
    }

    /// Returns whether `seat` may act now.
    #[must_use]
    pub fn is_turn_of(&self, seat: Seat) -> bool {
        self.status == SlotStatus::Ready && !self.end_of_game && self.current_player == seat
    }

    /// Seats the first player.
    pub(crate) fn claim(&mut self, name: &str) {
        self.names = [Some(name.to_owned()), None];
        self.status = SlotStatus::WaitingForSecondPlayer;
    }

    /// Seats the second player, deals the opening hands and picks who starts.
    pub(crate) fn pair(&mut self, name: &str) {
        self.names[Seat::Player2.index()] = Some(name.to_owned());
        self.game_deck = Deck::full();
        for hand in &mut self.hands {
            hand.clear();
        }
        for _ in 0..INITIAL_CARDS {
            for seat in [Seat::Player1, Seat::Player2] {
                self.draw_into(seat)
                    .expect("a fresh deck holds more cards than the opening deal");
            }
        }
        self.current_player = if self.rng.random_bool(0.5) {
            Seat::Player1
        } else {
            Seat::Player2
        };
        self.end_of_game = false;
        self.finished = [false; 2];
        self.delivered = [false; 2];
        self.status = SlotStatus::Ready;
    }

    /// Moves a random card from the shared deck into the seat's hand.
    pub(crate) fn draw_into(&mut self, seat: Seat) -> Result<Card, DeckError> {
        let card = self.game_deck.draw(&mut self.rng)?;
        self.hands[seat.index()].push(card);
        Ok(card)
    }

    /// Marks `seat` as done and gives the turn to the rival.
    pub(crate) fn yield_turn(&mut self, seat: Seat) {
        self.finished[seat.index()] = true;
        self.current_player = seat.other();
    }

    /// Returns the slot to [`SlotStatus::Empty`], keeping its generator.
    pub(crate) fn reset(&mut self) {
        let rng = self.rng.clone();
        *self = Self::new(rng);
    }
}

/// A game record guarded by its own mutex and condition variable.
pub struct GameSlot {
    state: Mutex<SlotState>,
    changed: Condvar,
}

impl GameSlot {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            state: Mutex::new(SlotState::new(ChaCha8Rng::seed_from_u64(seed))),
            changed: Condvar::new(),
        }
    }

    /// Locks the slot.
    pub fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock()
    }

    /// Wakes every thread waiting on this slot.
    pub(crate) fn notify_all(&self) {
        self.changed.notify_all();
    }

    /// Releases the lock and blocks while `condition` holds.
    ///
    /// Returns the re-acquired guard and whether `deadline` passed first.
    pub(crate) fn wait_while<'a, F>(
        &self,
        guard: MutexGuard<'a, SlotState>,
        deadline: Option<Instant>,
        condition: F,
    ) -> (MutexGuard<'a, SlotState>, bool)
    where
        F: FnMut(&mut SlotState) -> bool,
    {
        self.changed.wait_while(guard, deadline, condition)
    }
}
