//! A two-player blackjack table server.
//!
//! The crate provides a [`GameService`] that pairs players into games held in
//! a fixed [`GameTable`], lets each player wait for their turn, and applies
//! hit/stand moves until one player busts or both stand. Each game slot is a
//! monitor: one mutex and one condition variable, so games never contend with
//! each other.
//!
//! With the `transport` feature (enabled by default) the [`transport`] module
//! serves the same operations over TCP as line-delimited JSON.
//!
//! # Example
//!
//! ```
//! use bjduel::{Action, GameService, StatusCode, TableOptions};
//!
//! let service = GameService::new(TableOptions::default().with_seed(42));
//! let game = service.register("alice").unwrap();
//! service.register("bob").unwrap();
//!
//! let player = service.current_player(game).unwrap();
//! let status = service.player_move(&player, game, Action::Stand).unwrap();
//! assert_eq!(status.code, StatusCode::TurnWait);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod service;
pub mod status;
pub mod table;
#[cfg(feature = "transport")]
#[cfg_attr(docsrs, doc(cfg(feature = "transport")))]
pub mod transport;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, GOAL, Suit};
pub use deck::Deck;
pub use error::{DeckError, LookupError, MoveError, RegisterError};
#[cfg(feature = "transport")]
pub use error::TransportError;
pub use options::TableOptions;
pub use service::{GameService, rank};
pub use status::{Action, GameStatus, Outcome, StatusCode};
pub use table::{GameId, GameSlot, GameTable, Seat, SlotState, SlotStatus};
