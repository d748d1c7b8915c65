//! Error types for table operations.

use thiserror::Error;

use crate::table::GameId;

/// Errors that can occur while drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur during registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// Every slot holds a game that is ready or already over.
    #[error("server is full")]
    ServerFull,
    /// The waiting player already uses this name.
    #[error("name already used by the waiting player")]
    NameRepeated,
    /// The player name is empty.
    #[error("player name is empty")]
    EmptyName,
}

/// Errors that can occur while looking a player up in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The game id is outside the table.
    #[error("invalid game id {0}")]
    InvalidGameId(GameId),
    /// The name matches neither seat of the game.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors that can occur while applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The player or game could not be found.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// The shared deck ran out of cards.
    #[error("shared deck exhausted")]
    DeckExhausted,
}

impl From<DeckError> for MoveError {
    fn from(_: DeckError) -> Self {
        Self::DeckExhausted
    }
}

/// Errors raised by the TCP transport.
#[cfg(feature = "transport")]
#[derive(Debug, Error)]
pub enum TransportError {
    /// Socket failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// A line could not be encoded or decoded.
    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),
    /// The peer closed the connection before answering.
    #[error("connection closed")]
    Closed,
    /// The peer answered with a response of the wrong kind.
    #[error("unexpected response")]
    UnexpectedResponse,
    /// The server rejected the call.
    #[error("server error {code:?}: {message}")]
    Remote {
        /// Error code.
        code: crate::transport::wire::ErrorCode,
        /// Server-provided description.
        message: String,
    },
}
