//! Line-delimited JSON messages.
//!
//! Each request and each response is one JSON object on its own line:
//!
//! ```text
//! {"op":"register","name":"alice"}
//! {"result":"registered","game_id":0}
//! {"op":"player_move","name":"alice","game_id":0,"action":"HIT"}
//! {"result":"status","code":"TURN_PLAY","message":"...","hand":[3,17,40]}
//! ```

use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::error::{LookupError, MoveError, RegisterError};
use crate::status::{Action, GameStatus, StatusCode};
use crate::table::GameId;

/// A call from a remote player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Join a game.
    Register {
        /// Player name.
        name: String,
    },
    /// Wait for and report the player's situation.
    GetStatus {
        /// Player name.
        name: String,
        /// Game id returned by registration. Negative ids are never found.
        game_id: i64,
    },
    /// Hit or stand.
    PlayerMove {
        /// Player name.
        name: String,
        /// Game id returned by registration.
        game_id: i64,
        /// The move.
        action: Action,
    },
}

/// Error codes sent back to remote players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No free slot.
    ServerFull,
    /// The waiting player already uses the name.
    NameRepeated,
    /// The name is empty.
    EmptyName,
    /// Unknown game id or player.
    PlayerNotFound,
    /// The shared deck ran out.
    DeckExhausted,
    /// The request could not be decoded.
    BadRequest,
}

/// The answer to a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Response {
    /// Registration succeeded.
    Registered {
        /// Assigned game id.
        game_id: GameId,
    },
    /// A status poll or a move succeeded.
    Status {
        /// Status code.
        code: StatusCode,
        /// Human-readable description.
        message: String,
        /// The caller's hand.
        hand: Deck,
    },
    /// The call failed.
    Error {
        /// Error code.
        code: ErrorCode,
        /// Human-readable description.
        message: String,
    },
}

impl Response {
    /// Builds an error response.
    #[must_use]
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Error {
            code,
            message: message.into(),
        }
    }
}

impl From<GameStatus> for Response {
    fn from(status: GameStatus) -> Self {
        Self::Status {
            code: status.code,
            message: status.message,
            hand: status.hand,
        }
    }
}

impl From<RegisterError> for Response {
    fn from(err: RegisterError) -> Self {
        let code = match err {
            RegisterError::ServerFull => ErrorCode::ServerFull,
            RegisterError::NameRepeated => ErrorCode::NameRepeated,
            RegisterError::EmptyName => ErrorCode::EmptyName,
        };
        Self::error(code, err.to_string())
    }
}

impl From<LookupError> for Response {
    fn from(err: LookupError) -> Self {
        Self::error(ErrorCode::PlayerNotFound, err.to_string())
    }
}

impl From<MoveError> for Response {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::Lookup(err) => err.into(),
            MoveError::DeckExhausted => Self::error(ErrorCode::DeckExhausted, err.to_string()),
        }
    }
}

/// Decodes one request line.
///
/// # Errors
///
/// Returns an error if the line is not a valid request object.
pub fn decode_request(line: &str) -> serde_json::Result<Request> {
    serde_json::from_str(line.trim())
}

/// Decodes one response line.
///
/// # Errors
///
/// Returns an error if the line is not a valid response object.
pub fn decode_response(line: &str) -> serde_json::Result<Response> {
    serde_json::from_str(line.trim())
}

/// Encodes a message as one newline-terminated line.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_line<T: Serialize>(message: &T) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    Ok(line)
}
