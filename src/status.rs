//! Status values returned to players.

use crate::deck::Deck;

/// Status code surfaced to callers of the game service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "transport",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum StatusCode {
    /// It is the caller's turn.
    TurnPlay,
    /// The caller has to wait for the rival.
    TurnWait,
    /// The game is over and the caller won.
    GameWin,
    /// The game is over and the caller lost (ties included).
    GameLose,
}

impl StatusCode {
    /// Returns whether the code reports the end of the game.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::GameWin | Self::GameLose)
    }
}

/// A player's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "transport",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Action {
    /// Draw a card from the shared deck.
    Hit,
    /// Keep the current hand and hand the turn over.
    Stand,
}

/// What a player is told after a status poll or a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    /// Status code.
    pub code: StatusCode,
    /// Human-readable description.
    pub message: String,
    /// The caller's hand.
    pub hand: Deck,
}

impl GameStatus {
    pub(crate) fn new(code: StatusCode, message: impl Into<String>, hand: &Deck) -> Self {
        Self {
            code,
            message: message.into(),
            hand: hand.clone(),
        }
    }

    /// Returns the score of the caller's hand.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.hand.score()
    }
}

/// Result of comparing two finished hands from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player's hand beats the rival's.
    Win,
    /// The rival's hand beats the player's.
    Lose,
    /// Both hands score the same.
    Draw,
}

impl Outcome {
    /// Maps the outcome to the code sent to the player.
    ///
    /// A draw is reported as [`StatusCode::GameLose`] to both players.
    #[must_use]
    pub const fn code(self) -> StatusCode {
        match self {
            Self::Win => StatusCode::GameWin,
            Self::Lose | Self::Draw => StatusCode::GameLose,
        }
    }
}
