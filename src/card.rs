//! Card identifiers and scoring values.

use core::fmt;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const SUIT_SIZE: u8 = 13;

/// Points awarded for a 10, Jack, Queen or King.
pub const FIGURE_VALUE: u32 = 10;

/// Target score. Anything above it is a bust.
pub const GOAL: u32 = 21;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }
}

/// A playing card, identified by a number in `0..52`.
///
/// `id % 13` is the rank (0 = Ace, 9 = Ten, 12 = King) and `id / 13` the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "transport",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Card(u8);

impl Card {
    /// Creates a card from its identifier.
    ///
    /// Note: This function does not validate the identifier. Values outside
    /// `0..52` are accepted and score by their rank like any other card.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Returns the rank index (0 = Ace, 12 = King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 % SUIT_SIZE
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        match (self.0 / SUIT_SIZE) % 4 {
            0 => Suit::Hearts,
            1 => Suit::Diamonds,
            2 => Suit::Clubs,
            _ => Suit::Spades,
        }
    }

    /// Returns the points this card is worth.
    ///
    /// Aces count as 1; ranks up to 9 count their face value; 10 and the
    /// figures count [`FIGURE_VALUE`].
    #[must_use]
    pub const fn value(self) -> u32 {
        let rank = self.rank();
        if rank < 9 {
            rank as u32 + 1
        } else {
            FIGURE_VALUE
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank() {
            0 => "A",
            1 => "2",
            2 => "3",
            3 => "4",
            4 => "5",
            5 => "6",
            6 => "7",
            7 => "8",
            8 => "9",
            9 => "10",
            10 => "J",
            11 => "Q",
            _ => "K",
        };
        write!(f, "{rank}{}", self.suit().symbol())
    }
}
