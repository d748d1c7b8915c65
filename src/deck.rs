//! Decks of cards: the shared draw pile and each player's hand.

use rand::Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::DeckError;

/// An ordered collection of unique cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "transport",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck, as used for a fresh hand.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a full deck holding every card identifier in order.
    #[must_use]
    pub fn full() -> Self {
        Self {
            cards: (0..DECK_SIZE as u8).map(Card::new).collect(),
        }
    }

    /// Creates a deck holding exactly the given cards, in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns a random card.
    ///
    /// The remaining cards keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if there is nothing left to draw.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        let index = rng.random_range(0..self.cards.len());
        Ok(self.cards.remove(index))
    }

    /// Adds a card at the end of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Sums the value of every card in the deck.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.cards.iter().map(|card| card.value()).sum()
    }

    /// Returns the cards in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the deck holds the given card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
