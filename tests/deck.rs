//! Card and deck tests.

use bjduel::{Card, DECK_SIZE, Deck, DeckError, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn deck(ids: &[u8]) -> Deck {
    Deck::from_cards(ids.iter().copied().map(Card::new).collect())
}

#[test]
fn card_values_follow_rank() {
    assert_eq!(Card::new(0).value(), 1);
    assert_eq!(Card::new(8).value(), 9);
    assert_eq!(Card::new(9).value(), 10);
    assert_eq!(Card::new(12).value(), 10);
    assert_eq!(Card::new(13).value(), 1);
    assert_eq!(Card::new(51).value(), 10);

    assert_eq!(Card::new(0).suit(), Suit::Hearts);
    assert_eq!(Card::new(13).suit(), Suit::Diamonds);
    assert_eq!(Card::new(26).suit(), Suit::Clubs);
    assert_eq!(Card::new(51).suit(), Suit::Spades);
    assert_eq!(Card::new(51).to_string(), "K♠");
    assert_eq!(Card::new(22).to_string(), "10♦");
}

#[test]
fn score_sums_card_values() {
    assert_eq!(Deck::empty().score(), 0);
    assert_eq!(deck(&[0, 9, 12]).score(), 21);
    assert_eq!(deck(&[13, 26, 39, 1]).score(), 5);
    assert_eq!(deck(&[10, 23, 36]).score(), 30);
    assert_eq!(Deck::full().score(), 4 * (1 + 2 + 3 + 4 + 5 + 6 + 7 + 8 + 9 + 10 * 4));
}

#[test]
fn full_deck_holds_every_card_once() {
    let full = Deck::full();
    assert_eq!(full.len(), DECK_SIZE);
    for (index, card) in full.cards().iter().enumerate() {
        assert_eq!(usize::from(card.id()), index);
    }
}

#[test]
fn draw_removes_one_card_and_keeps_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut pile = Deck::full();

    let card = pile.draw(&mut rng).unwrap();
    assert_eq!(pile.len(), DECK_SIZE - 1);
    assert!(!pile.contains(card));

    let ids: Vec<u8> = pile.cards().iter().map(|card| card.id()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn draw_until_empty_returns_every_card() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut pile = Deck::full();
    let mut drawn = Vec::new();

    while !pile.is_empty() {
        drawn.push(pile.draw(&mut rng).unwrap().id());
    }
    drawn.sort_unstable();

    assert_eq!(drawn, (0..DECK_SIZE as u8).collect::<Vec<_>>());
    assert_eq!(pile.draw(&mut rng).unwrap_err(), DeckError::Empty);
}
