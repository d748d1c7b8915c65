//! Registration and pairing tests.

use std::collections::HashSet;

use bjduel::{DECK_SIZE, GameTable, RegisterError, Seat, SlotStatus, TableOptions};

fn table(capacity: usize) -> GameTable {
    GameTable::new(TableOptions::default().with_capacity(capacity).with_seed(5))
}

#[test]
fn first_player_waits_and_second_pairs() {
    let table = table(3);

    assert_eq!(table.register("alice").unwrap(), 0);
    {
        let state = table.slot(0).unwrap().lock();
        assert_eq!(state.status, SlotStatus::WaitingForSecondPlayer);
        assert_eq!(state.name(Seat::Player1), Some("alice"));
        assert_eq!(state.name(Seat::Player2), None);
    }

    assert_eq!(table.register("bob").unwrap(), 0);
    let state = table.slot(0).unwrap().lock();
    assert_eq!(state.status, SlotStatus::Ready);
    assert_eq!(state.seat_of("alice"), Some(Seat::Player1));
    assert_eq!(state.seat_of("bob"), Some(Seat::Player2));
    assert!(!state.end_of_game);
    assert_eq!(state.hand(Seat::Player1).len(), 2);
    assert_eq!(state.hand(Seat::Player2).len(), 2);
    assert_eq!(state.game_deck.len(), DECK_SIZE - 4);
}

#[test]
fn dealt_cards_appear_in_exactly_one_deck() {
    let table = table(1);
    table.register("alice").unwrap();
    table.register("bob").unwrap();

    let state = table.slot(0).unwrap().lock();
    let mut seen = HashSet::new();
    for card in state
        .hand(Seat::Player1)
        .cards()
        .iter()
        .chain(state.hand(Seat::Player2).cards())
        .chain(state.game_deck.cards())
    {
        assert!(seen.insert(*card), "card {card} dealt twice");
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn same_name_cannot_take_both_seats() {
    let table = table(2);
    assert_eq!(table.register("alice").unwrap(), 0);
    assert_eq!(table.register("alice").unwrap_err(), RegisterError::NameRepeated);

    let state = table.slot(0).unwrap().lock();
    assert_eq!(state.status, SlotStatus::WaitingForSecondPlayer);
    drop(state);
    assert_eq!(table.slot(1).unwrap().lock().status, SlotStatus::Empty);
}

#[test]
fn empty_name_is_rejected() {
    let table = table(1);
    assert_eq!(table.register("").unwrap_err(), RegisterError::EmptyName);
    assert_eq!(table.register("   ").unwrap_err(), RegisterError::EmptyName);
    assert_eq!(table.slot(0).unwrap().lock().status, SlotStatus::Empty);
}

#[test]
fn full_table_rejects_new_players() {
    let table = table(2);
    for (name, expected) in [("a", 0), ("b", 0), ("c", 1), ("d", 1)] {
        assert_eq!(table.register(name).unwrap(), expected);
    }
    assert_eq!(table.register("e").unwrap_err(), RegisterError::ServerFull);
}

#[test]
fn names_may_repeat_across_games() {
    let table = table(2);
    assert_eq!(table.register("alice").unwrap(), 0);
    assert_eq!(table.register("bob").unwrap(), 0);
    assert_eq!(table.register("alice").unwrap(), 1);
}

#[test]
fn starting_seat_varies_across_games() {
    let table = table(32);
    let mut starters = HashSet::new();
    for game in 0..32 {
        table.register(&format!("p{game}a")).unwrap();
        table.register(&format!("p{game}b")).unwrap();
        starters.insert(table.slot(game).unwrap().lock().current_player);
    }
    assert_eq!(starters.len(), 2);
}

#[test]
fn unknown_slot_is_none() {
    let table = table(2);
    assert_eq!(table.capacity(), 2);
    assert!(table.slot(2).is_none());
}
