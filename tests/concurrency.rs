//! Many players hitting the table at once.

use std::collections::HashMap;
use std::sync::{Arc, Barrier};
use std::thread;

use bjduel::{Action, GameId, GameService, GameStatus, SlotStatus, StatusCode, TableOptions};

const CAPACITY: usize = 8;

#[test]
fn concurrent_registrations_fill_every_slot_once() {
    let service = Arc::new(GameService::new(
        TableOptions::default().with_capacity(CAPACITY).with_seed(1),
    ));
    let barrier = Arc::new(Barrier::new(CAPACITY * 2));

    let handles: Vec<_> = (0..CAPACITY * 2)
        .map(|index| {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                service.register(&format!("player-{index}")).unwrap()
            })
        })
        .collect();

    let mut seated: HashMap<GameId, usize> = HashMap::new();
    for handle in handles {
        *seated.entry(handle.join().unwrap()).or_default() += 1;
    }

    assert_eq!(seated.len(), CAPACITY);
    assert!(seated.values().all(|&count| count == 2));

    for game in 0..CAPACITY {
        let state = service.table().slot(game).unwrap().lock();
        assert_eq!(state.status, SlotStatus::Ready);
        assert!(state.names.iter().all(Option::is_some));
        assert_ne!(state.names[0], state.names[1]);
    }
    assert!(service.register("late").is_err());
}

/// Plays until the game ends, standing once above 15.
fn play(service: &GameService, name: &str, game: GameId) -> GameStatus {
    loop {
        let mut status = service.get_status(name, game).unwrap();
        if status.code.is_terminal() {
            return status;
        }
        assert_eq!(status.code, StatusCode::TurnPlay);

        loop {
            let action = if status.points() > 15 {
                Action::Stand
            } else {
                Action::Hit
            };
            status = service.player_move(name, game, action).unwrap();
            if status.code.is_terminal() {
                return status;
            }
            if status.code == StatusCode::TurnWait || status.points() >= 21 {
                break;
            }
        }
    }
}

#[test]
fn concurrent_games_all_finish() {
    let service = Arc::new(GameService::new(
        TableOptions::default().with_capacity(CAPACITY).with_seed(77),
    ));

    let handles: Vec<_> = (0..CAPACITY)
        .flat_map(|game| {
            ["a", "b"].map(|seat| {
                let name = format!("{seat}{game}");
                let game_id = service.register(&name).unwrap();
                assert_eq!(game_id, game);
                let service = Arc::clone(&service);
                thread::spawn(move || play(&service, &name, game_id))
            })
        })
        .collect();

    let results: Vec<GameStatus> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for pair in results.chunks(2) {
        assert!(pair.iter().all(|status| status.code.is_terminal()));
        assert!(
            !(pair[0].code == StatusCode::GameWin && pair[1].code == StatusCode::GameWin),
            "both players of one game cannot win"
        );
    }
    for game in 0..CAPACITY {
        assert!(service.table().slot(game).unwrap().lock().end_of_game);
    }
}
