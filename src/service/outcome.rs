use crate::card::GOAL;
use crate::status::{GameStatus, Outcome};
use crate::table::{Seat, SlotState};

/// Compares a player's final score against the rival's.
///
/// Going over the goal loses regardless of the other score. Otherwise the
/// higher score wins.
///
/// # Example
///
/// ```
/// use bjduel::{Outcome, rank};
///
/// assert_eq!(rank(22, 15), Outcome::Lose);
/// assert_eq!(rank(15, 22), Outcome::Win);
/// assert_eq!(rank(20, 20), Outcome::Draw);
/// ```
#[must_use]
pub const fn rank(own: u32, rival: u32) -> Outcome {
    if own > GOAL {
        Outcome::Lose
    } else if rival > GOAL || own > rival {
        Outcome::Win
    } else if rival > own {
        Outcome::Lose
    } else {
        Outcome::Draw
    }
}

/// Final result of a finished game as seen from `seat`.
pub(super) fn final_status(state: &SlotState, seat: Seat) -> GameStatus {
    let hand = state.hand(seat);
    let own = hand.score();
    let rival = state.hand(seat.other()).score();
    let outcome = rank(own, rival);

    let message = match outcome {
        Outcome::Lose if own > GOAL => {
            format!("You lose! You went over {GOAL} points. Your points: {own}, Rival points: {rival}")
        }
        Outcome::Win if rival > GOAL => {
            format!("You win! Rival went over {GOAL} points. Your points: {own}, Rival points: {rival}")
        }
        Outcome::Win => format!("You win! Your points: {own}, Rival points: {rival}"),
        Outcome::Lose => format!("You lose! Your points: {own}, Rival points: {rival}"),
        Outcome::Draw => format!("Draw! Your points: {own}, Rival points: {rival}"),
    };

    GameStatus::new(outcome.code(), message, hand)
}
