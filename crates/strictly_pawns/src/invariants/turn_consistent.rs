//! Turn consistency invariant: the side to move is the one that did not move last.

use super::super::{GameState, GameStatus};
use super::Invariant;

/// Invariant: turns alternate.
///
/// The last recorded move belongs to the side not on move, and a game
/// awaiting a move awaits it from the side to move.
pub struct TurnConsistentInvariant;

impl Invariant<GameState> for TurnConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let last_by_other = state
            .last_move()
            .is_none_or(|rec| rec.color == state.to_move().opponent());
        let awaiting_right_side = match state.status() {
            GameStatus::AwaitingMove(side) => side == state.to_move(),
            GameStatus::Terminated(_) => true,
        };
        last_by_other && awaiting_right_side
    }

    fn description() -> &'static str {
        "Sides alternate turns"
    }
}
