//! Pawn supply invariant: no side ever has more than eight pawns.

use super::super::{Color, GameState};
use super::Invariant;
use strum::IntoEnumIterator;

/// Maximum pawns per side.
pub const MAX_PAWNS: usize = 8;

/// Invariant: each side has at most eight pawns.
///
/// Pawns are never created, so together with the starting position this
/// bounds the total at sixteen.
pub struct PawnSupplyInvariant;

impl Invariant<GameState> for PawnSupplyInvariant {
    fn holds(state: &GameState) -> bool {
        Color::iter().all(|color| state.board().count_pawns(color) <= MAX_PAWNS)
    }

    fn description() -> &'static str {
        "Each side has at most eight pawns"
    }
}
