//! Forward-only invariant: pawns never stand behind their start rank.

use super::super::{Color, GameState};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: no pawn stands on its own side's first rank.
///
/// White pawns start on rank 2 and only advance, so rank 1 is unreachable
/// for them; likewise rank 8 for Black.
pub struct ForwardOnlyInvariant;

impl Invariant<GameState> for ForwardOnlyInvariant {
    fn holds(state: &GameState) -> bool {
        Color::iter().all(|color| {
            let home = color.opponent().back_rank();
            state.board().pawns(color).all(|sq| sq.rank() != home)
        })
    }

    fn description() -> &'static str {
        "Pawns never stand behind their starting rank"
    }
}
