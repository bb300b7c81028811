//! Move application.

use super::super::{Board, Cell, Color, Move, MoveKind, MoveRecord};
use super::validate::en_passant_victim;
use tracing::{debug, instrument};

/// Applies a classified move to the board and returns its record.
///
/// Trusts `kind`: the move must have been produced by
/// [`classify`](super::classify) for the same board and side.
#[instrument(skip(board), fields(side = %side, mv = %mv, kind = %kind))]
pub fn apply(board: &mut Board, side: Color, mv: Move, kind: MoveKind) -> MoveRecord {
    board.set(mv.from, Cell::Empty);
    board.set(mv.to, Cell::Occupied(side));

    if kind == MoveKind::EnPassantCapture
        && let Some(victim) = en_passant_victim(mv)
    {
        debug!(%victim, "Removing pawn taken en passant");
        board.set(victim, Cell::Empty);
    }

    MoveRecord::new(side, mv, kind)
}
