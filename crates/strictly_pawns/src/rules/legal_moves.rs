//! Legal move enumeration.

use super::super::{Board, Color, Move, MoveKind, MoveRecord};
use super::validate::classify;
use tracing::instrument;

/// Every legal move for `side`, with its classification.
///
/// Each pawn is tried against every square a pawn could possibly reach
/// (one or two forward, one diagonally forward either way) and the
/// validator decides.
#[instrument(skip(board, last), fields(side = %side))]
pub fn legal_moves(board: &Board, side: Color, last: Option<&MoveRecord>) -> Vec<(Move, MoveKind)> {
    let d = side.forward();
    let steps = [(0, d), (0, 2 * d), (-1, d), (1, d)];

    board
        .pawns(side)
        .flat_map(|from| {
            steps
                .iter()
                .filter_map(move |&(df, dr)| from.offset(df, dr))
                .map(move |to| Move::new(from, to))
        })
        .filter_map(|mv| classify(board, side, last, mv).ok().map(|kind| (mv, kind)))
        .collect()
}

/// Returns true if `side` has at least one legal move.
pub fn has_legal_move(board: &Board, side: Color, last: Option<&MoveRecord>) -> bool {
    !legal_moves(board, side, last).is_empty()
}
