//! Win detection for pawns-only chess.

use super::super::{Board, Color};
use tracing::instrument;

/// Returns true if `side` has no pawns left.
#[instrument(skip(board), fields(side = %side))]
pub fn is_annihilated(board: &Board, side: Color) -> bool {
    board.count_pawns(side) == 0
}

/// Returns true if a pawn of `side` stands on its target back rank.
#[instrument(skip(board), fields(side = %side))]
pub fn reached_back_rank(board: &Board, side: Color) -> bool {
    board.pawns(side).any(|sq| sq.rank() == side.back_rank())
}

/// Checks whether `mover`, having just moved, has won.
///
/// Annihilation of the opponent is checked before promotion-rank arrival;
/// both award the game to `mover`.
#[instrument(skip(board), fields(mover = %mover))]
pub fn check_winner(board: &Board, mover: Color) -> Option<Color> {
    if is_annihilated(board, mover.opponent()) || reached_back_rank(board, mover) {
        Some(mover)
    } else {
        None
    }
}
