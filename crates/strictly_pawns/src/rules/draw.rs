//! Stalemate detection for pawns-only chess.

use super::super::{Board, Color, MoveRecord};
use super::legal_moves::has_legal_move;
use tracing::instrument;

/// Checks if `side`, about to move, has no legal move.
///
/// Every pawn is re-evaluated with the full move rules, so double pushes
/// and en passant against `last` count as available moves.
#[instrument(skip(board, last), fields(side = %side))]
pub fn is_stalemate(board: &Board, side: Color, last: Option<&MoveRecord>) -> bool {
    !has_legal_move(board, side, last)
}
