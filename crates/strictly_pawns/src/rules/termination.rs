//! Game termination after a move.

use super::super::{Board, Color, GameResult, MoveRecord};
use super::draw::is_stalemate;
use super::win::check_winner;
use tracing::{debug, instrument};

/// Evaluates whether the game is over once `mover` has moved.
///
/// Checked in priority order:
/// 1. the opponent has no pawns left (mover wins);
/// 2. a mover's pawn stands on its back rank (mover wins);
/// 3. the opponent, next to move, has no legal move (draw).
///
/// Returns `None` if play continues.
#[instrument(skip(board, last), fields(mover = %mover))]
pub fn check_termination(
    board: &Board,
    mover: Color,
    last: Option<&MoveRecord>,
) -> Option<GameResult> {
    if let Some(winner) = check_winner(board, mover) {
        debug!(%winner, "Game won");
        return Some(GameResult::win_for(winner));
    }

    if is_stalemate(board, mover.opponent(), last) {
        debug!(next = %mover.opponent(), "No legal moves for side to move");
        return Some(GameResult::Draw);
    }

    None
}
