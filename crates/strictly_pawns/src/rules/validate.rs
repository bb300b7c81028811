//! Move legality for pawns-only chess.

use super::super::{Board, Cell, Color, IllegalMove, Move, MoveKind, MoveRecord, Square};
use tracing::instrument;

/// Classifies a candidate move for `side`.
///
/// Rules are tried in a fixed order and the first one that matches the
/// move's geometry decides the outcome:
///
/// 1. the origin must hold one of `side`'s pawns;
/// 2. one step forward onto an empty cell is a straight push;
/// 3. two steps forward from the starting rank over two empty cells is a
///    double push;
/// 4. one step diagonally forward onto an opposing pawn is a capture;
/// 5. one step diagonally forward onto an empty cell, beside a pawn that
///    double-pushed on the previous move, is an en passant capture.
///
/// Anything else is rejected with the most specific reason available.
#[instrument(skip(board), fields(side = %side, mv = %mv))]
pub fn classify(
    board: &Board,
    side: Color,
    last: Option<&MoveRecord>,
    mv: Move,
) -> Result<MoveKind, IllegalMove> {
    if board.get(mv.from) != Cell::Occupied(side) {
        return Err(IllegalMove::NoPieceAtOrigin);
    }

    let d = side.forward();
    let (df, dr) = (mv.file_delta(), mv.rank_delta());

    match (df.abs(), dr) {
        (0, r) if r == d => {
            if board.is_empty(mv.to) {
                Ok(MoveKind::StraightPush)
            } else {
                Err(IllegalMove::Blocked)
            }
        }
        (0, r) if r == 2 * d => {
            if mv.from.rank() != side.start_rank() {
                return Err(IllegalMove::NotAdjacent);
            }
            // from + d stays on the board because the destination does
            let path_clear = mv
                .from
                .offset(0, d)
                .is_some_and(|mid| board.is_empty(mid))
                && board.is_empty(mv.to);
            if path_clear {
                Ok(MoveKind::DoublePush)
            } else {
                Err(IllegalMove::Blocked)
            }
        }
        (1, r) if r == d => classify_diagonal(board, side, last, mv),
        (_, r) if r == 0 || r.signum() != d => Err(IllegalMove::WrongDirection),
        _ => Err(IllegalMove::NotAdjacent),
    }
}

/// Handles a one-step diagonal: plain capture, en passant, or nothing.
fn classify_diagonal(
    board: &Board,
    side: Color,
    last: Option<&MoveRecord>,
    mv: Move,
) -> Result<MoveKind, IllegalMove> {
    let opponent = side.opponent();
    match board.get(mv.to) {
        Cell::Occupied(c) if c == opponent => Ok(MoveKind::DiagonalCapture),
        Cell::Occupied(_) => Err(IllegalMove::NoCaptureTarget),
        Cell::Empty => {
            let Some(beside) = en_passant_victim(mv) else {
                return Err(IllegalMove::NoCaptureTarget);
            };
            let just_arrived = last.is_some_and(|rec| rec.is_double_push_to(opponent, beside));
            if just_arrived && board.get(beside) == Cell::Occupied(opponent) {
                Ok(MoveKind::EnPassantCapture)
            } else {
                Err(IllegalMove::NoCaptureTarget)
            }
        }
    }
}

/// Square of the pawn an en passant move removes: destination file, origin rank.
pub(crate) fn en_passant_victim(mv: Move) -> Option<Square> {
    Square::new(mv.to.file(), mv.from.rank())
}
