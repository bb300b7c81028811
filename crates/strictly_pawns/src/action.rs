//! First-class action types for pawns-only chess.
//!
//! Moves are domain events, not side effects. A [`Move`] carries only the
//! player's intent; the validator turns it into a [`MoveKind`] or an
//! [`IllegalMove`] before anything touches the board.

use super::types::{Color, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A proposed or applied pawn displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Square the pawn leaves.
    pub from: Square,
    /// Square the pawn lands on.
    pub to: Square,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Parses four-character coordinate notation such as `"e2e4"`.
    #[instrument]
    pub fn from_coordinates(s: &str) -> Option<Self> {
        let from = Square::from_algebraic(s.get(0..2)?)?;
        let to = Square::from_algebraic(s.get(2..)?)?;
        Some(Self { from, to })
    }

    /// Signed file delta.
    pub fn file_delta(&self) -> i8 {
        self.to.file() as i8 - self.from.file() as i8
    }

    /// Signed rank delta.
    pub fn rank_delta(&self) -> i8 {
        self.to.rank() as i8 - self.from.rank() as i8
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Classification of a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveKind {
    /// One square forward onto an empty cell.
    #[display("straight push")]
    StraightPush,
    /// Two squares forward from the starting rank.
    #[display("double push")]
    DoublePush,
    /// Diagonal step onto an opposing pawn.
    #[display("diagonal capture")]
    DiagonalCapture,
    /// Diagonal step behind a pawn that just double-pushed.
    #[display("en passant")]
    EnPassantCapture,
}

impl MoveKind {
    /// Returns true if the move removes an opposing pawn.
    pub fn is_capture(self) -> bool {
        matches!(self, MoveKind::DiagonalCapture | MoveKind::EnPassantCapture)
    }
}

/// The most recently applied move.
///
/// Only one record is kept: en passant is only ever legal against the
/// immediately preceding move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Side that made the move.
    pub color: Color,
    /// The move itself.
    pub mv: Move,
    /// How the move was classified.
    pub kind: MoveKind,
}

impl MoveRecord {
    /// Creates a new record.
    pub fn new(color: Color, mv: Move, kind: MoveKind) -> Self {
        Self { color, mv, kind }
    }

    /// Returns true if this was a double push by `color` landing on `square`.
    pub fn is_double_push_to(&self, color: Color, square: Square) -> bool {
        self.kind == MoveKind::DoublePush && self.color == color && self.mv.to == square
    }
}

/// Reason a candidate move was rejected.
///
/// All variants are recoverable: the game state is left untouched and the
/// same side may try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IllegalMove {
    /// The origin does not hold a pawn of the side to move.
    #[display("No pawn of the side to move at origin")]
    NoPieceAtOrigin,

    /// The move does not advance toward the mover's back rank.
    #[display("Pawns only move forward")]
    WrongDirection,

    /// A pawn stands in the way.
    #[display("Path is blocked")]
    Blocked,

    /// The destination is not reachable by a pawn from the origin.
    #[display("Destination is not reachable from origin")]
    NotAdjacent,

    /// A diagonal move with nothing to capture.
    #[display("No piece to capture")]
    NoCaptureTarget,

    /// No side holds the turn because the game is over.
    #[display("Game is already over")]
    OutOfTurn,
}

impl std::error::Error for IllegalMove {}
