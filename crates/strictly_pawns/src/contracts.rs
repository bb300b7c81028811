//! Contract-based validation for pawns-only chess.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{IllegalMove, Move, MoveKind};
use super::invariants::{InvariantSet, InvariantViolation, PawnsInvariants};
use super::rules::classify;
use super::{Color, GameState, GameStatus};
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// What a satisfied precondition establishes about the action.
    type Verdict;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Verdict, IllegalMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must be awaiting a move.
pub struct GameOngoing;

impl GameOngoing {
    /// Returns the side to move, or `OutOfTurn` once the game has ended.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<Color, IllegalMove> {
        match state.status() {
            GameStatus::AwaitingMove(side) => Ok(side),
            GameStatus::Terminated(result) => {
                warn!(%result, "Move submitted after game ended");
                Err(IllegalMove::OutOfTurn)
            }
        }
    }
}

/// Composite precondition: the game is ongoing and the pawn rules allow the move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, returning its classification.
    #[instrument(skip(state))]
    pub fn check(mv: &Move, state: &GameState) -> Result<MoveKind, IllegalMove> {
        let side = GameOngoing::check(state)?;
        classify(state.board(), side, state.last_move(), *mv)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is awaiting a move
/// - Move is legal for the side to move
///
/// Postconditions:
/// - Neither side gained a pawn
/// - Exactly one move was counted
/// - All [`PawnsInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    type Verdict = MoveKind;

    fn pre(state: &GameState, action: &Move) -> Result<MoveKind, IllegalMove> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), InvariantViolation> {
        for color in Color::iter() {
            let (was, now) = (
                before.board().count_pawns(color),
                after.board().count_pawns(color),
            );
            if now > was {
                return Err(InvariantViolation::new(format!(
                    "{color} pawn count rose from {was} to {now}"
                )));
            }
        }

        if after.move_count() != before.move_count() + 1 {
            return Err(InvariantViolation::new(format!(
                "move counter went from {} to {}",
                before.move_count(),
                after.move_count()
            )));
        }

        PawnsInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvariantViolation::new(format!("Postcondition failed: {descriptions}"))
        })
    }
}
