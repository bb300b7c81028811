//! First-class invariants for pawns-only chess.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and are checked after every applied
//! move in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant or postcondition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod forward_only;
pub mod pawn_supply;
pub mod turn_consistent;

pub use forward_only::ForwardOnlyInvariant;
pub use pawn_supply::PawnSupplyInvariant;
pub use turn_consistent::TurnConsistentInvariant;

/// All pawns-only invariants as a composable set.
pub type PawnsInvariants = (
    PawnSupplyInvariant,
    ForwardOnlyInvariant,
    TurnConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Color, Game, Move, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new("Ann", "Bob");
        assert!(PawnsInvariants::check_all(game.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new("Ann", "Bob");
        for m in ["e2e4", "d7d5", "e4d5"] {
            game.submit_move(Move::from_coordinates(m).unwrap());
        }
        assert!(PawnsInvariants::check_all(game.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut game = Game::new("Ann", "Bob");
        let board = game.state_mut().board_mut();
        // A ninth white pawn, and one standing behind its start rank.
        board.set(Square::from_algebraic("a1").unwrap(), Cell::Occupied(Color::White));

        let violations = PawnsInvariants::check_all(game.state()).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
