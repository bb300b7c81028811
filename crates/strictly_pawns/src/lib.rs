//! Pure pawns-only chess rules.
//!
//! Each side starts with a full rank of pawns. Pawns push, double-push
//! from their starting rank, capture diagonally and capture en passant.
//! A side wins by taking every opposing pawn or by reaching the far rank;
//! a side with no legal move on its turn draws the game.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Cell`], [`Color`]
//! - **Rules**: pure functions in [`rules`] that classify, apply and
//!   evaluate moves
//! - **Contracts**: pre/postconditions around each move ([`contracts`])
//! - **Invariants**: properties checked after every move ([`invariants`])
//! - **Engine**: [`Game`], the only owner and mutator of [`GameState`]
//!
//! # Example
//!
//! ```
//! use strictly_pawns::{new_game, Color, Move, MoveOutcome};
//!
//! let mut game = new_game("Ann", "Bob");
//! let mv = Move::from_coordinates("e2e4").unwrap();
//! assert_eq!(game.submit_move(mv), MoveOutcome::Applied(Color::Black));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{IllegalMove, Move, MoveKind, MoveRecord};
pub use game::{
    Game, GameResult, GameState, GameStatus, MoveOutcome, Player, new_game, renderable,
    submit_move,
};
pub use types::{BOARD_SIZE, Board, Cell, Color, Square, file_index, file_label, rank_index};
