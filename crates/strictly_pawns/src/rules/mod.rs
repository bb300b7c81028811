//! Game rules for pawns-only chess.
//!
//! This module contains pure functions over a [`Board`](super::Board):
//! classifying a candidate move, applying a classified move, and deciding
//! whether the game has ended. Rules are separated from board storage so
//! the engine and contracts can compose them.

pub mod draw;
pub mod execute;
pub mod legal_moves;
pub mod termination;
pub mod validate;
pub mod win;

pub use draw::is_stalemate;
pub use execute::apply;
pub use legal_moves::{has_legal_move, legal_moves};
pub use termination::check_termination;
pub use validate::classify;
pub use win::{check_winner, is_annihilated, reached_back_rank};
