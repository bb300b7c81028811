//! Console pawns-only chess.
//!
//! This library wraps the [`strictly_pawns`] rules engine with everything a
//! human needs to play it in a terminal.
//!
//! # Architecture
//!
//! - **Config**: TOML file with player names and display options
//! - **Input**: lexical parsing of move lines (`e2e4`, `exit`)
//! - **Render**: text board
//! - **Session**: the interactive loop, generic over reader and writer
//!
//! # Example
//!
//! ```
//! use pawns_only_chess::{GameConfig, Session, SessionEnd};
//!
//! let script = "Ann\nBob\nexit\n";
//! let mut output = Vec::new();
//! let end = Session::new(script.as_bytes(), &mut output, GameConfig::new())
//!     .run()
//!     .unwrap();
//! assert_eq!(end, SessionEnd::Exited);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod render;
mod session;

pub use config::{ConfigError, GameConfig};
pub use input::{Command, InputError, parse_command};
pub use render::render_board;
pub use session::{Session, SessionEnd, result_message};
