//! Interactive console session.
//!
//! Drives one [`Game`] from start to finish over any line-based reader and
//! writer, so the same loop serves stdin/stdout and scripted tests.

use crate::config::GameConfig;
use crate::input::{Command, parse_command};
use crate::render::render_board;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_pawns::{Color, Game, GameResult, IllegalMove, MoveOutcome};
use tracing::{debug, info, instrument, warn};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached a result.
    Finished(GameResult),
    /// A player typed `exit`, or input ran out.
    Exited,
}

/// Console message announcing a result.
pub fn result_message(result: GameResult) -> &'static str {
    match result {
        GameResult::WhiteWins => "White Wins!",
        GameResult::BlackWins => "Black Wins!",
        GameResult::Draw => "Stalemate!",
    }
}

/// A console game bound to an input and an output.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: GameConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session.
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Plays one game to completion.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionEnd> {
        self.say("Pawns-Only Chess")?;

        let Some(white) = self.player_name(Color::White)? else {
            return self.bye();
        };
        let Some(black) = self.player_name(Color::Black)? else {
            return self.bye();
        };
        info!(%white, %black, "Players seated");

        let mut game = Game::new(&white, &black);
        self.show_board(&game)?;

        loop {
            let side = game.state().to_move();
            let name = game.state().player(side).name().to_string();
            self.say(&format!("{name}'s turn:"))?;

            let Some(line) = self.read_line()? else {
                return self.bye();
            };

            let mv = match parse_command(&line) {
                Ok(Command::Exit) => return self.bye(),
                Ok(Command::Move(mv)) => mv,
                Err(e) => {
                    debug!(line = %e.line, "Unparseable input");
                    self.say(&e.to_string())?;
                    continue;
                }
            };

            match game.submit_move(mv) {
                MoveOutcome::Applied(_) => self.show_board(&game)?,
                MoveOutcome::Illegal(IllegalMove::NoPieceAtOrigin) => {
                    self.say(&format!("No {side} pawn at {}", mv.from))?;
                }
                MoveOutcome::Illegal(reason) => {
                    debug!(%reason, %mv, "Illegal move");
                    self.say("Invalid Input")?;
                }
                MoveOutcome::GameOver(result) => {
                    self.show_board(&game)?;
                    self.say(result_message(result))?;
                    self.say("Bye!")?;
                    return Ok(SessionEnd::Finished(result));
                }
            }
        }
    }

    /// Name for `color`'s player, from config or asked for.
    fn player_name(&mut self, color: Color) -> Result<Option<String>> {
        let configured = match color {
            Color::White => self.config.white_name().clone(),
            Color::Black => self.config.black_name().clone(),
        };
        if configured.is_some() {
            return Ok(configured);
        }

        let prompt = match color {
            Color::White => "First Player's name:",
            Color::Black => "Second Player's name:",
        };
        self.say(prompt)?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    fn show_board(&mut self, game: &Game) -> Result<()> {
        if *self.config.show_board() {
            write!(self.output, "{}", render_board(&game.renderable()))
                .context("Failed to write board")?;
        }
        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("Failed to write output")
    }

    fn bye(&mut self) -> Result<SessionEnd> {
        self.say("Bye!")?;
        Ok(SessionEnd::Exited)
    }

    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            warn!("Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(script: &str, config: GameConfig) -> (SessionEnd, String) {
        let mut output = Vec::new();
        let end = Session::new(script.as_bytes(), &mut output, config)
            .run()
            .unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    fn quiet() -> GameConfig {
        GameConfig::new().with_show_board(false)
    }

    #[test]
    fn test_prompts_for_names_then_exits() {
        let (end, out) = play("Ann\nBob\nexit\n", quiet());
        assert_eq!(end, SessionEnd::Exited);
        assert_eq!(
            out,
            "Pawns-Only Chess\nFirst Player's name:\nSecond Player's name:\nAnn's turn:\nBye!\n"
        );
    }

    #[test]
    fn test_configured_names_skip_prompts() {
        let config = quiet()
            .with_white_name(Some("Ann".into()))
            .with_black_name(Some("Bob".into()));
        let (_, out) = play("e2e4\nexit\n", config);
        assert_eq!(out, "Pawns-Only Chess\nAnn's turn:\nBob's turn:\nBye!\n");
    }

    #[test]
    fn test_rejections_keep_turn() {
        let (_, out) = play("Ann\nBob\ne2\ne7e5\ne2e5\nexit\n", quiet());
        let expected = [
            "Ann's turn:",
            "Invalid Input",
            "Ann's turn:",
            "No white pawn at e7",
            "Ann's turn:",
            "Invalid Input",
            "Ann's turn:",
            "Bye!",
        ]
        .join("\n");
        assert!(out.ends_with(&format!("{expected}\n")), "{out}");
    }

    #[test]
    fn test_end_of_input_exits() {
        let (end, out) = play("Ann\n", quiet());
        assert_eq!(end, SessionEnd::Exited);
        assert!(out.ends_with("Bye!\n"));
    }

    #[test]
    fn test_board_printed_after_moves() {
        let config = GameConfig::new()
            .with_white_name(Some("Ann".into()))
            .with_black_name(Some("Bob".into()));
        let (_, out) = play("e2e4\nexit\n", config);
        assert_eq!(out.matches("    a   b   c   d   e   f   g   h  ").count(), 2);
        assert!(out.contains("4 |   |   |   |   | W |   |   |   |"));
    }
}
