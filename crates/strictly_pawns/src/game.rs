//! Game state and turn orchestration for pawns-only chess.

use super::action::{IllegalMove, Move, MoveKind, MoveRecord};
use super::contracts::{Contract, MoveContract};
use super::rules::{apply, check_termination, check_winner, is_stalemate, legal_moves};
use super::types::{Board, Color};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameResult {
    /// White won.
    #[display("white wins")]
    WhiteWins,
    /// Black won.
    #[display("black wins")]
    BlackWins,
    /// Stalemate.
    #[display("draw")]
    Draw,
}

impl GameResult {
    /// The result of `color` winning.
    pub fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Draw => None,
        }
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the given side to move.
    AwaitingMove(Color),
    /// Game over. No further moves are accepted.
    Terminated(GameResult),
}

/// Outcome of submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move applied; the given side moves next.
    Applied(Color),
    /// Move rejected; nothing changed and the same side moves again.
    Illegal(IllegalMove),
    /// Move applied and the game is over.
    GameOver(GameResult),
}

/// A named participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Side the player commands.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// White's player.
    white: Player,
    /// Black's player.
    black: Player,
    /// Side whose turn it is (or would be, once terminated).
    to_move: Color,
    /// Most recent move.
    last_move: Option<MoveRecord>,
    /// Number of applied moves.
    move_count: u32,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player commanding `color`.
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Returns the number of applied moves.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Records an applied move and hands the turn over.
    fn record_move(&mut self, record: MoveRecord) {
        self.last_move = Some(record);
        self.move_count += 1;
        self.to_move = record.color.opponent();
    }
}

/// Pawns-only chess engine.
///
/// Owns the [`GameState`] and is the only thing that mutates it.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game from the standard starting position. White moves first.
    #[instrument(skip_all, fields(white = %white.as_ref(), black = %black.as_ref()))]
    pub fn new(white: impl AsRef<str>, black: impl AsRef<str>) -> Self {
        info!("Starting new game");
        Self {
            state: GameState {
                board: Board::starting(),
                white: Player::new(white.as_ref(), Color::White),
                black: Player::new(black.as_ref(), Color::Black),
                to_move: Color::White,
                last_move: None,
                move_count: 0,
                status: GameStatus::AwaitingMove(Color::White),
            },
        }
    }

    /// Creates a game from an arbitrary position.
    ///
    /// A position that is already decided starts terminated: either side may
    /// already have won, and otherwise `to_move` may have no legal move.
    #[instrument(skip(board))]
    pub fn from_position(board: Board, to_move: Color, last_move: Option<MoveRecord>) -> Self {
        let status = match pre_turn_result(&board, to_move, last_move.as_ref()) {
            Some(result) => GameStatus::Terminated(result),
            None => GameStatus::AwaitingMove(to_move),
        };
        debug!(?status, "Game set up from position");
        Self {
            state: GameState {
                board,
                white: Player::new("White", Color::White),
                black: Player::new("Black", Color::Black),
                to_move,
                last_move,
                move_count: 0,
                status,
            },
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.state.status, GameStatus::Terminated(_))
    }

    /// All legal moves for the side to move; empty once the game is over.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<(Move, MoveKind)> {
        match self.state.status {
            GameStatus::AwaitingMove(side) => {
                legal_moves(&self.state.board, side, self.state.last_move.as_ref())
            }
            GameStatus::Terminated(_) => Vec::new(),
        }
    }

    /// Submits a move for the side to move.
    ///
    /// An illegal move leaves the state untouched. A legal move is applied,
    /// the turn passes, and the termination rules decide whether the game
    /// goes on.
    #[instrument(skip(self), fields(mv = %mv, side = %self.state.to_move))]
    pub fn submit_move(&mut self, mv: Move) -> MoveOutcome {
        let kind = match MoveContract::pre(&self.state, &mv) {
            Ok(kind) => kind,
            Err(reason) => {
                debug!(%reason, "Move rejected");
                return MoveOutcome::Illegal(reason);
            }
        };

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let mover = self.state.to_move;
        let record = apply(&mut self.state.board, mover, mv, kind);
        self.state.record_move(record);
        if kind.is_capture() {
            debug!(
                %kind,
                remaining = self.state.board.count_pawns(mover.opponent()),
                "Pawn captured"
            );
        }

        let outcome = match check_termination(&self.state.board, mover, Some(&record)) {
            Some(result) => {
                info!(%result, moves = self.state.move_count, "Game over");
                self.state.status = GameStatus::Terminated(result);
                MoveOutcome::GameOver(result)
            }
            None => {
                let next = mover.opponent();
                self.state.status = GameStatus::AwaitingMove(next);
                MoveOutcome::Applied(next)
            }
        };

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(&before, &self.state);
            if let Err(violation) = &post {
                tracing::error!(%violation, "Move broke a game invariant");
            }
            debug_assert!(post.is_ok(), "postcondition failed after {mv}");
        }

        outcome
    }

    /// Snapshot of the board for renderers.
    pub fn renderable(&self) -> Board {
        self.state.board.clone()
    }
}

/// Result of a position before `to_move` plays, if it is already decided.
///
/// Wins are checked for the side that moved last, then for `to_move`,
/// before the stalemate check.
fn pre_turn_result(
    board: &Board,
    to_move: Color,
    last: Option<&MoveRecord>,
) -> Option<GameResult> {
    let winner = check_winner(board, to_move.opponent()).or_else(|| check_winner(board, to_move));
    if let Some(winner) = winner {
        return Some(GameResult::win_for(winner));
    }
    is_stalemate(board, to_move, last).then_some(GameResult::Draw)
}

/// Starts a game; `player1` plays White.
pub fn new_game(player1: impl AsRef<str>, player2: impl AsRef<str>) -> Game {
    Game::new(player1, player2)
}

/// Submits a move to `game`.
pub fn submit_move(game: &mut Game, mv: Move) -> MoveOutcome {
    game.submit_move(mv)
}

/// Board snapshot for rendering collaborators.
pub fn renderable(game: &Game) -> Board {
    game.renderable()
}
