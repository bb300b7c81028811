//! End-to-end tests for the pawns-only engine.

use strictly_pawns::{
    Board, Cell, Color, Game, GameResult, GameStatus, IllegalMove, Move, MoveKind, MoveOutcome,
    MoveRecord, Square, new_game,
};

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).expect("valid square")
}

fn mv(s: &str) -> Move {
    Move::from_coordinates(s).expect("valid move")
}

fn place(board: &mut Board, squares: &[&str], color: Color) {
    for s in squares {
        board.set(sq(s), Cell::Occupied(color));
    }
}

fn total_pawns(board: &Board) -> usize {
    board.count_pawns(Color::White) + board.count_pawns(Color::Black)
}

#[test]
fn test_en_passant_scenario() {
    // White c4, Black d4 having just double-pushed from d6.
    let mut board = Board::empty();
    place(&mut board, &["c4"], Color::White);
    place(&mut board, &["d4", "h7"], Color::Black);
    let last = MoveRecord::new(Color::Black, mv("d6d4"), MoveKind::DoublePush);
    let mut game = Game::from_position(board, Color::White, Some(last));

    assert_eq!(game.submit_move(mv("c4d5")), MoveOutcome::Applied(Color::Black));
    assert_eq!(game.board().get(sq("d5")), Cell::Occupied(Color::White));
    assert_eq!(game.board().get(sq("d4")), Cell::Empty);
    assert_eq!(game.board().count_pawns(Color::Black), 1);
}

#[test]
fn test_en_passant_window_closes() {
    let mut game = new_game("Ann", "Bob");
    for m in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        assert!(matches!(game.submit_move(mv(m)), MoveOutcome::Applied(_)));
    }
    // Window open now; let it pass with a quiet move each.
    assert!(game.legal_moves().contains(&(mv("e5d6"), MoveKind::EnPassantCapture)));
    game.submit_move(mv("h2h3"));
    game.submit_move(mv("h7h6"));

    assert_eq!(
        game.submit_move(mv("e5d6")),
        MoveOutcome::Illegal(IllegalMove::NoCaptureTarget)
    );
}

#[test]
fn test_en_passant_in_live_game() {
    let mut game = new_game("Ann", "Bob");
    for m in ["e2e4", "a7a6", "e4e5", "f7f5"] {
        game.submit_move(mv(m));
    }
    assert_eq!(game.submit_move(mv("e5f6")), MoveOutcome::Applied(Color::Black));
    assert!(game.board().is_empty(sq("f5")));
    assert_eq!(game.board().count_pawns(Color::Black), 7);
}

#[test]
fn test_straight_push_to_back_rank_wins() {
    let mut board = Board::empty();
    place(&mut board, &["a7"], Color::White);
    place(&mut board, &["h5"], Color::Black);
    let mut game = Game::from_position(board, Color::White, None);

    assert_eq!(game.submit_move(mv("a7a8")), MoveOutcome::GameOver(GameResult::WhiteWins));
    assert_eq!(game.status(), GameStatus::Terminated(GameResult::WhiteWins));
}

#[test]
fn test_back_rank_win_despite_remaining_captures() {
    // White could still take e5 from d4, but Black reaching rank 1 ends it.
    let mut board = Board::empty();
    place(&mut board, &["b2", "e5"], Color::Black);
    place(&mut board, &["d4", "a3"], Color::White);
    let mut game = Game::from_position(board, Color::Black, None);

    assert_eq!(game.submit_move(mv("b2b1")), MoveOutcome::GameOver(GameResult::BlackWins));
}

#[test]
fn test_out_of_turn_move_is_no_piece_at_origin() {
    let mut game = new_game("Ann", "Bob");
    let before = game.state().clone();
    assert_eq!(
        game.submit_move(mv("e7e5")),
        MoveOutcome::Illegal(IllegalMove::NoPieceAtOrigin)
    );
    assert_eq!(game.state(), &before);
}

#[test]
fn test_double_push_only_from_start_rank() {
    let mut game = new_game("Ann", "Bob");
    game.submit_move(mv("e2e3"));
    game.submit_move(mv("a7a6"));
    assert_eq!(
        game.submit_move(mv("e3e5")),
        MoveOutcome::Illegal(IllegalMove::NotAdjacent)
    );
    assert_eq!(
        game.submit_move(mv("a6a4")),
        MoveOutcome::Illegal(IllegalMove::NoPieceAtOrigin)
    );
}

#[test]
fn test_capturing_last_pawn_wins() {
    let mut board = Board::empty();
    place(&mut board, &["e4"], Color::White);
    place(&mut board, &["d5"], Color::Black);
    let mut game = Game::from_position(board, Color::White, None);

    assert_eq!(game.submit_move(mv("e4d5")), MoveOutcome::GameOver(GameResult::WhiteWins));
}

#[test]
fn test_stalemate_after_move() {
    // After b4-b5 both Black pawns are blocked with nothing to capture.
    let mut board = Board::empty();
    place(&mut board, &["b4", "g5"], Color::White);
    place(&mut board, &["b6", "g6"], Color::Black);
    let mut game = Game::from_position(board, Color::White, None);

    assert_eq!(game.submit_move(mv("b4b5")), MoveOutcome::GameOver(GameResult::Draw));
}

#[test]
fn test_one_extra_move_flips_stalemate() {
    let mut board = Board::empty();
    place(&mut board, &["b4", "g5"], Color::White);
    place(&mut board, &["b6", "g6", "h7"], Color::Black);
    let mut game = Game::from_position(board, Color::White, None);

    assert_eq!(game.submit_move(mv("b4b5")), MoveOutcome::Applied(Color::Black));
}

#[test]
fn test_pawn_count_never_increases() {
    // Always play the first legal move until the game ends.
    let mut game = new_game("Ann", "Bob");
    let mut previous = total_pawns(game.board());
    assert_eq!(previous, 16);

    for _ in 0..200 {
        let moves = game.legal_moves();
        let Some(&(next, _)) = moves.first() else {
            break;
        };
        let outcome = game.submit_move(next);
        assert!(!matches!(outcome, MoveOutcome::Illegal(_)));

        let now = total_pawns(game.board());
        assert!(now <= previous);
        previous = now;

        if game.is_over() {
            break;
        }
    }
    assert!(game.is_over());
}

#[test]
fn test_outcome_serializes() {
    let outcome = MoveOutcome::Illegal(IllegalMove::Blocked);
    let json = serde_json::to_string(&outcome).expect("serialize");
    assert_eq!(json, r#"{"Illegal":"Blocked"}"#);
}
