//! Text rendering of the board.

use strictly_pawns::{BOARD_SIZE, Board, Cell, Color, file_label};
use tracing::instrument;

const BORDER: &str = "  +---+---+---+---+---+---+---+---+";

/// Glyph drawn for a cell.
fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Occupied(Color::White) => 'W',
        Cell::Occupied(Color::Black) => 'B',
    }
}

/// Renders the board with rank 8 on top, one line per row, newline-terminated.
#[instrument(skip(board))]
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(BORDER);
    out.push('\n');

    for rank in (1..=BOARD_SIZE).rev() {
        out.push_str(&rank.to_string());
        out.push_str(" |");
        for cell in board.rank(rank).into_iter().flatten() {
            out.push(' ');
            out.push(glyph(*cell));
            out.push_str(" |");
        }
        out.push('\n');
        out.push_str(BORDER);
        out.push('\n');
    }

    out.push(' ');
    for file in 1..=BOARD_SIZE {
        out.push_str("   ");
        out.push(file_label(file));
    }
    out.push_str("  \n");
    out
}
