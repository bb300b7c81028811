//! Core domain types for pawns-only chess.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 8;

/// Side in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Color {
    /// White (moves first, advances toward rank 8).
    #[display("white")]
    White,
    /// Black (advances toward rank 1).
    #[display("black")]
    Black,
}

impl Color {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single forward step.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank the side's pawns start on.
    pub fn start_rank(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Rank a pawn of this side must reach to win.
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a pawn of the given side.
    Occupied(Color),
}

/// A square on the board, 1-indexed by file (a = 1) and rank.
///
/// Both coordinates are always within `1..=8`; construction is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Creates a square, or `None` if either coordinate is off the board.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        let on_board = |c: u8| (1..=BOARD_SIZE).contains(&c);
        (on_board(file) && on_board(rank)).then_some(Self { file, rank })
    }

    /// Parses algebraic notation such as `"e4"`.
    #[instrument]
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = file_index(chars.next()?)?;
        let rank = rank_index(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Self::new(file, rank)
    }

    /// File index (1-8).
    pub fn file(self) -> u8 {
        self.file
    }

    /// Rank index (1-8).
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the square shifted by the given deltas, if still on the board.
    pub fn offset(self, files: i8, ranks: i8) -> Option<Self> {
        let file = self.file.checked_add_signed(files)?;
        let rank = self.rank.checked_add_signed(ranks)?;
        Self::new(file, rank)
    }

    /// All 64 squares, rank by rank from rank 1.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=BOARD_SIZE).flat_map(|rank| (1..=BOARD_SIZE).map(move |file| Square { file, rank }))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", file_label(self.file), self.rank)
    }
}

/// Maps a file label (`'a'..='h'`, case-insensitive) to its index 1-8.
pub fn file_index(label: char) -> Option<u8> {
    match label.to_ascii_lowercase() {
        c @ 'a'..='h' => Some(c as u8 - b'a' + 1),
        _ => None,
    }
}

/// Maps a rank label (`'1'..='8'`) to its index 1-8.
pub fn rank_index(label: char) -> Option<u8> {
    match label {
        c @ '1'..='8' => Some(c as u8 - b'0'),
        _ => None,
    }
}

/// Label of a file index; indexes outside 1-8 render as `'?'`.
pub fn file_label(file: u8) -> char {
    match file {
        1..=BOARD_SIZE => (b'a' + file - 1) as char,
        _ => '?',
    }
}

/// 8x8 pawns-only board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[rank - 1][file - 1]`; rank 1 is White's home side.
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// Creates a board with no pawns.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Creates the starting position: White on rank 2, Black on rank 7.
    #[instrument]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            board.cells[usize::from(color.start_rank() - 1)] = [Cell::Occupied(color); 8];
        }
        board
    }

    /// Gets the cell at the given square.
    pub fn get(&self, square: Square) -> Cell {
        self.cells[usize::from(square.rank - 1)][usize::from(square.file - 1)]
    }

    /// Sets the cell at the given square.
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[usize::from(square.rank - 1)][usize::from(square.file - 1)] = cell;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square) == Cell::Empty
    }

    /// Counts the pawns of one side.
    pub fn count_pawns(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(color))
            .count()
    }

    /// Squares holding a pawn of the given side, rank by rank from rank 1.
    pub fn pawns(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |sq| self.get(*sq) == Cell::Occupied(color))
    }

    /// Returns one rank (1-8) as cells ordered from file a to h.
    ///
    /// Ranks outside 1-8 yield `None`.
    pub fn rank(&self, rank: u8) -> Option<&[Cell; 8]> {
        rank.checked_sub(1)
            .and_then(|idx| self.cells.get(usize::from(idx)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).expect("valid square")
    }

    #[test]
    fn test_coordinate_mapping() {
        assert_eq!(file_index('a'), Some(1));
        assert_eq!(file_index('H'), Some(8));
        assert_eq!(file_index('i'), None);
        assert_eq!(rank_index('1'), Some(1));
        assert_eq!(rank_index('8'), Some(8));
        assert_eq!(rank_index('9'), None);
        assert_eq!(rank_index('0'), None);
    }

    #[test]
    fn test_square_parsing_and_display() {
        let e4 = sq("e4");
        assert_eq!((e4.file(), e4.rank()), (5, 4));
        assert_eq!(e4.to_string(), "e4");
        assert_eq!(Square::from_algebraic("e44"), None);
        assert_eq!(Square::from_algebraic("z1"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn test_square_offset_respects_edges() {
        assert_eq!(sq("a1").offset(-1, 0), None);
        assert_eq!(sq("h8").offset(0, 1), None);
        assert_eq!(sq("d4").offset(1, -2), Some(sq("e2")));
        assert_eq!(Square::new(0, 3), None);
        assert_eq!(Square::new(3, 9), None);
    }

    #[test]
    fn test_starting_board() {
        let board = Board::starting();
        assert_eq!(board.count_pawns(Color::White), 8);
        assert_eq!(board.count_pawns(Color::Black), 8);
        assert_eq!(board.get(sq("c2")), Cell::Occupied(Color::White));
        assert_eq!(board.get(sq("f7")), Cell::Occupied(Color::Black));
        assert!(board.is_empty(sq("e4")));
        assert!(board.pawns(Color::White).all(|s| s.rank() == 2));
    }

    #[test]
    fn test_set_and_count() {
        let mut board = Board::empty();
        board.set(sq("d4"), Cell::Occupied(Color::Black));
        assert_eq!(board.count_pawns(Color::Black), 1);
        assert_eq!(board.count_pawns(Color::White), 0);
        board.set(sq("d4"), Cell::Empty);
        assert_eq!(board.count_pawns(Color::Black), 0);
    }

    #[test]
    fn test_rank_accessor() {
        let board = Board::starting();
        assert_eq!(board.rank(2), Some(&[Cell::Occupied(Color::White); 8]));
        assert_eq!(board.rank(0), None);
        assert_eq!(board.rank(9), None);
    }

    #[test]
    fn test_color_geometry() {
        assert_eq!(Color::White.forward(), 1);
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.back_rank(), 1);
        assert_eq!(Color::Black.to_string(), "black");
    }
}
