//! Core domain types for the shogi board mirror.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 9;

/// Prefix marking a promoted piece in the serialized board.
pub const PROMOTION_MARKER: char = '+';

/// Board layout of the standard opening position.
pub const OPENING_LAYOUT: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL";

/// Board layout with no pieces at all.
pub const EMPTY_LAYOUT: &str = "9/9/9/9/9/9/9/9/9";

/// One of the two fixed sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// First role. Moves on odd move counts.
    White,
    /// Second role. Moves on even move counts, so it opens the game.
    Black,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Returns the side that moves after `num_moves` moves have been played.
    #[instrument]
    pub fn to_move(num_moves: u32) -> Self {
        if num_moves % 2 == 0 {
            Side::Black
        } else {
            Side::Black.opponent()
        }
    }
}

/// A piece token: a base symbol, optionally promoted.
///
/// The symbol is kept verbatim. Upper case belongs to black, lower case to
/// white, following the board notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    symbol: char,
    promoted: bool,
}

impl Piece {
    /// Creates an unpromoted piece.
    pub fn new(symbol: char) -> Self {
        Self {
            symbol,
            promoted: false,
        }
    }

    /// Creates a promoted piece.
    pub fn promoted(symbol: char) -> Self {
        Self {
            symbol,
            promoted: true,
        }
    }

    /// Returns the base symbol.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Returns true if the piece carries the promotion marker.
    pub fn is_promoted(&self) -> bool {
        self.promoted
    }

    /// Returns the side owning this piece.
    pub fn side(&self) -> Side {
        if self.symbol.is_ascii_lowercase() {
            Side::White
        } else {
            Side::Black
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.promoted {
            write!(f, "{}{}", PROMOTION_MARKER, self.symbol)
        } else {
            write!(f, "{}", self.symbol)
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No piece.
    #[default]
    Empty,
    /// Square occupied by a piece.
    Occupied(Piece),
}

impl Cell {
    /// Returns the piece on this square, if any.
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(*piece),
        }
    }

    /// Returns true if the square holds no piece.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 9x9 shogi board, row 0 being the topmost rank as encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the standard opening position.
    #[instrument]
    pub fn opening() -> Self {
        super::codec::decode(OPENING_LAYOUT)
    }

    /// Builds a board from complete rows.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the square at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|rank| rank.get(col)).copied()
    }

    /// Sets the square at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), &'static str> {
        let slot = self
            .cells
            .get_mut(row)
            .and_then(|rank| rank.get_mut(col))
            .ok_or("Position out of bounds")?;
        *slot = cell;
        Ok(())
    }

    /// Returns all rows, topmost first.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Counts the occupied squares.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, rank) in self.cells.iter().enumerate() {
            let line: Vec<String> = rank
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => " .".to_string(),
                    Cell::Occupied(piece) => format!("{:>2}", piece.to_string()),
                })
                .collect();
            result.push_str(&format!("{} |{}", row, line.join(" ")));
            if row + 1 < BOARD_SIZE {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::opening()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", super::codec::encode(self))
    }
}
