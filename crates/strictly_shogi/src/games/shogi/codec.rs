//! Conversion between the serialized board layout and [`Board`].
//!
//! The layout is the first field of an SFEN string: ranks joined by `/`,
//! digits for runs of empty squares, `+` before a symbol for a promoted piece.

use super::types::{BOARD_SIZE, Board, Cell, PROMOTION_MARKER, Piece};
use std::iter::Peekable;
use std::str::Chars;
use tracing::{instrument, warn};

/// Separator between ranks.
pub const RANK_DELIMITER: char = '/';

/// One lexical unit of a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankToken {
    /// A run of empty squares.
    EmptyRun(usize),
    /// An unpromoted piece symbol.
    Base(char),
    /// A promoted piece symbol (marker already consumed).
    Promoted(char),
}

impl RankToken {
    /// Number of columns this token covers.
    pub fn width(&self) -> usize {
        match self {
            RankToken::EmptyRun(n) => *n,
            RankToken::Base(_) | RankToken::Promoted(_) => 1,
        }
    }
}

/// Scanner over a single rank with one character of lookahead.
#[derive(Debug, Clone)]
pub struct RankScanner<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> RankScanner<'a> {
    /// Creates a scanner over one rank.
    pub fn new(rank: &'a str) -> Self {
        Self {
            chars: rank.chars().peekable(),
        }
    }
}

impl Iterator for RankScanner<'_> {
    type Item = RankToken;

    fn next(&mut self) -> Option<RankToken> {
        let c = self.chars.next()?;

        if let Some(first) = c.to_digit(10) {
            let mut run = first as usize;
            while let Some(digit) = self.chars.peek().and_then(|d| d.to_digit(10)) {
                run = run.saturating_mul(10).saturating_add(digit as usize);
                self.chars.next();
            }
            return Some(RankToken::EmptyRun(run));
        }

        if c == PROMOTION_MARKER {
            let symbol = self.chars.next();
            if symbol.is_none() {
                warn!("Dangling promotion marker at end of rank");
            }
            return symbol.map(RankToken::Promoted);
        }

        Some(RankToken::Base(c))
    }
}

/// Decodes the board layout of a serialized position.
///
/// Only the first space-separated field is read. Ill-formed ranks are
/// repaired rather than rejected: overflow is truncated, underflow and
/// missing ranks are filled with empty squares.
#[instrument]
pub fn decode(serialized: &str) -> Board {
    let layout = serialized.split(' ').next().unwrap_or_default();
    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];

    let ranks: Vec<&str> = layout.split(RANK_DELIMITER).collect();
    if ranks.len() != BOARD_SIZE {
        warn!(ranks = ranks.len(), "Board layout has wrong number of ranks");
    }

    for (row, rank) in ranks.into_iter().take(BOARD_SIZE).enumerate() {
        let mut file = 0;
        for token in RankScanner::new(rank) {
            if token.width() > BOARD_SIZE - file {
                warn!(row, rank, "Rank overflows the board, truncating");
                break;
            }
            match token {
                RankToken::EmptyRun(n) => file += n,
                RankToken::Base(symbol) => {
                    cells[row][file] = Cell::Occupied(Piece::new(symbol));
                    file += 1;
                }
                RankToken::Promoted(symbol) => {
                    cells[row][file] = Cell::Occupied(Piece::promoted(symbol));
                    file += 1;
                }
            }
        }
        if file < BOARD_SIZE {
            warn!(row, rank, columns = file, "Rank is short, padding with empty squares");
        }
    }

    Board::from_rows(cells)
}

/// Encodes a board into its serialized layout.
#[instrument(skip(board))]
pub fn encode(board: &Board) -> String {
    let ranks: Vec<String> = board
        .rows()
        .iter()
        .map(|rank| {
            let mut out = String::new();
            let mut empties = 0;
            for cell in rank {
                match cell {
                    Cell::Empty => empties += 1,
                    Cell::Occupied(piece) => {
                        if empties > 0 {
                            out.push_str(&empties.to_string());
                            empties = 0;
                        }
                        out.push_str(&piece.to_string());
                    }
                }
            }
            if empties > 0 {
                out.push_str(&empties.to_string());
            }
            out
        })
        .collect();

    ranks.join(&RANK_DELIMITER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_tags_each_token() {
        let tokens: Vec<_> = RankScanner::new("l2+pK4").collect();
        assert_eq!(
            tokens,
            vec![
                RankToken::Base('l'),
                RankToken::EmptyRun(2),
                RankToken::Promoted('p'),
                RankToken::Base('K'),
                RankToken::EmptyRun(4),
            ]
        );
    }

    #[test]
    fn test_scanner_reads_multi_digit_runs() {
        let tokens: Vec<_> = RankScanner::new("12p").collect();
        assert_eq!(tokens, vec![RankToken::EmptyRun(12), RankToken::Base('p')]);
    }

    #[test]
    fn test_scanner_saturates_huge_runs() {
        let tokens: Vec<_> = RankScanner::new("99999999999999999999999").collect();
        assert_eq!(tokens, vec![RankToken::EmptyRun(usize::MAX)]);
    }

    #[test]
    fn test_decode_survives_huge_run_after_piece() {
        let board = decode("p18446744073709551615/9/9/9/9/9/9/9/9");
        assert_eq!(board.get(0, 0), Some(Cell::Occupied(Piece::new('p'))));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_scanner_drops_dangling_marker() {
        let tokens: Vec<_> = RankScanner::new("8+").collect();
        assert_eq!(tokens, vec![RankToken::EmptyRun(8)]);
    }

    #[test]
    fn test_decode_ignores_trailing_fields() {
        let with_fields = decode("9/9/9/9/4k4/9/9/9/9 b - 1");
        let bare = decode("9/9/9/9/4k4/9/9/9/9");
        assert_eq!(with_fields, bare);
        assert_eq!(with_fields.get(4, 4), Some(Cell::Occupied(Piece::new('k'))));
    }

    #[test]
    fn test_decode_pads_short_rank() {
        let board = decode("5/9/9/9/9/9/9/9/9");
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_decode_truncates_long_rank() {
        let board = decode("ppppppppppp/9/9/9/9/9/9/9/9");
        assert_eq!(board.piece_count(), BOARD_SIZE);
    }

    #[test]
    fn test_decode_fills_missing_ranks() {
        let board = decode("PPPPPPPPP");
        assert_eq!(board.piece_count(), BOARD_SIZE);
        assert_eq!(board.get(8, 0), Some(Cell::Empty));
    }

    #[test]
    fn test_encode_collapses_empty_runs() {
        let mut board = Board::empty();
        board.set(0, 3, Cell::Occupied(Piece::promoted('R'))).unwrap();
        assert_eq!(encode(&board), "3+R5/9/9/9/9/9/9/9/9");
    }
}
