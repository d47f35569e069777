//! Tests for the board layout codec.

use strictly_shogi::{
    BOARD_SIZE, Board, Cell, EMPTY_LAYOUT, OPENING_LAYOUT, Piece, Side, decode, encode,
};

/// Rotates the board half a turn and hands every piece to the other side.
fn mirrored(board: &Board) -> Board {
    let mut out = Board::empty();
    for (row, rank) in board.rows().iter().enumerate() {
        for (col, cell) in rank.iter().enumerate() {
            let swapped = match cell {
                Cell::Empty => Cell::Empty,
                Cell::Occupied(piece) => {
                    let symbol = if piece.symbol().is_ascii_lowercase() {
                        piece.symbol().to_ascii_uppercase()
                    } else {
                        piece.symbol().to_ascii_lowercase()
                    };
                    if piece.is_promoted() {
                        Cell::Occupied(Piece::promoted(symbol))
                    } else {
                        Cell::Occupied(Piece::new(symbol))
                    }
                }
            };
            out.set(BOARD_SIZE - 1 - row, BOARD_SIZE - 1 - col, swapped)
                .unwrap();
        }
    }
    out
}

fn rank_symbols(board: &Board, row: usize) -> String {
    board.rows()[row]
        .iter()
        .map(|cell| match cell {
            Cell::Empty => ".".to_string(),
            Cell::Occupied(piece) => piece.to_string(),
        })
        .collect()
}

#[test]
fn test_opening_back_ranks() {
    let board = decode(OPENING_LAYOUT);
    assert_eq!(rank_symbols(&board, 0), "lnsgkgsnl");
    assert_eq!(rank_symbols(&board, 1), ".r.....b.");
    assert_eq!(rank_symbols(&board, 2), "ppppppppp");
    assert_eq!(rank_symbols(&board, 6), "PPPPPPPPP");
    assert_eq!(rank_symbols(&board, 7), ".B.....R.");
    assert_eq!(rank_symbols(&board, 8), "LNSGKGSNL");
    assert_eq!(board.piece_count(), 40);
}

#[test]
fn test_opening_symmetric_between_sides() {
    let board = Board::opening();

    // Back ranks swap under row reversal alone.
    let top = rank_symbols(&board, 0);
    let bottom = rank_symbols(&board, BOARD_SIZE - 1);
    assert_eq!(top.to_ascii_uppercase(), bottom);

    // The whole position swaps under a half turn.
    assert_eq!(mirrored(&board), board);
}

#[test]
fn test_opening_piece_sides() {
    let board = Board::opening();
    let white_king = board.get(0, 4).and_then(|c| c.piece()).unwrap();
    let black_king = board.get(8, 4).and_then(|c| c.piece()).unwrap();
    assert_eq!(white_king.side(), Side::White);
    assert_eq!(black_king.side(), Side::Black);
    assert_eq!(white_king.side().opponent(), black_king.side());
}

#[test]
fn test_decode_standard_sfen_with_trailing_fields() {
    let board = decode(&format!("{} b - 1", OPENING_LAYOUT));
    assert_eq!(board, Board::opening());
}

#[test]
fn test_decode_empty_layout() {
    let board = decode(EMPTY_LAYOUT);
    assert_eq!(board, Board::empty());
    assert_eq!(board.rows().len(), BOARD_SIZE);
    assert!(board.rows().iter().all(|rank| rank.len() == BOARD_SIZE));
}

#[test]
fn test_decode_promoted_tokens_occupy_one_cell() {
    let board = decode("+l+n+s1k1+S+N+L/9/9/9/9/9/9/9/9");
    assert_eq!(board.get(0, 0), Some(Cell::Occupied(Piece::promoted('l'))));
    assert_eq!(board.get(0, 2), Some(Cell::Occupied(Piece::promoted('s'))));
    assert_eq!(board.get(0, 3), Some(Cell::Empty));
    assert_eq!(board.get(0, 4), Some(Cell::Occupied(Piece::new('k'))));
    assert_eq!(board.get(0, 8), Some(Cell::Occupied(Piece::promoted('L'))));
}

#[test]
fn test_encode_opening_matches_layout() {
    assert_eq!(encode(&Board::opening()), OPENING_LAYOUT);
    assert_eq!(Board::opening().to_string(), OPENING_LAYOUT);
}

#[test]
fn test_round_trip_midgame_positions() {
    let layouts = [
        OPENING_LAYOUT,
        EMPTY_LAYOUT,
        "ln1g3+Rl/1ks1g4/1pppp1p1p/p4s3/9/2P6/PP1PPPP1P/1B1K2+b2/LNSG1GSNL",
        "8l/7+P1/+r8/9/4k4/9/9/1+b7/K8",
        "+p+p+p+p+p+p+p+p+p/9/9/9/9/9/9/9/+P+P+P+P+P+P+P+P+P",
    ];

    for layout in layouts {
        let board = decode(layout);
        assert_eq!(encode(&board), layout, "layout {layout} should re-encode verbatim");
        assert_eq!(decode(&encode(&board)), board);
    }
}

#[test]
fn test_round_trip_built_board() {
    let mut board = Board::empty();
    board.set(0, 0, Cell::Occupied(Piece::new('l'))).unwrap();
    board.set(4, 4, Cell::Occupied(Piece::promoted('B'))).unwrap();
    board.set(8, 8, Cell::Occupied(Piece::new('K'))).unwrap();
    board.set(3, 7, Cell::Occupied(Piece::promoted('n'))).unwrap();

    assert_eq!(decode(&encode(&board)), board);
}

#[test]
fn test_set_out_of_bounds_rejected() {
    let mut board = Board::empty();
    assert!(board.set(9, 0, Cell::Empty).is_err());
    assert_eq!(board.get(0, 9), None);
}
