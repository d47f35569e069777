mod codec;
mod command;
mod state;
mod types;

pub use codec::{RANK_DELIMITER, RankScanner, RankToken, decode, encode};
pub use command::{Coordinate, GameCommand, ShogiMove};
pub use state::{
    AreaId, GameAreaSnapshot, GameInstance, GameInstanceId, GameStatus, Outcome, PlayerId,
    ShogiGameState,
};
pub use types::{
    BOARD_SIZE, Board, Cell, EMPTY_LAYOUT, OPENING_LAYOUT, PROMOTION_MARKER, Piece, Side,
};
