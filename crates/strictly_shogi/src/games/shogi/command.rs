//! Outbound commands understood by the game server.

use super::state::GameInstanceId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A board coordinate. Not range-checked locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row, 0 being the topmost rank.
    pub row: u8,
    /// Column, 0 being the leftmost file.
    pub col: u8,
}

impl Coordinate {
    /// Creates a coordinate.
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// A move from one square to another.
///
/// Legality is decided by the server alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShogiMove {
    /// Origin square.
    pub from: Coordinate,
    /// Destination square.
    pub to: Coordinate,
}

impl ShogiMove {
    /// Creates a move.
    #[instrument]
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for ShogiMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.from.row, self.from.col, self.to.row, self.to.col
        )
    }
}

/// Command sent to the server for an area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::AsRefStr)]
#[serde(tag = "type")]
pub enum GameCommand {
    /// Join the area's game, creating it if needed.
    JoinGame,
    /// Leave the given game instance.
    LeaveGame {
        /// Target instance.
        #[serde(rename = "gameID")]
        game_id: GameInstanceId,
    },
    /// Start a game that is waiting to start.
    StartGame {
        /// Target instance.
        #[serde(rename = "gameID")]
        game_id: GameInstanceId,
    },
    /// Play a move.
    GameMove {
        /// Target instance.
        #[serde(rename = "gameID")]
        game_id: GameInstanceId,
        /// The move to play.
        #[serde(rename = "move")]
        shogi_move: ShogiMove,
    },
}
