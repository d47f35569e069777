//! Snapshot types pushed by the game server.
//!
//! These mirror the server's JSON model and are never edited locally.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Unique identifier for a participant.
pub type PlayerId = String;

/// Unique identifier for a game instance.
pub type GameInstanceId = String;

/// Unique identifier for a game area.
pub type AreaId = String;

/// Coarse game progress tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Fewer than two players have joined.
    #[default]
    WaitingForPlayers,
    /// Both roles are filled, waiting for a start command.
    WaitingToStart,
    /// Moves are being played.
    InProgress,
    /// The game has ended.
    Over,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The identified player won.
    Winner(PlayerId),
    /// The game ended without a winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&PlayerId> {
        match self {
            Outcome::Winner(id) => Some(id),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(id) => write!(f, "Player {} wins", id),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Authoritative shogi state as sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShogiGameState {
    /// Serialized position; the first field is the board layout.
    pub board: String,
    /// Number of moves played so far.
    pub num_moves: u32,
    /// First role-holder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white: Option<PlayerId>,
    /// Second role-holder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub black: Option<PlayerId>,
    /// Winner, once the game is over and not drawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerId>,
    /// Current phase.
    pub status: GameStatus,
}

impl ShogiGameState {
    /// Returns the player whose turn it is, by identifier.
    ///
    /// Black moves on even move counts and white on odd ones. Nobody moves
    /// unless the game is in progress with both roles filled.
    #[instrument(skip(self), fields(status = %self.status, num_moves = self.num_moves))]
    pub fn turn_holder(&self) -> Option<&PlayerId> {
        if self.status != GameStatus::InProgress {
            return None;
        }
        let (white, black) = (self.white.as_ref()?, self.black.as_ref()?);
        match super::Side::to_move(self.num_moves) {
            super::Side::Black => Some(black),
            super::Side::White => Some(white),
        }
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.status != GameStatus::Over {
            return None;
        }
        Some(match &self.winner {
            Some(id) => Outcome::Winner(id.clone()),
            None => Outcome::Draw,
        })
    }
}

/// A running game instance within an area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInstance {
    /// Instance identifier, used to tag outbound commands.
    pub id: GameInstanceId,
    /// Participants who joined the game.
    #[serde(default)]
    pub players: Vec<PlayerId>,
    /// Current game state.
    pub state: ShogiGameState,
}

/// One complete push of area state from the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAreaSnapshot {
    /// Area identifier.
    pub id: AreaId,
    /// Participants currently in the area.
    #[serde(default)]
    pub occupants: Vec<PlayerId>,
    /// The game, once one has been created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<GameInstance>,
}
