//! Strictly Shogi - client-side mirror of a server-authoritative shogi game.
//!
//! The server pushes complete snapshots of a game area; this library keeps a
//! decoded copy of the board, tells subscribers when something they can see
//! changed, and checks the game phase before sending player commands.
//!
//! # Architecture
//!
//! - **Games**: board codec, snapshot model and command payloads
//! - **Area**: the [`ShogiAreaController`], its event hub and trackers
//! - **Client**: HTTP transport and snapshot polling
//! - **Config**: TOML client configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use strictly_shogi::{
//!     AreaEvent, HttpAreaClient, OccupantTracker, Participant, ShogiAreaController,
//!     SnapshotSource,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = Arc::new(HttpAreaClient::new(
//!     "http://127.0.0.1:3000".to_string(),
//!     "dojo".to_string(),
//!     "alice".to_string(),
//! ));
//! let tracker = OccupantTracker::new(Participant::new("alice", "Alice"));
//! let mut controller = ShogiAreaController::new(tracker, client.clone());
//! let mut events = controller.subscribe();
//!
//! controller.apply_snapshot(&client.fetch_snapshot().await?);
//! while let Some(AreaEvent::BoardChanged(board)) = events.try_recv() {
//!     println!("{}", board.display());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod area;
mod client;
mod config;
mod games;

// Crate-level exports - Area controller
pub use area::{
    AreaEvent, AreaTracker, CommandFuture, CommandTransport, ControllerError, EventHub,
    OccupantTracker, Participant, ShogiAreaController, Subscription, SubscriptionId,
    TransportError,
};

// Crate-level exports - Network client
pub use client::{HttpAreaClient, PLAYER_ID_HEADER, SnapshotPoller, SnapshotSource};

// Crate-level exports - Configuration
pub use config::{ClientConfig, ConfigError, SERVER_URL_ENV};

// Crate-level exports - Shogi types
pub use games::shogi::{
    AreaId, BOARD_SIZE, Board, Cell, Coordinate, EMPTY_LAYOUT, GameAreaSnapshot, GameCommand,
    GameInstance, GameInstanceId, GameStatus, OPENING_LAYOUT, Outcome, PROMOTION_MARKER, Piece,
    PlayerId, RANK_DELIMITER, RankScanner, RankToken, ShogiGameState, ShogiMove, Side, decode,
    encode,
};
