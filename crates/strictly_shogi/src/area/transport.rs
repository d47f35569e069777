//! Outbound command channel to the game server.

use super::error::TransportError;
use crate::games::shogi::GameCommand;

/// Delivers commands to the server and reports the acknowledgement.
#[async_trait::async_trait]
pub trait CommandTransport: Send + Sync {
    /// Sends one command, resolving once the server has acknowledged it.
    async fn send_command(&self, command: GameCommand) -> Result<(), TransportError>;
}
