//! HTTP client for a game area on the server.

use crate::area::{CommandTransport, TransportError};
use crate::config::ClientConfig;
use crate::games::shogi::{AreaId, GameAreaSnapshot, GameCommand, PlayerId};
use tracing::{debug, info, instrument, warn};

/// Header carrying the id of the player issuing a command.
pub const PLAYER_ID_HEADER: &str = "x-player-id";

/// Source of area snapshots.
#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetches the current snapshot of the area.
    async fn fetch_snapshot(&self) -> Result<GameAreaSnapshot, TransportError>;
}

/// HTTP client bound to one area and one player.
#[derive(Debug, Clone)]
pub struct HttpAreaClient {
    base_url: String,
    area_id: AreaId,
    player_id: PlayerId,
    client: reqwest::Client,
}

impl HttpAreaClient {
    /// Creates a client for the given server, area and player.
    #[instrument(
        skip_all,
        fields(base_url = %base_url, area_id = %area_id, player_id = %player_id)
    )]
    pub fn new(base_url: String, area_id: AreaId, player_id: PlayerId) -> Self {
        info!("Creating HTTP area client");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            area_id,
            player_id,
            client: reqwest::Client::new(),
        }
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.server_url().clone(),
            config.area_id().clone(),
            config.player_id().clone(),
        )
    }

    /// URL of the area resource.
    pub fn area_url(&self) -> String {
        format!("{}/api/areas/{}", self.base_url, self.area_id)
    }

    /// URL commands are posted to.
    pub fn commands_url(&self) -> String {
        format!("{}/commands", self.area_url())
    }
}

/// Reads a response body, turning non-success statuses into errors.
async fn read_body(response: reqwest::Response, context: &str) -> Result<String, TransportError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        warn!(status = %status, body = %body, context, "Server rejected request");
        return Err(TransportError::new(format!(
            "{} failed: {} - {}",
            context, status, body
        )));
    }
    Ok(body)
}

#[async_trait::async_trait]
impl SnapshotSource for HttpAreaClient {
    #[instrument(skip(self), fields(area_id = %self.area_id))]
    async fn fetch_snapshot(&self) -> Result<GameAreaSnapshot, TransportError> {
        let response = self.client.get(self.area_url()).send().await?;
        let body = read_body(response, "Snapshot request").await?;
        let snapshot: GameAreaSnapshot = serde_json::from_str(&body)?;
        debug!(
            occupants = snapshot.occupants.len(),
            has_game = snapshot.game.is_some(),
            "Fetched snapshot"
        );
        Ok(snapshot)
    }
}

#[async_trait::async_trait]
impl CommandTransport for HttpAreaClient {
    #[instrument(skip(self, command), fields(area_id = %self.area_id, command = command.as_ref()))]
    async fn send_command(&self, command: GameCommand) -> Result<(), TransportError> {
        info!("Sending command to server");
        let response = self
            .client
            .post(self.commands_url())
            .header(PLAYER_ID_HEADER, &self.player_id)
            .json(&command)
            .send()
            .await?;
        let body = read_body(response, "Command").await?;
        debug!(response = %body, "Command acknowledged");
        Ok(())
    }
}
