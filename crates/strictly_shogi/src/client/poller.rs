//! Drives a controller by polling the server for snapshots.

use super::http_client::SnapshotSource;
use crate::area::{AreaTracker, OccupantTracker, ShogiAreaController, TransportError};
use std::sync::Arc;
use tokio::time::{Duration, sleep};
use tracing::{info, instrument, warn};

/// Polls a snapshot source and feeds every snapshot to the controller.
pub struct SnapshotPoller<T = OccupantTracker> {
    source: Arc<dyn SnapshotSource>,
    controller: ShogiAreaController<T>,
    poll_interval: Duration,
}

impl<T: AreaTracker> SnapshotPoller<T> {
    /// Creates a poller.
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        controller: ShogiAreaController<T>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            source,
            controller,
            poll_interval,
        }
    }

    /// Returns the controller.
    pub fn controller(&self) -> &ShogiAreaController<T> {
        &self.controller
    }

    /// Returns the controller mutably.
    pub fn controller_mut(&mut self) -> &mut ShogiAreaController<T> {
        &mut self.controller
    }

    /// Fetches and applies a single snapshot.
    #[instrument(skip(self))]
    pub async fn poll_once(&mut self) -> Result<(), TransportError> {
        let snapshot = self.source.fetch_snapshot().await?;
        self.controller.apply_snapshot(&snapshot);
        Ok(())
    }

    /// Polls forever. Failed fetches are logged and retried next tick.
    #[instrument(skip(self), fields(interval_ms = self.poll_interval.as_millis() as u64))]
    pub async fn run(&mut self) {
        info!("Starting snapshot polling");
        loop {
            if let Err(e) = self.poll_once().await {
                warn!(error = %e, "Failed to poll server");
            }
            sleep(self.poll_interval).await;
        }
    }
}
