//! Network client: HTTP transport and snapshot polling.

mod http_client;
mod poller;

pub use http_client::{HttpAreaClient, PLAYER_ID_HEADER, SnapshotSource};
pub use poller::SnapshotPoller;
