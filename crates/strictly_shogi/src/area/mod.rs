//! Game area mirroring: snapshot sync, events and commands.

mod controller;
mod error;
mod events;
mod tracker;
mod transport;

pub use controller::{CommandFuture, ShogiAreaController};
pub use error::{ControllerError, TransportError};
pub use events::{AreaEvent, EventHub, Subscription, SubscriptionId};
pub use tracker::{AreaTracker, OccupantTracker, Participant};
pub use transport::CommandTransport;
