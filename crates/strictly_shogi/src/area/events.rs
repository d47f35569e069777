//! Publish/subscribe hub for area notifications.

use super::tracker::Participant;
use crate::games::shogi::Board;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Notification raised by the area controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaEvent {
    /// The set of participants in the area changed.
    OccupantsChanged(Vec<Participant>),
    /// The cached board was replaced.
    BoardChanged(Board),
    /// Whether it is the local player's turn flipped.
    TurnChanged(bool),
}

/// Identifier of a registered subscriber.
pub type SubscriptionId = u64;

/// Handle returned by [`EventHub::subscribe`].
///
/// Dropping the handle unsubscribes on the next dispatch; pass
/// [`Subscription::id`] to `unsubscribe` to detach immediately.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    events: mpsc::UnboundedReceiver<AreaEvent>,
}

impl Subscription {
    /// Returns the subscriber id.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Waits for the next event. Returns `None` once unsubscribed.
    pub async fn recv(&mut self) -> Option<AreaEvent> {
        self.events.recv().await
    }

    /// Returns the next queued event without waiting.
    pub fn try_recv(&mut self) -> Option<AreaEvent> {
        self.events.try_recv().ok()
    }

    /// Takes every queued event.
    pub fn drain(&mut self) -> Vec<AreaEvent> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}

/// Registry of subscribers with one typed dispatch per event kind.
#[derive(Debug, Default)]
pub struct EventHub {
    next_id: SubscriptionId,
    subscribers: Vec<(SubscriptionId, mpsc::UnboundedSender<AreaEvent>)>,
}

impl EventHub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber.
    #[instrument(skip(self))]
    pub fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, tx));
        debug!(subscription_id = id, "Subscriber registered");
        Subscription { id, events: rx }
    }

    /// Removes a subscriber. Returns false if it was not registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        before != self.subscribers.len()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Announces a new occupant list.
    pub fn occupants_changed(&mut self, occupants: &[Participant]) {
        self.dispatch(AreaEvent::OccupantsChanged(occupants.to_vec()));
    }

    /// Announces a new board.
    pub fn board_changed(&mut self, board: &Board) {
        self.dispatch(AreaEvent::BoardChanged(board.clone()));
    }

    /// Announces a turn ownership change.
    pub fn turn_changed(&mut self, is_our_turn: bool) {
        self.dispatch(AreaEvent::TurnChanged(is_our_turn));
    }

    fn dispatch(&mut self, event: AreaEvent) {
        self.subscribers.retain(|(id, tx)| {
            let delivered = tx.send(event.clone()).is_ok();
            if !delivered {
                debug!(subscription_id = *id, "Pruning closed subscriber");
            }
            delivered
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_reaches_every_subscriber() {
        let mut hub = EventHub::new();
        let mut first = hub.subscribe();
        let mut second = hub.subscribe();

        hub.turn_changed(true);

        assert_eq!(first.drain(), vec![AreaEvent::TurnChanged(true)]);
        assert_eq!(second.drain(), vec![AreaEvent::TurnChanged(true)]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut hub = EventHub::new();
        let mut sub = hub.subscribe();

        assert!(hub.unsubscribe(sub.id()));
        assert!(!hub.unsubscribe(sub.id()));
        hub.board_changed(&Board::empty());

        assert_eq!(sub.try_recv(), None);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_dropped_subscription_is_pruned() {
        let mut hub = EventHub::new();
        let sub = hub.subscribe();
        let _kept = hub.subscribe();
        drop(sub);

        hub.turn_changed(false);

        assert_eq!(hub.subscriber_count(), 1);
    }
}
