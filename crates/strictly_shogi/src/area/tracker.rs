//! Occupant, identity and instance tracking for a game area.

use crate::games::shogi::{GameAreaSnapshot, GameInstanceId, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// A participant known to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Participant's unique ID.
    pub id: PlayerId,
    /// Display name.
    pub user_name: String,
}

impl Participant {
    /// Creates a participant.
    pub fn new(id: impl Into<PlayerId>, user_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_name: user_name.into(),
        }
    }
}

/// Generic area bookkeeping consumed by the shogi controller.
pub trait AreaTracker {
    /// Refreshes occupants and instance id from a snapshot.
    ///
    /// Returns true when the occupant list changed.
    fn refresh(&mut self, snapshot: &GameAreaSnapshot) -> bool;

    /// The local participant.
    fn our_player(&self) -> &Participant;

    /// Participants currently in the area.
    fn occupants(&self) -> &[Participant];

    /// Instance id of the area's game, if one exists.
    fn instance_id(&self) -> Option<&GameInstanceId>;

    /// Looks up a current occupant by id.
    fn find_occupant(&self, id: &str) -> Option<&Participant> {
        self.occupants().iter().find(|p| p.id == id)
    }
}

/// Default [`AreaTracker`] backed by a roster of known participants.
#[derive(Debug, Clone)]
pub struct OccupantTracker {
    our_player: Participant,
    roster: HashMap<PlayerId, Participant>,
    occupants: Vec<Participant>,
    instance_id: Option<GameInstanceId>,
}

impl OccupantTracker {
    /// Creates a tracker for the given local participant.
    #[instrument(fields(player_id = %our_player.id))]
    pub fn new(our_player: Participant) -> Self {
        let mut roster = HashMap::new();
        roster.insert(our_player.id.clone(), our_player.clone());
        Self {
            our_player,
            roster,
            occupants: Vec::new(),
            instance_id: None,
        }
    }

    /// Adds or replaces a participant in the roster.
    #[instrument(skip(self), fields(player_id = %participant.id))]
    pub fn register(&mut self, participant: Participant) {
        self.roster.insert(participant.id.clone(), participant);
    }

    fn resolve(&self, id: &PlayerId) -> Participant {
        self.roster.get(id).cloned().unwrap_or_else(|| {
            debug!(player_id = %id, "Occupant not in roster");
            Participant::new(id.clone(), id.clone())
        })
    }
}

impl AreaTracker for OccupantTracker {
    #[instrument(skip(self, snapshot), fields(area_id = %snapshot.id))]
    fn refresh(&mut self, snapshot: &GameAreaSnapshot) -> bool {
        self.instance_id = snapshot.game.as_ref().map(|game| game.id.clone());

        let occupants: Vec<Participant> = snapshot
            .occupants
            .iter()
            .map(|id| self.resolve(id))
            .collect();

        if occupants == self.occupants {
            return false;
        }

        info!(count = occupants.len(), "Occupants changed");
        self.occupants = occupants;
        true
    }

    fn our_player(&self) -> &Participant {
        &self.our_player
    }

    fn occupants(&self) -> &[Participant] {
        &self.occupants
    }

    fn instance_id(&self) -> Option<&GameInstanceId> {
        self.instance_id.as_ref()
    }
}
