//! Client-side mirror of a shogi game area.
//!
//! The controller caches the decoded board of the last snapshot, derives
//! turn and role facts from the raw server state, and turns player intents
//! into commands after checking the game phase locally.

use super::error::ControllerError;
use super::events::{EventHub, Subscription, SubscriptionId};
use super::tracker::{AreaTracker, OccupantTracker, Participant};
use super::transport::CommandTransport;
use crate::games::shogi::{
    Board, Coordinate, GameAreaSnapshot, GameCommand, GameStatus, Outcome, ShogiGameState,
    ShogiMove, Side, decode,
};
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Pending outbound command.
///
/// Owns everything it needs, so snapshots can be applied while it is awaited.
pub type CommandFuture = BoxFuture<'static, Result<(), ControllerError>>;

/// Mirror of one shogi area, fed by server snapshots.
pub struct ShogiAreaController<T = OccupantTracker> {
    tracker: T,
    transport: Arc<dyn CommandTransport>,
    game: Option<ShogiGameState>,
    board: Board,
    events: EventHub,
}

impl<T: std::fmt::Debug> std::fmt::Debug for ShogiAreaController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShogiAreaController")
            .field("tracker", &self.tracker)
            .field("game", &self.game)
            .field("board", &self.board)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl<T: AreaTracker> ShogiAreaController<T> {
    /// Creates a controller showing the opening position.
    #[instrument(skip_all)]
    pub fn new(tracker: T, transport: Arc<dyn CommandTransport>) -> Self {
        info!(player_id = %tracker.our_player().id, "Creating shogi area controller");
        Self {
            tracker,
            transport,
            game: None,
            board: Board::opening(),
            events: EventHub::new(),
        }
    }

    /// Registers a subscriber for area events.
    pub fn subscribe(&mut self) -> Subscription {
        self.events.subscribe()
    }

    /// Removes a subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Returns the area tracker.
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Returns the tracker mutably, e.g. to register roster entries.
    pub fn tracker_mut(&mut self) -> &mut T {
        &mut self.tracker
    }

    /// Returns the cached board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the raw game state of the last snapshot.
    pub fn game_state(&self) -> Option<&ShogiGameState> {
        self.game.as_ref()
    }

    /// Current phase; `WaitingForPlayers` when there is no game.
    pub fn status(&self) -> GameStatus {
        self.game.as_ref().map(|g| g.status).unwrap_or_default()
    }

    /// Number of moves played.
    pub fn move_count(&self) -> u32 {
        self.game.as_ref().map_or(0, |g| g.num_moves)
    }

    /// White role-holder, if present in the area.
    pub fn white(&self) -> Option<&Participant> {
        self.resolve(self.game.as_ref()?.white.as_deref()?)
    }

    /// Black role-holder, if present in the area.
    pub fn black(&self) -> Option<&Participant> {
        self.resolve(self.game.as_ref()?.black.as_deref()?)
    }

    /// Winner, if any and present in the area.
    pub fn winner(&self) -> Option<&Participant> {
        self.resolve(self.game.as_ref()?.winner.as_deref()?)
    }

    /// Outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.game.as_ref()?.outcome()
    }

    /// True if the local player holds either role.
    pub fn is_player(&self) -> bool {
        self.game_piece().is_ok()
    }

    /// Side held by the local player.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::PlayerNotInGame`] if the local player holds
    /// neither role.
    #[instrument(skip(self))]
    pub fn game_piece(&self) -> Result<Side, ControllerError> {
        let our_id = &self.tracker.our_player().id;
        let game = self.game.as_ref().ok_or(ControllerError::PlayerNotInGame)?;
        if game.white.as_ref() == Some(our_id) {
            Ok(Side::White)
        } else if game.black.as_ref() == Some(our_id) {
            Ok(Side::Black)
        } else {
            Err(ControllerError::PlayerNotInGame)
        }
    }

    /// Participant whose turn it is, if present in the area.
    pub fn whose_turn(&self) -> Option<&Participant> {
        self.resolve(self.game.as_ref()?.turn_holder()?)
    }

    /// True if it is currently the local player's turn.
    pub fn is_our_turn(&self) -> bool {
        self.game
            .as_ref()
            .and_then(|g| g.turn_holder())
            .is_some_and(|id| *id == self.tracker.our_player().id)
    }

    /// True while a game is in progress.
    pub fn is_active(&self) -> bool {
        self.status() == GameStatus::InProgress
    }

    /// True if nobody is in the area.
    pub fn is_empty(&self) -> bool {
        self.tracker.occupants().is_empty()
    }

    fn resolve(&self, id: &str) -> Option<&Participant> {
        self.tracker.find_occupant(id)
    }

    /// Applies one server snapshot and notifies subscribers of changes.
    ///
    /// Events for one snapshot are queued in a fixed order: occupants,
    /// board, turn. Each is queued after the state it describes is stored.
    #[instrument(skip(self, snapshot), fields(area_id = %snapshot.id))]
    pub fn apply_snapshot(&mut self, snapshot: &GameAreaSnapshot) {
        let was_our_turn = self.is_our_turn();

        if self.tracker.refresh(snapshot) {
            self.events.occupants_changed(self.tracker.occupants());
        }

        self.game = snapshot.game.as_ref().map(|game| game.state.clone());

        if let Some(state) = &self.game {
            let board = decode(&state.board);
            if board != self.board {
                info!(
                    status = %state.status,
                    num_moves = state.num_moves,
                    "Board changed"
                );
                self.board = board;
                self.events.board_changed(&self.board);
            } else {
                debug!("Board unchanged");
            }
        }

        let is_our_turn = self.is_our_turn();
        if is_our_turn != was_our_turn {
            info!(is_our_turn, "Turn changed");
            self.events.turn_changed(is_our_turn);
        }
    }

    /// Asks the server to create or join the area's game.
    #[instrument(skip(self))]
    pub fn join_game(&self) -> CommandFuture {
        self.send(Ok(GameCommand::JoinGame))
    }

    /// Leaves the current game instance.
    ///
    /// Fails with [`ControllerError::NoGameToLeave`] if there is no instance.
    #[instrument(skip(self))]
    pub fn leave_game(&self) -> CommandFuture {
        let command = match self.tracker.instance_id() {
            Some(id) => Ok(GameCommand::LeaveGame {
                game_id: id.clone(),
            }),
            None => {
                warn!("Leave requested without a game instance");
                Err(ControllerError::NoGameToLeave)
            }
        };
        self.send(command)
    }

    /// Starts a game that is waiting to start.
    ///
    /// The local phase is not changed; the next snapshot reflects the start.
    /// Fails with [`ControllerError::NoGameStartable`] without a network
    /// call if there is no instance or the phase is not `WaitingToStart`.
    #[instrument(skip(self), fields(status = %self.status()))]
    pub fn start_game(&self) -> CommandFuture {
        let command = match (self.tracker.instance_id(), self.status()) {
            (Some(id), GameStatus::WaitingToStart) => Ok(GameCommand::StartGame {
                game_id: id.clone(),
            }),
            _ => {
                warn!("Start requested in wrong phase");
                Err(ControllerError::NoGameStartable)
            }
        };
        self.send(command)
    }

    /// Sends a move. Coordinates are forwarded without any legality check.
    ///
    /// Fails with [`ControllerError::NoGameInProgress`] without a network
    /// call if there is no instance or the phase is not `InProgress`.
    #[instrument(skip(self), fields(status = %self.status()))]
    pub fn make_move(&self, from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> CommandFuture {
        let command = match (self.tracker.instance_id(), self.status()) {
            (Some(id), GameStatus::InProgress) => Ok(GameCommand::GameMove {
                game_id: id.clone(),
                shogi_move: ShogiMove::new(
                    Coordinate::new(from_row, from_col),
                    Coordinate::new(to_row, to_col),
                ),
            }),
            _ => {
                warn!("Move requested while no game is in progress");
                Err(ControllerError::NoGameInProgress)
            }
        };
        self.send(command)
    }

    fn send(&self, command: Result<GameCommand, ControllerError>) -> CommandFuture {
        let transport = Arc::clone(&self.transport);
        async move {
            let command = command?;
            debug!(command = command.as_ref(), "Sending command");
            transport.send_command(command).await?;
            Ok(())
        }
        .boxed()
    }
}
