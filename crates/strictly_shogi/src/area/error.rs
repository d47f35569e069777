//! Error types for the area controller.

use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// Transport failure with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Transport error: {} at {}:{}", message, file, line)]
pub struct TransportError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TransportError {
    /// Creates a new transport error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        warn!(error_message = %message, "Transport error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("HTTP error: {}", err))
    }
}

impl From<serde_json::Error> for TransportError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Error raised by controller queries and commands.
///
/// Precondition failures are raised before any network call and fail the
/// same way on retry until the game state changes.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ControllerError {
    /// No game exists or it is not waiting to start.
    #[display("No game startable")]
    NoGameStartable,

    /// No game exists or it is not in progress.
    #[display("No game in progress")]
    NoGameInProgress,

    /// No game instance exists to leave.
    #[display("No game to leave")]
    NoGameToLeave,

    /// The local player holds neither role.
    #[display("Player is not in game")]
    PlayerNotInGame,

    /// The transport rejected or failed to deliver a command.
    #[display("{}", _0)]
    Transport(TransportError),
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControllerError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TransportError> for ControllerError {
    fn from(err: TransportError) -> Self {
        ControllerError::Transport(err)
    }
}
