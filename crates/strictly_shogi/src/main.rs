//! Strictly Shogi - command-line client
//!
//! Mirrors a shogi area from the server and sends player commands.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use strictly_shogi::{
    AreaEvent, ClientConfig, HttpAreaClient, OccupantTracker, ShogiAreaController,
    SnapshotPoller,
};
use tokio::time::Duration;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_file(&cli.config)?.with_env_overrides();
    let mut poller = build_poller(&config);

    match cli.command {
        Command::Watch => watch(&mut poller).await,
        Command::Join => Ok(poller.controller().join_game().await?),
        Command::Leave => {
            poller.poll_once().await?;
            Ok(poller.controller().leave_game().await?)
        }
        Command::Start => {
            poller.poll_once().await?;
            Ok(poller.controller().start_game().await?)
        }
        Command::Move {
            from_row,
            from_col,
            to_row,
            to_col,
        } => {
            poller.poll_once().await?;
            let pending = poller
                .controller()
                .make_move(from_row, from_col, to_row, to_col);
            Ok(pending.await?)
        }
    }
}

/// Wires the HTTP client, tracker and controller together.
fn build_poller(config: &ClientConfig) -> SnapshotPoller {
    let client = Arc::new(HttpAreaClient::from_config(config));

    let mut tracker = OccupantTracker::new(config.participant());
    for participant in config.roster() {
        tracker.register(participant.clone());
    }

    let controller = ShogiAreaController::new(tracker, client.clone());
    SnapshotPoller::new(
        client,
        controller,
        Duration::from_millis(*config.poll_interval_ms()),
    )
}

/// Follows the area until interrupted, printing every board change.
#[instrument(skip(poller))]
async fn watch(poller: &mut SnapshotPoller) -> Result<()> {
    let mut events = poller.controller_mut().subscribe();

    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                AreaEvent::BoardChanged(board) => println!("{}\n", board.display()),
                AreaEvent::TurnChanged(true) => info!("Your turn"),
                AreaEvent::TurnChanged(false) => info!("Waiting for opponent"),
                AreaEvent::OccupantsChanged(occupants) => {
                    let names: Vec<_> = occupants.iter().map(|p| p.user_name.as_str()).collect();
                    info!(occupants = ?names, "Occupants changed");
                }
            }
        }
    });

    // An opening position matches the initial cache and raises no event.
    match poller.poll_once().await {
        Ok(()) => print_position(poller.controller()),
        Err(e) => warn!(error = %e, "Initial poll failed"),
    }

    tokio::select! {
        _ = poller.run() => {}
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                warn!(error = %e, "Failed to listen for interrupt");
            }
            info!("Stopping watch");
        }
    }

    printer.abort();
    Ok(())
}

/// Prints the cached board and, for a finished game, its outcome.
fn print_position(controller: &ShogiAreaController) {
    println!("{}\n", controller.board().display());

    let Some(state) = controller.game_state() else {
        info!("No game in this area");
        return;
    };
    info!(status = %state.status, moves = state.num_moves, "Current game");
    if let Some(outcome) = state.outcome() {
        if outcome.is_draw() {
            info!("Game ended in a draw");
        } else if let Some(winner) = outcome.winner() {
            info!(winner = %winner, "Game over");
        }
    }
}
