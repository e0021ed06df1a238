//! A scripted 8-player game played through a room actor.
//!
//! The lone werewolf picks off one villager per day until only wolves
//! remain. Run with `RUST_LOG=info` (the default here) to watch the
//! actor's lifecycle events.

use lupine_engine::PlayerName;
use lupine_room::{RoomError, spawn_room};
use tracing_subscriber::EnvFilter;

const NARRATOR: &str = "MOD";
const PLAYERS: [&str; 7] = ["Avery", "Blair", "Casey", "Drew", "Emery", "Finley", "Gray"];

#[tokio::main]
async fn main() -> Result<(), RoomError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let handle = spawn_room(16);
    tracing::info!(room = %handle.code(), "created room");

    handle.join(NARRATOR).await?;
    for player in PLAYERS {
        handle.join(player).await?;
    }
    handle.start().await?;

    let room = handle.snapshot().await?;
    let wolf = room
        .werewolves()
        .iter()
        .next()
        .expect("an 8-player game seats one werewolf")
        .clone();
    let villagers: Vec<PlayerName> = room
        .active_players()
        .iter()
        .filter(|p| **p != wolf)
        .cloned()
        .collect();

    for victim in &villagers {
        handle.advance_to_day(NARRATOR).await?;
        handle.vote(wolf.as_str(), victim.as_str()).await?;

        let report = handle.advance_to_night(NARRATOR).await?;
        if let Some(winner) = report.verdict {
            tracing::info!(%winner, day = handle.snapshot().await?.day(), "scripted game over");
            handle.shutdown().await?;
            return Ok(());
        }
    }

    unreachable!("the last elimination always ends the game");
}
