//! Error types for the room actor layer.

use lupine_engine::{GameError, RoomCode};

/// Errors surfaced by [`RoomHandle`](crate::RoomHandle) operations.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// The engine rejected the operation; the room state is unchanged.
    #[error(transparent)]
    Game(#[from] GameError),

    /// The room's command channel is closed — the actor is gone.
    #[error("room {0} is unavailable")]
    Unavailable(RoomCode),
}
