//! Error types for the game engine.
//!
//! Every variant is detected before any mutation, so a failed operation
//! always leaves the room exactly as it was.

use crate::room::PlayerName;

/// Errors raised by [`GameRoom`](crate::GameRoom) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The game has started — the roster is frozen and roles are dealt.
    #[error("game has already started")]
    AlreadyStarted,

    /// Another player already holds this name (after normalization).
    #[error("name {0} is already in use")]
    DuplicateName(PlayerName),

    /// Too few roster entries to deal a playable set of roles.
    #[error("need at least 6 players, have {0}")]
    InsufficientPlayers(usize),

    /// The named player is not in the roster.
    #[error("player {0} not found")]
    PlayerNotFound(PlayerName),

    /// The player is in the roster but no longer in play.
    #[error("player {0} is not active")]
    PlayerNotActive(PlayerName),

    /// Only werewolves may vote during the night phase.
    #[error("player {0} cannot vote at night")]
    NightVoteRestricted(PlayerName),

    /// Phase transitions may only be driven by the narrator.
    #[error("player {0} is not the narrator")]
    NotNarrator(PlayerName),
}
