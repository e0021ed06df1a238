//! Lupine: a single-room Werewolf/Mafia game engine.
//!
//! The engine is a pure state machine over [`GameRoom`]: roster and role
//! management, vote tallying, day/night phase transitions, and win
//! detection. Every operation is synchronous and free of I/O; the only
//! randomness is room-code generation and the role shuffle at game start.
//!
//! The engine performs no internal locking. A caller that shares one room
//! across tasks must serialize mutating operations itself — the
//! `lupine-room` crate provides a per-room actor that does exactly that.
//!
//! # Key types
//!
//! - [`GameRoom`] — the aggregate root every operation mutates
//! - [`Role`], [`Phase`], [`Winner`] — closed state enums
//! - [`GameError`] — typed failures, raised before any mutation

mod error;
mod phase;
mod roles;
mod room;
mod vote;

pub use error::GameError;
pub use phase::{Clock, Elimination, Phase, Winner};
pub use roles::{MIN_PLAYERS, Role};
pub use room::{GameRoom, PlayerName, PlayerRecord, RoomCode};
