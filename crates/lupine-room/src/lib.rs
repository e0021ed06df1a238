//! Per-room actor wrapper for the Lupine engine.
//!
//! The engine performs no synchronization of its own. This crate
//! provides the single-writer boundary its contract requires: each room
//! lives inside its own Tokio task that exclusively owns the
//! [`GameRoom`](lupine_engine::GameRoom), and the outside world drives
//! it through a command channel. The actor also discharges the engine's
//! documented caller contract — running the win check after every phase
//! transition — so shells built on [`RoomHandle`] can never forget it.
//!
//! # Key types
//!
//! - [`RoomHandle`] — cheap-to-clone handle for driving a room actor
//! - [`PhaseReport`] — elimination plus verdict from a phase transition
//! - [`RoomError`] — engine errors plus actor availability

mod actor;
mod error;

pub use actor::{PhaseReport, RoomHandle, spawn_room};
pub use error::RoomError;
