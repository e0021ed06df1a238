//! Room actor: an isolated Tokio task that owns one game room.
//!
//! Each room runs in its own task, communicating with the outside world
//! through an mpsc channel — no shared mutable state, just message
//! passing. Mutating commands carry a oneshot reply channel.

use lupine_engine::{Elimination, GameError, GameRoom, PlayerName, RoomCode, Winner};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};

use crate::RoomError;

/// The outcome of a phase transition: who fell, and whether the game is
/// over. The actor runs [`GameRoom::check_game_status`] immediately
/// after every transition, so callers get both answers in one reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseReport {
    pub eliminated: Option<Elimination>,
    pub verdict: Option<Winner>,
}

/// Commands sent to a room actor through its channel.
enum RoomCommand {
    Join {
        name: String,
        reply: oneshot::Sender<Result<PlayerName, GameError>>,
    },
    Start {
        reply: oneshot::Sender<Result<(), GameError>>,
    },
    Vote {
        voter: String,
        target: String,
        reply: oneshot::Sender<Result<(), GameError>>,
    },
    AdvanceToDay {
        acting: String,
        reply: oneshot::Sender<Result<PhaseReport, GameError>>,
    },
    AdvanceToNight {
        acting: String,
        reply: oneshot::Sender<Result<PhaseReport, GameError>>,
    },
    Snapshot {
        reply: oneshot::Sender<GameRoom>,
    },
    Shutdown,
}

/// Handle to a running room actor.
///
/// Cheap to clone — just an `mpsc::Sender` wrapper. Every clone talks
/// to the same room, and the channel serializes all mutations.
#[derive(Clone)]
pub struct RoomHandle {
    code: RoomCode,
    sender: mpsc::Sender<RoomCommand>,
}

impl RoomHandle {
    /// The room's five-letter code, known without asking the actor.
    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    /// Adds a player to the roster.
    pub async fn join(&self, name: &str) -> Result<PlayerName, RoomError> {
        let (reply, rx) = oneshot::channel();
        self.send(RoomCommand::Join {
            name: name.to_owned(),
            reply,
        })
        .await?;
        Ok(rx.await.map_err(|_| self.unavailable())??)
    }

    /// Deals roles and opens the first night.
    pub async fn start(&self) -> Result<(), RoomError> {
        let (reply, rx) = oneshot::channel();
        self.send(RoomCommand::Start { reply }).await?;
        Ok(rx.await.map_err(|_| self.unavailable())??)
    }

    /// Casts `voter`'s vote against `target`.
    pub async fn vote(&self, voter: &str, target: &str) -> Result<(), RoomError> {
        let (reply, rx) = oneshot::channel();
        self.send(RoomCommand::Vote {
            voter: voter.to_owned(),
            target: target.to_owned(),
            reply,
        })
        .await?;
        Ok(rx.await.map_err(|_| self.unavailable())??)
    }

    /// Narrator-gated night → day transition.
    pub async fn advance_to_day(&self, acting: &str) -> Result<PhaseReport, RoomError> {
        let (reply, rx) = oneshot::channel();
        self.send(RoomCommand::AdvanceToDay {
            acting: acting.to_owned(),
            reply,
        })
        .await?;
        Ok(rx.await.map_err(|_| self.unavailable())??)
    }

    /// Narrator-gated day → night transition.
    pub async fn advance_to_night(&self, acting: &str) -> Result<PhaseReport, RoomError> {
        let (reply, rx) = oneshot::channel();
        self.send(RoomCommand::AdvanceToNight {
            acting: acting.to_owned(),
            reply,
        })
        .await?;
        Ok(rx.await.map_err(|_| self.unavailable())??)
    }

    /// Returns a full copy of the room state — plain serializable data
    /// for the surrounding shell to persist or display.
    pub async fn snapshot(&self) -> Result<GameRoom, RoomError> {
        let (reply, rx) = oneshot::channel();
        self.send(RoomCommand::Snapshot { reply }).await?;
        rx.await.map_err(|_| self.unavailable())
    }

    /// Tells the room actor to stop.
    pub async fn shutdown(&self) -> Result<(), RoomError> {
        self.send(RoomCommand::Shutdown).await
    }

    async fn send(&self, cmd: RoomCommand) -> Result<(), RoomError> {
        self.sender.send(cmd).await.map_err(|_| self.unavailable())
    }

    fn unavailable(&self) -> RoomError {
        RoomError::Unavailable(self.code.clone())
    }
}

/// The internal room actor. Runs inside a Tokio task and exclusively
/// owns its `GameRoom`.
struct RoomActor {
    room: GameRoom,
    receiver: mpsc::Receiver<RoomCommand>,
}

impl RoomActor {
    async fn run(mut self) {
        tracing::info!(room = %self.room.code(), "room actor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                RoomCommand::Join { name, reply } => {
                    let result = self.room.add_player(&name);
                    if let Ok(joined) = &result {
                        tracing::info!(
                            room = %self.room.code(),
                            player = %joined,
                            roster = self.room.player_count(),
                            "player joined"
                        );
                    }
                    let _ = reply.send(result);
                }
                RoomCommand::Start { reply } => {
                    let result = self.room.start();
                    if result.is_ok() {
                        tracing::info!(
                            room = %self.room.code(),
                            players = self.room.active_players().len(),
                            werewolves = self.room.werewolves().len(),
                            "game started"
                        );
                    }
                    let _ = reply.send(result);
                }
                RoomCommand::Vote {
                    voter,
                    target,
                    reply,
                } => {
                    let _ = reply.send(self.room.cast_vote(&voter, &target));
                }
                RoomCommand::AdvanceToDay { acting, reply } => {
                    let result = self
                        .room
                        .advance_to_day(&acting)
                        .map(|eliminated| self.report(eliminated));
                    let _ = reply.send(result);
                }
                RoomCommand::AdvanceToNight { acting, reply } => {
                    let result = self
                        .room
                        .advance_to_night(&acting)
                        .map(|eliminated| self.report(eliminated));
                    let _ = reply.send(result);
                }
                RoomCommand::Snapshot { reply } => {
                    let _ = reply.send(self.room.clone());
                }
                RoomCommand::Shutdown => {
                    tracing::info!(room = %self.room.code(), "room shutting down");
                    break;
                }
            }
        }

        tracing::info!(room = %self.room.code(), "room actor stopped");
    }

    /// Runs the post-transition win check and packages the reply.
    fn report(&mut self, eliminated: Option<Elimination>) -> PhaseReport {
        if let Some(fallen) = &eliminated {
            tracing::info!(
                room = %self.room.code(),
                player = %fallen.name,
                role = %fallen.role,
                phase = %self.room.phase(),
                "player eliminated"
            );
        }

        let verdict = self.room.check_game_status();
        if let Some(winner) = verdict {
            tracing::info!(room = %self.room.code(), %winner, "game finished");
        }

        PhaseReport {
            eliminated,
            verdict,
        }
    }
}

/// Creates a fresh room and spawns its actor task.
///
/// `channel_size` bounds the command channel — if it fills up, senders
/// wait their turn.
pub fn spawn_room(channel_size: usize) -> RoomHandle {
    let (tx, rx) = mpsc::channel(channel_size);
    let room = GameRoom::create();
    let code = room.code().clone();

    tokio::spawn(
        RoomActor {
            room,
            receiver: rx,
        }
        .run(),
    );

    RoomHandle { code, sender: tx }
}
