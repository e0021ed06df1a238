//! The [`GameRoom`] aggregate and roster management.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::phase::{Clock, Phase, Winner};
use crate::roles::Role;

/// Length of a generated room code.
const CODE_LEN: usize = 5;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A five-letter uppercase room identifier, generated at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    /// Generates a fresh random code (uppercase A–Z).
    fn generate() -> Self {
        let mut rng = rand::rng();
        Self(
            (0..CODE_LEN)
                .map(|_| char::from(b'A' + rng.random_range(0..26)))
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player name, normalized by construction.
///
/// Names are trimmed of surrounding whitespace and uppercased, so two
/// `PlayerName`s compare equal exactly when the roster would treat them
/// as the same player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// GameRoom
// ---------------------------------------------------------------------------

/// One roster entry: the assigned role (unset until the game starts for
/// everyone but the narrator) and the current vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub role: Option<Role>,
    pub vote: Option<PlayerName>,
}

/// A single game room: roster, roles, votes, phase, and outcome.
///
/// The room is a plain value with no interior locking or I/O. Operations
/// assume exclusive access for their duration; callers sharing a room
/// across tasks must serialize mutations (see the `lupine-room` actor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRoom {
    pub(crate) code: RoomCode,
    pub(crate) created_ms: u64,
    pub(crate) roster: HashMap<PlayerName, PlayerRecord>,
    pub(crate) narrator: Option<PlayerName>,
    /// Players still alive and eligible to vote or be voted on, in the
    /// order they entered play. The narrator is never a member.
    pub(crate) active: Vec<PlayerName>,
    /// Names dealt the werewolf role at start. Fixed for the whole game.
    pub(crate) werewolves: HashSet<PlayerName>,
    pub(crate) clock: Clock,
    pub(crate) started: bool,
    pub(crate) finished: bool,
    pub(crate) winner: Option<Winner>,
}

impl GameRoom {
    /// Creates an empty room with a random code, waiting for players.
    pub fn create() -> Self {
        let created_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Self {
            code: RoomCode::generate(),
            created_ms,
            roster: HashMap::new(),
            narrator: None,
            active: Vec::new(),
            werewolves: HashSet::new(),
            clock: Clock::default(),
            started: false,
            finished: false,
            winner: None,
        }
    }

    /// Adds a player to the roster and returns the normalized name.
    ///
    /// The first player to join becomes the narrator and receives that
    /// role immediately; everyone else joins role-less until the deal at
    /// [`start`](Self::start). Fails once the game has started (the
    /// roster is frozen) or when the normalized name is already taken.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerName, GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        let name = PlayerName::normalize(name);
        if self.roster.contains_key(&name) {
            return Err(GameError::DuplicateName(name));
        }

        let role = if self.roster.is_empty() {
            self.narrator = Some(name.clone());
            Some(Role::Narrator)
        } else {
            None
        };

        self.roster
            .insert(name.clone(), PlayerRecord { role, vote: None });
        Ok(name)
    }

    // -- Accessors ----------------------------------------------------------

    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    /// Creation time in epoch milliseconds.
    pub fn created_ms(&self) -> u64 {
        self.created_ms
    }

    pub fn narrator(&self) -> Option<&PlayerName> {
        self.narrator.as_ref()
    }

    /// Looks up a roster entry. Eliminated players keep their entry (and
    /// role) for display; only `active_players` shrinks.
    pub fn player(&self, name: &PlayerName) -> Option<&PlayerRecord> {
        self.roster.get(name)
    }

    /// Number of roster entries, narrator included.
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Players still in play, in the order they entered it.
    pub fn active_players(&self) -> &[PlayerName] {
        &self.active
    }

    /// Names dealt the werewolf role at start.
    pub fn werewolves(&self) -> &HashSet<PlayerName> {
        &self.werewolves
    }

    pub fn phase(&self) -> Phase {
        self.clock.phase
    }

    /// Completed night→day cycles.
    pub fn day(&self) -> u32 {
        self.clock.day
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Werewolves still in play.
    pub fn active_werewolf_count(&self) -> usize {
        self.active
            .iter()
            .filter(|p| self.werewolves.contains(*p))
            .count()
    }
}
