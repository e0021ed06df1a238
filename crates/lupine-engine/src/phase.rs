//! The day/night state machine: game start, phase transitions, and win
//! detection.
//!
//! Transitions are narrator-gated and apply different elimination
//! quorums: entering the day takes a strict majority of active players,
//! entering the night takes unanimity among the living werewolves. The
//! engine never runs the win check on its own — the caller invokes
//! [`GameRoom::check_game_status`] after each transition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::roles::{Role, role_deck};
use crate::room::{GameRoom, PlayerName};

// ---------------------------------------------------------------------------
// State enums
// ---------------------------------------------------------------------------

/// The in-game time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Day,
    Night,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Night => write!(f, "night"),
        }
    }
}

/// The faction that won a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Villagers,
    Werewolves,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Villagers => write!(f, "villagers"),
            Self::Werewolves => write!(f, "werewolves"),
        }
    }
}

/// The in-game calendar: completed night→day cycles and the current
/// phase. Games open on night zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    pub day: u32,
    pub phase: Phase,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            day: 0,
            phase: Phase::Night,
        }
    }
}

/// A player removed from play by a phase transition. The roster entry
/// survives (role preserved for display); only active status is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elimination {
    pub name: PlayerName,
    pub role: Role,
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

impl GameRoom {
    /// Starts the game: deals roles and opens the first night.
    ///
    /// Every role-less roster entry (everyone but the narrator) draws
    /// from a shuffled deck; werewolves are recorded and every dealt
    /// player becomes active. Fails with `InsufficientPlayers` below six
    /// roster entries — checked before any mutation — and with
    /// `AlreadyStarted` on a second call.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        let mut deck = role_deck(self.roster.len())?;

        for (name, record) in self.roster.iter_mut() {
            if record.role.is_some() {
                // The narrator was dealt at join time.
                continue;
            }
            let role = deck.pop().expect("deck holds one role per undealt player");
            if role == Role::Werewolf {
                self.werewolves.insert(name.clone());
            }
            record.role = Some(role);
            self.active.push(name.clone());
        }

        self.clock = Clock::default();
        self.started = true;
        Ok(())
    }

    /// Night → day: applies the majority elimination and opens a new day.
    ///
    /// Narrator-gated. A target is eliminated when its vote count
    /// strictly exceeds half the active player count. Votes are cleared
    /// and the day counter advances.
    pub fn advance_to_day(&mut self, acting: &str) -> Result<Option<Elimination>, GameError> {
        self.require_narrator(acting)?;

        let quorum = self.active.len();
        let eliminated = self.resolve_elimination(|votes| 2 * votes > quorum);

        self.reset_votes();
        self.clock.day += 1;
        self.clock.phase = Phase::Day;
        Ok(eliminated)
    }

    /// Day → night: applies the werewolf-unanimity elimination.
    ///
    /// Narrator-gated. A target is eliminated when its vote count equals
    /// the number of still-living werewolves. Votes are cleared.
    pub fn advance_to_night(&mut self, acting: &str) -> Result<Option<Elimination>, GameError> {
        self.require_narrator(acting)?;

        let wolves = self.active_werewolf_count();
        let eliminated = self.resolve_elimination(|votes| votes == wolves);

        self.reset_votes();
        self.clock.phase = Phase::Night;
        Ok(eliminated)
    }

    /// Checks for a finished game and records the winner.
    ///
    /// Villagers win when no werewolf is left in play; werewolves win
    /// when every remaining active player is one. Once the game is
    /// finished the recorded winner is returned unchanged on every later
    /// call. Returns `None` before the game starts.
    pub fn check_game_status(&mut self) -> Option<Winner> {
        if self.finished {
            return self.winner;
        }
        if !self.started {
            return None;
        }

        let wolves = self.active_werewolf_count();
        let verdict = if wolves == 0 {
            Winner::Villagers
        } else if wolves == self.active.len() {
            Winner::Werewolves
        } else {
            return None;
        };

        self.finished = true;
        self.winner = Some(verdict);
        Some(verdict)
    }

    // -- Internals ----------------------------------------------------------

    fn require_narrator(&self, acting: &str) -> Result<(), GameError> {
        let acting = PlayerName::normalize(acting);
        if self.narrator.as_ref() != Some(&acting) {
            return Err(GameError::NotNarrator(acting));
        }
        Ok(())
    }

    /// Deactivates the single tally target passing `qualifies`.
    ///
    /// A split where several targets reach the threshold at once is a
    /// deadlock: nobody is eliminated. Day majorities are unique by
    /// counting; night unanimity can split only if votes leak across
    /// phases, which the per-transition reset prevents.
    fn resolve_elimination<F>(&mut self, qualifies: F) -> Option<Elimination>
    where
        F: Fn(usize) -> bool,
    {
        let tally = self.tally();
        let mut qualified: Vec<PlayerName> = tally
            .into_iter()
            .filter(|(_, voters)| qualifies(voters.len()))
            .map(|(target, _)| target)
            .collect();

        if qualified.len() != 1 {
            return None;
        }
        let target = qualified.pop()?;

        if let Some(idx) = self.active.iter().position(|p| *p == target) {
            self.active.remove(idx);
        }
        let role = self.roster.get(&target)?.role?;
        Some(Elimination { name: target, role })
    }
}
