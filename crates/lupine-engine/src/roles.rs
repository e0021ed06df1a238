//! Role definitions and the start-of-game role deck.

use std::fmt;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Minimum roster size (narrator included) for a playable game.
pub const MIN_PLAYERS: usize = 6;

/// A player's assigned role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Moderates phase transitions. Never votes, never eliminated.
    Narrator,
    /// The default role.
    Villager,
    /// Assigned at game start; votes at night.
    Werewolf,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Narrator => write!(f, "narrator"),
            Self::Villager => write!(f, "villager"),
            Self::Werewolf => write!(f, "werewolf"),
        }
    }
}

/// Number of werewolves seated for a roster of `n` players.
///
/// One werewolf per three players past the minimum: 1 for 6–8 players,
/// 2 for 9–11, 3 for 12–14, and so on.
fn werewolf_count(n: usize) -> usize {
    (n - MIN_PLAYERS) / 3 + 1
}

/// Builds a shuffled role deck for a roster of `n` players.
///
/// The deck holds `n - 1` roles — the narrator is never dealt one. The
/// tiered werewolf count fills the first slots, villagers the rest, and
/// a uniform shuffle decides who draws what.
pub(crate) fn role_deck(n: usize) -> Result<Vec<Role>, GameError> {
    if n < MIN_PLAYERS {
        return Err(GameError::InsufficientPlayers(n));
    }

    let mut deck = vec![Role::Villager; n - 1];
    for slot in deck.iter_mut().take(werewolf_count(n)) {
        *slot = Role::Werewolf;
    }

    deck.shuffle(&mut rand::rng());
    Ok(deck)
}
