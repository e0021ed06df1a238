//! Vote casting and tallying.

use std::collections::HashMap;

use crate::error::GameError;
use crate::phase::Phase;
use crate::room::{GameRoom, PlayerName};

impl GameRoom {
    /// Records a vote from `voter` against `target`.
    ///
    /// The voter must be an active roster member, and at night only
    /// werewolves may vote. The target is stored normalized but otherwise
    /// unchecked — a vote for a nonexistent name is legal to cast and
    /// simply never shows up in the tally.
    pub fn cast_vote(&mut self, voter: &str, target: &str) -> Result<(), GameError> {
        let voter = PlayerName::normalize(voter);
        let target = PlayerName::normalize(target);

        if !self.roster.contains_key(&voter) {
            return Err(GameError::PlayerNotFound(voter));
        }
        if !self.active.contains(&voter) {
            return Err(GameError::PlayerNotActive(voter));
        }
        if self.clock.phase == Phase::Night && !self.werewolves.contains(&voter) {
            return Err(GameError::NightVoteRestricted(voter));
        }

        let record = self
            .roster
            .get_mut(&voter)
            .expect("roster membership checked above");
        record.vote = Some(target);
        Ok(())
    }

    /// Groups the current valid votes by target.
    ///
    /// A vote counts only while its target is a roster key; stale or
    /// garbage targets are silently excluded. Each entry maps a target to
    /// the voters behind it, so a caller can weigh every entry against an
    /// elimination threshold independently.
    pub fn tally(&self) -> HashMap<PlayerName, Vec<PlayerName>> {
        let mut tally: HashMap<PlayerName, Vec<PlayerName>> = HashMap::new();
        for (voter, record) in &self.roster {
            if let Some(target) = &record.vote {
                if self.roster.contains_key(target) {
                    tally.entry(target.clone()).or_default().push(voter.clone());
                }
            }
        }
        tally
    }

    /// Clears every roster entry's vote. Runs after each phase transition.
    pub(crate) fn reset_votes(&mut self) {
        for record in self.roster.values_mut() {
            record.vote = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::PlayerRecord;

    /// A started 8-player room: narrator MOD plus P1..P7 active.
    fn started_room() -> GameRoom {
        let mut room = GameRoom::create();
        room.add_player("mod").unwrap();
        for i in 1..=7 {
            room.add_player(&format!("p{i}")).unwrap();
        }
        room.start().unwrap();
        room
    }

    fn name(raw: &str) -> PlayerName {
        PlayerName::normalize(raw)
    }

    #[test]
    fn test_unknown_voter_rejected() {
        let mut room = started_room();
        room.clock.phase = Phase::Day;
        assert_eq!(
            room.cast_vote("ghost", "p1"),
            Err(GameError::PlayerNotFound(name("ghost")))
        );
    }

    #[test]
    fn test_narrator_cannot_vote() {
        let mut room = started_room();
        room.clock.phase = Phase::Day;
        // The narrator is a roster member but never active.
        assert_eq!(
            room.cast_vote("mod", "p1"),
            Err(GameError::PlayerNotActive(name("mod")))
        );
    }

    #[test]
    fn test_eliminated_voter_rejected() {
        let mut room = started_room();
        room.clock.phase = Phase::Day;
        room.active.retain(|p| p != &name("p3"));
        assert_eq!(
            room.cast_vote("p3", "p1"),
            Err(GameError::PlayerNotActive(name("p3")))
        );
    }

    #[test]
    fn test_only_werewolves_vote_at_night() {
        let mut room = started_room();
        assert_eq!(room.phase(), Phase::Night);

        let wolf = room.werewolves().iter().next().unwrap().clone();
        let villager = room
            .active_players()
            .iter()
            .find(|p| !room.werewolves().contains(*p))
            .unwrap()
            .clone();

        assert_eq!(
            room.cast_vote(villager.as_str(), wolf.as_str()),
            Err(GameError::NightVoteRestricted(villager))
        );
        room.cast_vote(wolf.as_str(), "p1").unwrap();
    }

    #[test]
    fn test_vote_target_is_normalized_and_unchecked() {
        let mut room = started_room();
        room.clock.phase = Phase::Day;
        room.cast_vote("p1", "  nobody ").unwrap();
        assert_eq!(room.player(&name("p1")).unwrap().vote, Some(name("NOBODY")));
        // The garbage target never reaches the tally.
        assert!(room.tally().is_empty());
    }

    #[test]
    fn test_tally_groups_voters_by_target() {
        let mut room = started_room();
        room.clock.phase = Phase::Day;
        room.cast_vote("p1", "p7").unwrap();
        room.cast_vote("p2", "p7").unwrap();
        room.cast_vote("p3", "p4").unwrap();

        let tally = room.tally();
        assert_eq!(tally.len(), 2);
        let mut on_p7 = tally[&name("p7")].clone();
        on_p7.sort();
        assert_eq!(on_p7, vec![name("p1"), name("p2")]);
        assert_eq!(tally[&name("p4")], vec![name("p3")]);
    }

    #[test]
    fn test_tally_drops_votes_for_removed_names() {
        let mut room = started_room();
        room.clock.phase = Phase::Day;
        room.cast_vote("p1", "p2").unwrap();
        // Simulate a stale vote: the target vanishes from the roster.
        room.roster.remove(&name("p2"));
        assert!(room.tally().is_empty());
    }

    #[test]
    fn test_reset_votes_clears_every_record() {
        let mut room = started_room();
        room.clock.phase = Phase::Day;
        room.cast_vote("p1", "p2").unwrap();
        room.cast_vote("p2", "p1").unwrap();
        room.reset_votes();
        assert!(
            room.roster
                .values()
                .all(|r: &PlayerRecord| r.vote.is_none())
        );
    }
}
