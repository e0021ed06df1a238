//! End-to-end games played through the public API only.

use lupine_engine::{GameError, GameRoom, Phase, PlayerName, Winner};

const NARRATOR: &str = "MOD";

/// An 8-player room (narrator + 7 active, one werewolf), started and
/// split into (room, wolf, villagers).
fn eight_player_game() -> (GameRoom, PlayerName, Vec<PlayerName>) {
    let mut room = GameRoom::create();
    room.add_player(NARRATOR).unwrap();
    for i in 1..=7 {
        room.add_player(&format!("p{i}")).unwrap();
    }
    room.start().unwrap();

    let wolf = room.werewolves().iter().next().unwrap().clone();
    let villagers = room
        .active_players()
        .iter()
        .filter(|p| **p != wolf)
        .cloned()
        .collect();
    (room, wolf, villagers)
}

#[test]
fn test_werewolf_outlasts_the_village() {
    let (mut room, wolf, villagers) = eight_player_game();
    assert_eq!(room.phase(), Phase::Night);

    // Each cycle the lone werewolf marks one villager during the day:
    // a single vote meets the one-werewolf quorum on the way into night.
    for (cycle, victim) in villagers.iter().enumerate() {
        assert_eq!(room.advance_to_day(NARRATOR).unwrap(), None);
        assert_eq!(room.day() as usize, cycle + 1);

        room.cast_vote(wolf.as_str(), victim.as_str()).unwrap();
        let eliminated = room.advance_to_night(NARRATOR).unwrap().unwrap();
        assert_eq!(&eliminated.name, victim);

        let verdict = room.check_game_status();
        if cycle + 1 < villagers.len() {
            assert_eq!(verdict, None, "game ended early on cycle {cycle}");
        } else {
            assert_eq!(verdict, Some(Winner::Werewolves));
        }
    }

    assert!(room.is_finished());
    assert_eq!(room.winner(), Some(Winner::Werewolves));
    assert_eq!(room.active_players().len(), 1);
    assert_eq!(room.active_players()[0], wolf);
}

#[test]
fn test_village_unmasks_the_werewolf() {
    let (mut room, wolf, villagers) = eight_player_game();

    // An uneventful first night.
    assert_eq!(room.advance_to_day(NARRATOR).unwrap(), None);

    // One villager points at the wolf — exactly the living-werewolf
    // quorum — and the wolf falls on the way into night.
    room.cast_vote(villagers[0].as_str(), wolf.as_str()).unwrap();
    let eliminated = room.advance_to_night(NARRATOR).unwrap().unwrap();
    assert_eq!(eliminated.name, wolf);

    assert_eq!(room.check_game_status(), Some(Winner::Villagers));
    assert_eq!(room.winner(), Some(Winner::Villagers));
    // Repeated checks keep reporting the same verdict.
    assert_eq!(room.check_game_status(), Some(Winner::Villagers));
}

#[test]
fn test_votes_do_not_leak_across_phases() {
    let (mut room, wolf, villagers) = eight_player_game();

    // The wolf's night vote is wiped by the transition into day, so it
    // cannot count toward the day-side quorum later.
    room.cast_vote(wolf.as_str(), villagers[0].as_str()).unwrap();
    assert_eq!(room.advance_to_day(NARRATOR).unwrap(), None);
    assert_eq!(room.advance_to_night(NARRATOR).unwrap(), None);
    assert_eq!(room.active_players().len(), 7);
}

#[test]
fn test_full_room_lifecycle_errors() {
    let mut room = GameRoom::create();
    room.add_player("mod").unwrap();
    room.add_player("alice").unwrap();

    // Voting before the game starts: roster members are not yet active.
    assert!(matches!(
        room.cast_vote("alice", "mod"),
        Err(GameError::PlayerNotActive(_))
    ));

    for name in ["bob", "carol", "dave", "erin"] {
        room.add_player(name).unwrap();
    }
    room.start().unwrap();

    assert_eq!(room.add_player("frank"), Err(GameError::AlreadyStarted));
    assert!(matches!(
        room.advance_to_day("alice"),
        Err(GameError::NotNarrator(_))
    ));
}
