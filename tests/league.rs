//! Integration tests for the round-robin calendar.

use std::collections::HashSet;
use tournament_fixtures::{
    generate_league_fixtures, matches_by_matchday, MatchStatus, Team, TeamId, TournamentError,
};
use uuid::Uuid;

fn teams(n: usize) -> Vec<Team> {
    (0..n).map(|i| Team::new(format!("T{i}"))).collect()
}

fn pair(a: TeamId, b: TeamId) -> (TeamId, TeamId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[test]
fn needs_at_least_two_teams() {
    assert_eq!(
        generate_league_fixtures(&teams(1), Uuid::new_v4()),
        Err(TournamentError::NotEnoughTeams)
    );
    assert_eq!(
        generate_league_fixtures(&[], Uuid::new_v4()),
        Err(TournamentError::NotEnoughTeams)
    );
}

#[test]
fn two_teams_play_once() {
    let t = teams(2);
    let tid = Uuid::new_v4();
    let matches = generate_league_fixtures(&t, tid).unwrap();
    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    assert_eq!(m.matchday, 1);
    assert_eq!(m.tournament_id, tid);
    assert_eq!(m.home_team_id(), Some(t[0].id));
    assert_eq!(m.away_team_id(), Some(t[1].id));
}

#[test]
fn four_teams_three_matchdays_of_two() {
    let matches = generate_league_fixtures(&teams(4), Uuid::new_v4()).unwrap();
    assert_eq!(matches.len(), 6);
    let days = matches_by_matchday(&matches);
    assert_eq!(days.iter().map(|d| d.number).collect::<Vec<_>>(), vec![1, 2, 3]);
    for day in &days {
        assert_eq!(day.matches.len(), 2);
    }
}

#[test]
fn first_round_pairs_outside_in() {
    let t = teams(4);
    let matches = generate_league_fixtures(&t, Uuid::new_v4()).unwrap();
    // Round 1: 0-3, 1-2. Then 3 moves to index 1: [0,3,1,2] -> 0-2, 3-1.
    let sides: Vec<_> = matches
        .iter()
        .map(|m| (m.home_team_id().unwrap(), m.away_team_id().unwrap()))
        .collect();
    assert_eq!(sides[0], (t[0].id, t[3].id));
    assert_eq!(sides[1], (t[1].id, t[2].id));
    assert_eq!(sides[2], (t[0].id, t[2].id));
    assert_eq!(sides[3], (t[3].id, t[1].id));
}

#[test]
fn every_pair_meets_exactly_once() {
    for n in 2..=13 {
        let t = teams(n);
        let matches = generate_league_fixtures(&t, Uuid::new_v4()).unwrap();
        assert_eq!(matches.len(), n * (n - 1) / 2, "n = {n}");

        let mut seen = HashSet::new();
        for m in &matches {
            let home = m.home_team_id().expect("league home is a real team");
            let away = m.away_team_id().expect("league away is a real team");
            assert_ne!(home, away);
            assert!(seen.insert(pair(home, away)), "pair repeated for n = {n}");
            assert_eq!(m.status, MatchStatus::Scheduled);
            assert!(m.score.is_none());
            assert!(m.bracket_round.is_none());
        }
    }
}

#[test]
fn nobody_plays_twice_on_a_matchday() {
    let matches = generate_league_fixtures(&teams(8), Uuid::new_v4()).unwrap();
    for day in matches_by_matchday(&matches) {
        let mut playing = HashSet::new();
        for m in &day.matches {
            assert!(playing.insert(m.home_team_id().unwrap()));
            assert!(playing.insert(m.away_team_id().unwrap()));
        }
        assert_eq!(playing.len(), 8);
    }
}

#[test]
fn odd_count_gives_each_team_one_free_matchday() {
    let t = teams(5);
    let matches = generate_league_fixtures(&t, Uuid::new_v4()).unwrap();
    let days = matches_by_matchday(&matches);
    assert_eq!(days.len(), 5);

    let mut idle_count = vec![0; t.len()];
    for day in &days {
        assert_eq!(day.matches.len(), 2);
        let idle: Vec<usize> = (0..t.len())
            .filter(|&i| !day.matches.iter().any(|m| m.involves(t[i].id)))
            .collect();
        assert_eq!(idle.len(), 1, "matchday {}", day.number);
        idle_count[idle[0]] += 1;
    }
    assert!(idle_count.iter().all(|&c| c == 1));
}
