//! League format: round-robin calendar using the circle method.

use crate::models::{Match, Team, TeamRef, TournamentError, TournamentId};
use serde::Serialize;
use std::collections::BTreeMap;

/// Generate a single round-robin calendar.
///
/// 1. With an odd number of teams, add one bye so the slot list is even (`n` slots).
/// 2. Play `n - 1` rounds; in each round slot `i` meets slot `n - 1 - i`.
/// 3. After each round the last slot moves to index 1; slot 0 never moves.
/// 4. Pairings against the bye are dropped: that team has a free matchday.
///
/// Every pair of teams meets exactly once. Home/away is whatever the rotation gives.
pub fn generate_league_fixtures(
    teams: &[Team],
    tournament_id: TournamentId,
) -> Result<Vec<Match>, TournamentError> {
    if teams.len() < 2 {
        return Err(TournamentError::NotEnoughTeams);
    }

    let mut slots: Vec<TeamRef> = teams.iter().map(TeamRef::from).collect();
    if slots.len() % 2 != 0 {
        slots.push(TeamRef::Bye);
    }

    let n = slots.len();
    let mut matches = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);

    for matchday in (1u32..).take(n - 1) {
        for i in 0..n / 2 {
            let (home, away) = (slots[i], slots[n - 1 - i]);
            if home.is_bye() || away.is_bye() {
                continue;
            }
            matches.push(Match::new(tournament_id, home, away, matchday));
        }
        slots[1..].rotate_right(1);
    }

    log::debug!(
        "Generated {} league fixtures for {} teams over {} matchdays",
        matches.len(),
        teams.len(),
        n - 1
    );
    Ok(matches)
}

/// All matches of one matchday.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Matchday {
    pub number: u32,
    pub matches: Vec<Match>,
}

/// Group a calendar by matchday, ascending. Order within a matchday is kept.
pub fn matches_by_matchday(matches: &[Match]) -> Vec<Matchday> {
    let mut grouped: BTreeMap<u32, Vec<Match>> = BTreeMap::new();
    for m in matches {
        grouped.entry(m.matchday).or_default().push(m.clone());
    }
    grouped
        .into_iter()
        .map(|(number, matches)| Matchday { number, matches })
        .collect()
}
