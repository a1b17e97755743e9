//! Elimination format: single-elimination bracket with random seeding.

use crate::models::{Match, Team, TeamRef, TournamentError, TournamentId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a bracket, seeding with the thread RNG. The draw is random on purpose.
pub fn generate_elimination_fixtures(
    teams: &[Team],
    tournament_id: TournamentId,
) -> Result<Vec<Match>, TournamentError> {
    generate_elimination_fixtures_with_rng(teams, tournament_id, &mut rand::thread_rng())
}

/// Generate a single-elimination bracket.
///
/// 1. Shuffle the teams (random seeding).
/// 2. Pad with byes up to the next power of two; each bye faces a real team
///    and always takes the away side.
/// 3. Round 1 pairs consecutive slots. Every later round has half as many
///    matches, with both sides pending, down to the final.
///
/// Matches come out round by round, in bracket-position order. Winners are not
/// advanced here.
pub fn generate_elimination_fixtures_with_rng<R: Rng + ?Sized>(
    teams: &[Team],
    tournament_id: TournamentId,
    rng: &mut R,
) -> Result<Vec<Match>, TournamentError> {
    if teams.len() < 2 {
        return Err(TournamentError::NotEnoughTeams);
    }

    let mut seeded: Vec<TeamRef> = teams.iter().map(TeamRef::from).collect();
    seeded.shuffle(rng);

    let mut current = pad_with_byes(seeded);
    let mut matches = Vec::with_capacity(current.len() - 1);
    let mut round = 1;

    while current.len() >= 2 {
        let round_matches: Vec<Match> = current
            .chunks_exact(2)
            .zip(0u32..)
            .map(|(pair, position)| {
                Match::bracket(tournament_id, pair[0], pair[1], round, position)
            })
            .collect();
        current = vec![TeamRef::Pending; round_matches.len()];
        matches.extend(round_matches);
        round += 1;
    }

    log::debug!(
        "Generated {} bracket fixtures for {} teams over {} rounds",
        matches.len(),
        teams.len(),
        round - 1
    );
    Ok(matches)
}

/// Number of bracket rounds for `team_count` teams (rounded up to a power of two).
pub fn bracket_round_count(team_count: usize) -> u32 {
    team_count.next_power_of_two().trailing_zeros()
}

/// Lay out round-1 slots: full pairings first, then one bye after each remaining team.
fn pad_with_byes(seeded: Vec<TeamRef>) -> Vec<TeamRef> {
    let size = seeded.len().next_power_of_two();
    let byes = size - seeded.len();
    let full_pairs = size / 2 - byes;

    let mut slots = Vec::with_capacity(size);
    let mut teams = seeded.into_iter();
    slots.extend(teams.by_ref().take(full_pairs * 2));
    for team in teams {
        slots.push(team);
        slots.push(TeamRef::Bye);
    }
    slots
}
