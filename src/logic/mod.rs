//! Tournament business logic: fixture generation, results, standings, zones.

mod elimination;
mod league;
mod results;
mod setup;
mod standings;
mod zones;

pub use elimination::{
    bracket_round_count, generate_elimination_fixtures, generate_elimination_fixtures_with_rng,
};
pub use league::{generate_league_fixtures, matches_by_matchday, Matchday};
pub use results::{record_result, MAX_SCORE};
pub use setup::{create_tournament, read_roster_csv, TournamentForm};
pub use standings::{compute_standings, compute_standings_with};
pub use zones::{annotate_standings, suggest_next_zone, validate_zones, zone_for_rank};
