//! Tournament fixtures engine: league and bracket calendars, standings and zones.
//!
//! The core functions are pure; `api` wraps them in a JSON web service that keeps
//! tournaments in memory.

pub mod api;
pub mod logic;
pub mod models;

pub use logic::{
    annotate_standings, bracket_round_count, compute_standings, compute_standings_with,
    create_tournament, generate_elimination_fixtures, generate_elimination_fixtures_with_rng,
    generate_league_fixtures, matches_by_matchday, read_roster_csv, record_result,
    suggest_next_zone, validate_zones, zone_for_rank, Matchday, TournamentForm, MAX_SCORE,
};
pub use models::{
    AnnotatedRow, Match, MatchId, MatchStatus, PointsRule, Score, ScoreUpdate, StandingsRow, Team,
    TeamEntry, TeamId, TeamRef, Tournament, TournamentError, TournamentId, TournamentKind,
    TournamentMode, Zone, ZoneError, ZonePreset, ZONE_PRESETS,
};
