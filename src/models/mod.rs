//! Data structures for tournaments: teams, matches, standings rows, zones.

mod fixture;
mod standings;
mod team;
mod tournament;
mod zone;

pub use fixture::{Match, MatchId, MatchStatus, Score, ScoreUpdate};
pub use standings::{AnnotatedRow, PointsRule, StandingsRow};
pub use team::{Team, TeamEntry, TeamId, TeamRef};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentKind, TournamentMode};
pub use zone::{Zone, ZoneError, ZonePreset, ZONE_PRESETS};
