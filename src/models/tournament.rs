//! Tournament, its format and the errors tournament operations report.

use crate::logic::{annotate_standings, compute_standings, record_result, validate_zones};
use crate::models::fixture::{Match, MatchId, ScoreUpdate};
use crate::models::standings::{AnnotatedRow, StandingsRow};
use crate::models::team::Team;
use crate::models::zone::{Zone, ZoneError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    /// Fewer than two teams to schedule.
    #[error("Need at least 2 teams to generate fixtures")]
    NotEnoughTeams,
    /// Tournament name is empty after trimming.
    #[error("Tournament name must not be empty")]
    InvalidName,
    #[error("Sport must not be empty")]
    InvalidSport,
    /// Two roster entries share a name (case-insensitive).
    #[error("Team name {0:?} appears more than once")]
    DuplicateTeamName(String),
    #[error("Match not found")]
    MatchNotFound(MatchId),
    /// A score was reported for a match whose sides are not both real teams.
    #[error("Match participants are not decided yet")]
    UnresolvedParticipants(MatchId),
    #[error("Scores must be between 0 and {max}")]
    InvalidScore { max: u32 },
    #[error(transparent)]
    InvalidZones(#[from] ZoneError),
    /// The roster file could not be read.
    #[error("Invalid roster: {0}")]
    Roster(String),
}

impl From<csv::Error> for TournamentError {
    fn from(e: csv::Error) -> Self {
        TournamentError::Roster(e.to_string())
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Fixture format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentKind {
    /// Round robin: everyone plays everyone once.
    #[default]
    League,
    /// Single-elimination bracket.
    Elimination,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentMode {
    #[default]
    Community,
    Pro,
}

/// A tournament: metadata, roster, generated calendar and standings zones.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub sport: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub kind: TournamentKind,
    pub mode: TournamentMode,
    pub created_at: DateTime<Utc>,
    pub teams: Vec<Team>,
    /// Calendar in generation order (matchday ascending).
    pub matches: Vec<Match>,
    /// Standings zones, sorted by start position.
    pub zones: Vec<Zone>,
}

impl Tournament {
    pub fn is_pro(&self) -> bool {
        self.mode == TournamentMode::Pro
    }

    pub fn get_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Record a result for one match; the match becomes finished.
    pub fn update_match_score(
        &mut self,
        match_id: MatchId,
        home_score: u32,
        away_score: u32,
    ) -> Result<(), TournamentError> {
        let m = self
            .get_match_mut(match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        record_result(m, home_score, away_score)?;
        log::info!(
            "Tournament {}: match {} finished {}-{}",
            self.id,
            match_id,
            home_score,
            away_score
        );
        Ok(())
    }

    /// Apply a score-update event.
    pub fn apply_score_update(&mut self, update: ScoreUpdate) -> Result<(), TournamentError> {
        self.update_match_score(update.match_id, update.home_score, update.away_score)
    }

    /// Replace all zones. Nothing changes if the new set is invalid.
    pub fn set_zones(&mut self, mut zones: Vec<Zone>) -> Result<(), TournamentError> {
        if let Err(e) = validate_zones(&zones, self.teams.len()) {
            log::warn!("Tournament {}: rejected zones: {}", self.id, e);
            return Err(e.into());
        }
        zones.sort_by_key(|z| z.start_position);
        self.zones = zones;
        Ok(())
    }

    /// Current standings, recomputed from the finished matches. Brackets have no table.
    pub fn standings(&self) -> Vec<StandingsRow> {
        match self.kind {
            TournamentKind::League => compute_standings(&self.teams, &self.matches),
            TournamentKind::Elimination => Vec::new(),
        }
    }

    /// Current standings with positions and zones.
    pub fn annotated_standings(&self) -> Vec<AnnotatedRow> {
        annotate_standings(self.standings(), &self.zones)
    }
}
