//! Match, Score and MatchStatus.

use crate::models::team::{TeamId, TeamRef};
use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Where a match is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
}

/// Final (or current) score of a match. Both sides are always set together.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }
}

/// A single fixture in a tournament calendar.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub home: TeamRef,
    pub away: TeamRef,
    /// None until a result is reported.
    pub score: Option<Score>,
    /// 1-based round number.
    pub matchday: u32,
    /// Elimination only: 1-based bracket round.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bracket_round: Option<u32>,
    /// Elimination only: 0-based slot within the bracket round.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bracket_position: Option<u32>,
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Match {
    /// A scheduled league fixture.
    pub fn new(tournament_id: TournamentId, home: TeamRef, away: TeamRef, matchday: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            home,
            away,
            score: None,
            matchday,
            bracket_round: None,
            bracket_position: None,
            status: MatchStatus::Scheduled,
            updated_at: None,
        }
    }

    /// A scheduled bracket fixture; the matchday is the bracket round.
    pub fn bracket(
        tournament_id: TournamentId,
        home: TeamRef,
        away: TeamRef,
        round: u32,
        position: u32,
    ) -> Self {
        Self {
            bracket_round: Some(round),
            bracket_position: Some(position),
            ..Self::new(tournament_id, home, away, round)
        }
    }

    /// Home team id as stored: null for byes and undecided slots.
    pub fn home_team_id(&self) -> Option<TeamId> {
        self.home.team_id()
    }

    /// Away team id as stored: null for byes and undecided slots.
    pub fn away_team_id(&self) -> Option<TeamId> {
        self.away.team_id()
    }

    /// Whether `team` plays in this match.
    pub fn involves(&self, team: TeamId) -> bool {
        self.home_team_id() == Some(team) || self.away_team_id() == Some(team)
    }

    /// The score, but only when the match counts as finished.
    pub fn final_score(&self) -> Option<Score> {
        match self.status {
            MatchStatus::Finished => self.score,
            MatchStatus::Scheduled | MatchStatus::Live => None,
        }
    }
}

/// Score-update event from the surrounding application.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreUpdate {
    pub match_id: MatchId,
    pub home_score: u32,
    pub away_score: u32,
}
