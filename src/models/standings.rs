//! StandingsRow and PointsRule.

use crate::models::team::{Team, TeamId};
use crate::models::zone::Zone;
use serde::{Deserialize, Serialize};

/// Points awarded per result.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PointsRule {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for PointsRule {
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

/// One team's line in the standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub team_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_logo: Option<String>,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingsRow {
    /// Zeroed row for a team that has not played yet.
    pub fn new(team: &Team) -> Self {
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            team_logo: team.logo.clone(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Record one finished match from this team's point of view.
    ///
    /// Totals saturate: scores from outside this crate are not range-checked.
    pub fn record(&mut self, scored: u32, conceded: u32, rule: &PointsRule) {
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        let points = if scored > conceded {
            self.won = self.won.saturating_add(1);
            rule.win
        } else if scored == conceded {
            self.drawn = self.drawn.saturating_add(1);
            rule.draw
        } else {
            self.lost = self.lost.saturating_add(1);
            rule.loss
        };
        self.points = self.points.saturating_add(points);
    }
}

/// A standings row with its table position and zone, ready for display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRow {
    /// 1-based position in the table.
    pub position: u32,
    #[serde(flatten)]
    pub row: StandingsRow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<Zone>,
}
