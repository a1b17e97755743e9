//! Standings: fold finished matches into a ranked table.

use crate::models::{Match, PointsRule, StandingsRow, Team, TeamId};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Standings with the usual 3/1/0 points.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<StandingsRow> {
    compute_standings_with(teams, matches, &PointsRule::default())
}

/// Compute the standings table from scratch.
///
/// Only finished matches with a score count. A side that is not one of `teams`
/// (another group, a bye, an undecided slot) is skipped; the other side still counts.
///
/// Ordered by points, goal difference, goals for (all descending), then team name
/// and team id so equal rows always come out in the same order.
pub fn compute_standings_with(
    teams: &[Team],
    matches: &[Match],
    rule: &PointsRule,
) -> Vec<StandingsRow> {
    let mut rows: HashMap<TeamId, StandingsRow> =
        teams.iter().map(|t| (t.id, StandingsRow::new(t))).collect();

    for m in matches {
        let Some(score) = m.final_score() else {
            continue;
        };
        if let Some(row) = m.home_team_id().and_then(|id| rows.get_mut(&id)) {
            row.record(score.home, score.away, rule);
        }
        if let Some(row) = m.away_team_id().and_then(|id| rows.get_mut(&id)) {
            row.record(score.away, score.home, rule);
        }
    }

    let mut table: Vec<StandingsRow> = rows
        .into_values()
        .map(|mut row| {
            row.goal_difference = i64::from(row.goals_for) - i64::from(row.goals_against);
            row
        })
        .collect();
    table.sort_by(compare_rows);
    table
}

fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team_name.cmp(&b.team_name))
        .then_with(|| a.team_id.cmp(&b.team_id))
}
