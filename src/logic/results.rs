//! Result recording: apply a reported score to a match.

use crate::models::{Match, MatchStatus, Score, TournamentError};
use chrono::Utc;

/// Highest score a side can report for one match.
pub const MAX_SCORE: u32 = 999;

/// Set the score and mark the match finished. Reporting again overwrites the
/// previous score.
///
/// Both sides must be real teams; bye and undecided slots cannot take a score.
/// Scores above [`MAX_SCORE`] are rejected.
pub fn record_result(
    m: &mut Match,
    home_score: u32,
    away_score: u32,
) -> Result<(), TournamentError> {
    if m.home_team_id().is_none() || m.away_team_id().is_none() {
        return Err(TournamentError::UnresolvedParticipants(m.id));
    }
    if home_score > MAX_SCORE || away_score > MAX_SCORE {
        return Err(TournamentError::InvalidScore { max: MAX_SCORE });
    }
    m.score = Some(Score::new(home_score, away_score));
    m.status = MatchStatus::Finished;
    m.updated_at = Some(Utc::now());
    Ok(())
}
