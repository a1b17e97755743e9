//! Team and TeamRef (a match slot that may not hold a real team yet).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in matches and standings lookups).
pub type TeamId = Uuid;

/// A team registered in a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Optional logo URL, carried through to standings rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Team {
    /// Create a new team with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            logo: None,
        }
    }
}

/// One side of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "team_id", rename_all = "snake_case")]
pub enum TeamRef {
    /// A team from the roster.
    Real(TeamId),
    /// Padding slot: a free date in a league round, a walkover in a bracket.
    Bye,
    /// Bracket slot whose team is decided by an earlier round.
    Pending,
}

impl TeamRef {
    /// Id of the team in this slot; `None` for byes and undecided slots.
    pub fn team_id(&self) -> Option<TeamId> {
        match self {
            TeamRef::Real(id) => Some(*id),
            TeamRef::Bye | TeamRef::Pending => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, TeamRef::Bye)
    }
}

impl From<&Team> for TeamRef {
    fn from(team: &Team) -> Self {
        TeamRef::Real(team.id)
    }
}

/// A roster entry as supplied at creation time (before ids are assigned).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl TeamEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo: None,
        }
    }
}
