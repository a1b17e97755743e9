//! Setup: build a tournament (roster + calendar) from creation form data.

use crate::logic::{generate_elimination_fixtures, generate_league_fixtures};
use crate::models::{Team, TeamEntry, Tournament, TournamentError, TournamentKind, TournamentMode};
use chrono::Utc;
use serde::Deserialize;
use std::io;
use uuid::Uuid;

/// What the organizer fills in when creating a tournament.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TournamentForm {
    pub name: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub kind: TournamentKind,
    #[serde(default)]
    pub mode: TournamentMode,
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

/// Create a tournament: clean up the roster, assign ids and generate the calendar.
///
/// Name and sport must not be blank. Team names are trimmed and blank entries
/// dropped; at least 2 must remain and names must be unique (case-insensitive).
pub fn create_tournament(form: TournamentForm) -> Result<Tournament, TournamentError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(TournamentError::InvalidName);
    }
    let sport = form.sport.trim();
    if sport.is_empty() {
        return Err(TournamentError::InvalidSport);
    }
    let teams = build_roster(form.teams)?;
    if teams.len() < 2 {
        return Err(TournamentError::NotEnoughTeams);
    }

    let id = Uuid::new_v4();
    let matches = match form.kind {
        TournamentKind::League => generate_league_fixtures(&teams, id)?,
        TournamentKind::Elimination => generate_elimination_fixtures(&teams, id)?,
    };
    log::info!(
        "Created {:?} tournament {} ({}) with {} teams and {} matches",
        form.kind,
        id,
        name,
        teams.len(),
        matches.len()
    );

    Ok(Tournament {
        id,
        name: name.to_string(),
        sport: sport.to_string(),
        logo: form.logo.filter(|l| !l.trim().is_empty()),
        kind: form.kind,
        mode: form.mode,
        created_at: Utc::now(),
        teams,
        matches,
        zones: Vec::new(),
    })
}

/// Read roster entries from CSV with a `name` column and an optional `logo` column.
/// Rows with a blank name are skipped.
pub fn read_roster_csv<R: io::Read>(reader: R) -> Result<Vec<TeamEntry>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut entries = Vec::new();
    for record in rdr.deserialize::<TeamEntry>() {
        let entry = record?;
        if !entry.name.is_empty() {
            entries.push(entry);
        }
    }
    Ok(entries)
}

fn build_roster(entries: Vec<TeamEntry>) -> Result<Vec<Team>, TournamentError> {
    let mut teams: Vec<Team> = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry.name.trim();
        if name.is_empty() {
            continue;
        }
        if teams.iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
            return Err(TournamentError::DuplicateTeamName(name.to_string()));
        }
        let mut team = Team::new(name);
        team.logo = entry.logo.filter(|l| !l.trim().is_empty());
        teams.push(team);
    }
    Ok(teams)
}
