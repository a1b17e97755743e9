//! JSON web API over in-memory tournaments (create, score updates, standings, zones).

use crate::logic::{
    create_tournament, matches_by_matchday, read_roster_csv, suggest_next_zone, TournamentForm,
};
use crate::models::{MatchId, Tournament, TournamentError, TournamentId, Zone, ZONE_PRESETS};
use actix_web::{
    get, post, put,
    web::{self, Data, Json, Path},
    HttpResponse, Responder,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
pub struct TournamentEntry {
    pub tournament: Tournament,
    pub last_activity: Instant,
}

/// In-memory state: tournaments by id.
pub type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Tournaments not accessed for this long are removed.
pub const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

pub fn new_state() -> AppState {
    Data::new(RwLock::new(HashMap::new()))
}

/// Drop tournaments idle for longer than `timeout`. Returns how many were removed.
pub fn remove_inactive(state: &AppState, timeout: Duration) -> usize {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return 0,
    };
    let before = g.len();
    g.retain(|_, entry| entry.last_activity.elapsed() < timeout);
    before - g.len()
}

/// Register all API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_zone_presets)
        .service(api_create_tournament)
        .service(api_get_tournament)
        .service(api_get_matchdays)
        .service(api_set_match_score)
        .service(api_get_standings)
        .service(api_set_zones)
        .service(api_suggest_zone);
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    #[serde(flatten)]
    form: TournamentForm,
    /// Roster as CSV (`name[,logo]`), appended to `teams`.
    #[serde(default)]
    roster_csv: Option<String>,
}

#[derive(Deserialize)]
struct ScoreBody {
    home_score: u32,
    away_score: u32,
}

#[derive(Deserialize)]
struct ZonesBody {
    zones: Vec<Zone>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match id.
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::MatchNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

/// Look up a tournament, refresh its activity time and hand it to `f`.
fn with_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    f(&mut entry.tournament)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-fixtures",
    })
}

#[get("/api/zones/presets")]
async fn api_zone_presets() -> impl Responder {
    HttpResponse::Ok().json(ZONE_PRESETS)
}

/// Create a tournament from form data and generate its calendar.
#[post("/api/tournaments")]
async fn api_create_tournament(
    state: AppState,
    body: Json<CreateTournamentBody>,
) -> HttpResponse {
    let CreateTournamentBody { mut form, roster_csv } = body.into_inner();
    if let Some(csv) = roster_csv {
        match read_roster_csv(csv.as_bytes()) {
            Ok(entries) => form.teams.extend(entries),
            Err(e) => return error_response(&e),
        }
    }
    let tournament = match create_tournament(form) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let response = HttpResponse::Ok().json(&tournament);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        tournament.id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    response
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(&*t))
}

/// Calendar grouped by matchday.
#[get("/api/tournaments/{id}/matchdays")]
async fn api_get_matchdays(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        HttpResponse::Ok().json(matches_by_matchday(&t.matches))
    })
}

/// Report a score; the match becomes finished.
#[put("/api/tournaments/{id}/matches/{match_id}/score")]
async fn api_set_match_score(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        match t.update_match_score(path.match_id, body.home_score, body.away_score) {
            Ok(()) => match t.get_match(path.match_id) {
                Some(m) => HttpResponse::Ok().json(m),
                None => error_response(&TournamentError::MatchNotFound(path.match_id)),
            },
            Err(e) => error_response(&e),
        }
    })
}

/// Standings with positions and zones.
#[get("/api/tournaments/{id}/standings")]
async fn api_get_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        HttpResponse::Ok().json(t.annotated_standings())
    })
}

/// Replace the zone set (validated first; nothing is saved on error).
#[put("/api/tournaments/{id}/zones")]
async fn api_set_zones(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<ZonesBody>,
) -> HttpResponse {
    let zones = body.into_inner().zones;
    with_tournament(&state, path.id, |t| match t.set_zones(zones) {
        Ok(()) => HttpResponse::Ok().json(&t.zones),
        Err(e) => error_response(&e),
    })
}

/// Next zone to offer in the zone editor; 204 when every position is covered.
#[get("/api/tournaments/{id}/zones/suggestion")]
async fn api_suggest_zone(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        match suggest_next_zone(&t.zones, t.teams.len()) {
            Some(zone) => HttpResponse::Ok().json(zone),
            None => HttpResponse::NoContent().finish(),
        }
    })
}
