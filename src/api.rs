//! HTTP JSON API: roster, import preview, draw settings, and team draws.
//!
//! State lives in `Data<RwLock<AppData>>`; every change is written through to the store
//! before it becomes visible. Errors are `{ "error": "<reason>" }` bodies.

use crate::logic::{draw_teams, parse_player_csv, parse_player_list, validate_draw};
use crate::models::{
    DrawSettings, NewPlayer, Player, PlayerId, PlayerUpdate, Roster, RosterError, RosterStats,
    DEFAULT_PLAYERS_PER_TEAM,
};
use crate::store::{self, KeyValueStore};
use actix_web::{
    delete,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    get, post, put,
    web::{self, Bytes, Data, Json, Path, Query},
    HttpRequest, HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Roster and settings held in memory, plus the store they are saved to.
pub struct AppData {
    roster: Roster,
    settings: DrawSettings,
    store: Box<dyn KeyValueStore>,
}

impl AppData {
    pub fn new(roster: Roster, settings: DrawSettings, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            roster,
            settings,
            store,
        }
    }
}

pub type AppState = Data<RwLock<AppData>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct RosterResponse<'a> {
    players: &'a [Player],
    stats: RosterStats,
}

#[derive(Deserialize)]
struct AddPlayersBody {
    players: Vec<NewPlayer>,
}

#[derive(Deserialize)]
struct ImportListBody {
    text: String,
}

/// Draw request; `players_per_team` falls back to the default when omitted.
#[derive(Deserialize)]
struct DrawRequest {
    #[serde(default = "default_players_per_team")]
    players_per_team: usize,
}

fn default_players_per_team() -> usize {
    DEFAULT_PLAYERS_PER_TEAM
}

/// Path segment: player id (e.g. /api/players/{player_id})
#[derive(Deserialize)]
struct PlayerPath {
    player_id: PlayerId,
}

fn bad_request(msg: impl ToString) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": msg.to_string() }))
}

fn roster_error(e: RosterError) -> HttpResponse {
    match e {
        RosterError::PlayerNotFound(_) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        RosterError::EmptyName => bad_request(e),
    }
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

/// Malformed or mistyped JSON bodies get the same `{ "error" }` shape as other 400s.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let resp = bad_request(&err);
    InternalError::from_response(err, resp).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let resp = bad_request(&err);
    InternalError::from_response(err, resp).into()
}

fn roster_response(roster: &Roster) -> HttpResponse {
    HttpResponse::Ok().json(RosterResponse {
        players: roster.players(),
        stats: roster.stats(),
    })
}

/// Save `roster` and, only if that worked, make it the current roster.
fn commit_roster(app: &mut AppData, roster: Roster) -> HttpResponse {
    if let Err(e) = store::save_roster(app.store.as_ref(), &roster) {
        log::error!("Failed to save roster: {}", e);
        return HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }));
    }
    app.roster = roster;
    roster_response(&app.roster)
}

fn commit_settings(app: &mut AppData, settings: DrawSettings) -> HttpResponse {
    if let Err(e) = store::save_settings(app.store.as_ref(), &settings) {
        log::error!("Failed to save settings: {}", e);
        return HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }));
    }
    app.settings = settings;
    HttpResponse::Ok().json(app.settings)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "team-draw-web",
    })
}

/// List all players with head counts.
#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    roster_response(&g.roster)
}

/// Add one player.
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<NewPlayer>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut roster = g.roster.clone();
    if let Err(e) = roster.add_player(body.into_inner()) {
        return roster_error(e);
    }
    commit_roster(&mut g, roster)
}

/// Add several players at once (confirming an import preview).
#[post("/api/players/batch")]
async fn api_add_players(state: AppState, body: Json<AddPlayersBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut roster = g.roster.clone();
    match roster.add_players(body.into_inner().players) {
        Ok(n) => log::info!("Added {} player(s) from batch", n),
        Err(e) => return roster_error(e),
    }
    commit_roster(&mut g, roster)
}

/// Edit a player's name, gender or seeded flag.
#[put("/api/players/{player_id}")]
async fn api_edit_player(state: AppState, path: Path<PlayerPath>, body: Json<PlayerUpdate>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut roster = g.roster.clone();
    if let Err(e) = roster.edit_player(path.player_id, body.into_inner()) {
        return roster_error(e);
    }
    commit_roster(&mut g, roster)
}

/// Remove a player by id.
#[delete("/api/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut roster = g.roster.clone();
    if let Err(e) = roster.remove_player(path.player_id) {
        return roster_error(e);
    }
    commit_roster(&mut g, roster)
}

/// Remove every player.
#[delete("/api/players")]
async fn api_clear_players(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    commit_roster(&mut g, Roster::new())
}

/// Parse a pasted list into drafts (not added until confirmed via /api/players/batch).
#[post("/api/import/list")]
async fn api_import_list(body: Json<ImportListBody>) -> HttpResponse {
    let drafts = parse_player_list(&body.text);
    HttpResponse::Ok().json(drafts)
}

/// Parse a CSV body (`name,gender,seeded`) into drafts.
#[post("/api/import/csv")]
async fn api_import_csv(body: Bytes) -> HttpResponse {
    match parse_player_csv(body.as_ref()) {
        Ok(drafts) => HttpResponse::Ok().json(drafts),
        Err(e) => bad_request(e),
    }
}

#[get("/api/settings")]
async fn api_get_settings(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(g.settings)
}

/// Replace the draw settings. Missing fields fall back to their defaults.
#[put("/api/settings")]
async fn api_set_settings(state: AppState, body: Json<DrawSettings>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    commit_settings(&mut g, body.into_inner())
}

#[post("/api/settings/reset")]
async fn api_reset_settings(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    commit_settings(&mut g, DrawSettings::default())
}

/// How many teams a draw would make right now (400 with the reason if none).
#[get("/api/draw/preview")]
async fn api_draw_preview(state: AppState, query: Query<DrawRequest>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match validate_draw(g.roster.players(), query.players_per_team, &g.settings) {
        Ok(preview) => HttpResponse::Ok().json(preview),
        Err(e) => bad_request(e),
    }
}

/// Validate, then draw teams from a snapshot of the current roster.
#[post("/api/draw")]
async fn api_draw(state: AppState, body: Json<DrawRequest>) -> HttpResponse {
    let players_per_team = body.players_per_team;
    let (players, settings) = {
        let g = match state.read() {
            Ok(guard) => guard,
            Err(_) => return lock_error(),
        };
        (g.roster.players().to_vec(), g.settings)
    };
    if let Err(e) = validate_draw(&players, players_per_team, &settings) {
        return bad_request(e);
    }
    match draw_teams(&players, players_per_team, &settings) {
        Ok(result) => {
            log::info!(
                "Drew {} team(s) of {}, {} player(s) left over",
                result.teams.len(),
                players_per_team,
                result.leftovers.len()
            );
            HttpResponse::Ok().json(result)
        }
        Err(e) => bad_request(e),
    }
}

/// Register every route and the JSON/query error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .service(api_health)
        .service(api_list_players)
        .service(api_add_player)
        .service(api_add_players)
        .service(api_edit_player)
        .service(api_remove_player)
        .service(api_clear_players)
        .service(api_import_list)
        .service(api_import_csv)
        .service(api_get_settings)
        .service(api_set_settings)
        .service(api_reset_settings)
        .service(api_draw_preview)
        .service(api_draw);
}
