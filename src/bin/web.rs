//! Single binary web server: JSON API for the roster, draw settings, and team draws.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Roster and settings are saved as JSON files under DATA_DIR (default `data`).

use actix_web::{web::Data, App, HttpServer};
use std::sync::RwLock;
use team_draw_web::{
    api::{self, AppData},
    store::{self, FileStore},
    DrawSettings, Roster,
};

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    "data".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| default_data_dir());

    let file_store = FileStore::open(&data_dir).map_err(std::io::Error::other)?;
    let roster = store::load_roster(&file_store).unwrap_or_else(|e| {
        log::warn!("Could not load roster from {}: {}; starting empty", data_dir, e);
        Roster::new()
    });
    let settings = store::load_settings(&file_store).unwrap_or_else(|e| {
        log::warn!("Could not load settings from {}: {}; using defaults", data_dir, e);
        DrawSettings::default()
    });
    log::info!("Loaded {} player(s) from {}", roster.len(), data_dir);

    let state = Data::new(RwLock::new(AppData::new(roster, settings, Box::new(file_store))));

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
        .bind(bind)?
        .run()
        .await
}
