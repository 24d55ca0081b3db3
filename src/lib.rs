//! Volleyball team draw web app: library with models, draw logic, and storage.

pub mod api;
pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    draw_teams, draw_teams_with_rng, parse_player_csv, parse_player_list, shuffled, validate_draw,
    Constraint, DrawError, DrawPreview, ImportError,
};
pub use models::{
    DrawConfig, DrawResult, DrawSettings, Gender, NewPlayer, Player, PlayerId, PlayerUpdate, Roster,
    RosterError, RosterStats, Team, TeamId, DEFAULT_PLAYERS_PER_TEAM, MIN_PLAYERS_PER_TEAM,
};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
