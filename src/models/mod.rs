//! Data structures for the team draw: players, roster, settings, teams, draw result.

mod player;
mod roster;
mod settings;
mod team;

pub use player::{Gender, NewPlayer, Player, PlayerId, PlayerUpdate};
pub use roster::{Roster, RosterError, RosterStats};
pub use settings::{DrawConfig, DrawSettings, DEFAULT_PLAYERS_PER_TEAM, MIN_PLAYERS_PER_TEAM};
pub use team::{DrawResult, Team, TeamId};
