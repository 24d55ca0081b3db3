//! Team draw business logic: validation, the draw itself, and roster import.

mod draw;
mod import;
mod shuffle;
mod validate;

pub use draw::{draw_teams, draw_teams_with_rng};
pub use import::{parse_player_csv, parse_player_list, ImportError};
pub use shuffle::shuffled;
pub use validate::{validate_draw, Constraint, DrawError, DrawPreview};
