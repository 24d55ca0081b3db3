//! Draw settings (persisted rule switches) and the full draw configuration.

use serde::{Deserialize, Serialize};

/// Team size the API uses when the caller does not send one.
pub const DEFAULT_PLAYERS_PER_TEAM: usize = 6;

/// Smallest team size a draw accepts.
pub const MIN_PLAYERS_PER_TEAM: usize = 2;

fn default_true() -> bool {
    true
}

/// Composition rules applied to every team. Missing fields deserialize to the defaults.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawSettings {
    /// Each team gets one female player.
    #[serde(default = "default_true")]
    pub require_female_per_team: bool,
    /// Each team gets one seeded player.
    #[serde(default = "default_true")]
    pub require_seeded_per_team: bool,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            require_female_per_team: true,
            require_seeded_per_team: true,
        }
    }
}

impl DrawSettings {
    /// Both rules off: teams are drawn purely at random.
    pub fn unconstrained() -> Self {
        Self {
            require_female_per_team: false,
            require_seeded_per_team: false,
        }
    }
}

/// Everything a single draw was run with; echoed back in the result.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawConfig {
    pub players_per_team: usize,
    pub settings: DrawSettings,
}
