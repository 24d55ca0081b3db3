//! Team and DrawResult.

use crate::models::player::{Player, PlayerId};
use crate::models::settings::DrawConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Team number within one draw (1-based).
pub type TeamId = u32;

/// One drawn team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub players: Vec<Player>,
    /// Member placed to satisfy the seeded rule, if that rule was on.
    pub seeded_player: Option<PlayerId>,
    /// Member placed to satisfy the female rule, if that rule was on.
    pub female_player: Option<PlayerId>,
}

impl Team {
    pub fn new(id: TeamId) -> Self {
        Self {
            id,
            players: Vec::new(),
            seeded_player: None,
            female_player: None,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}

/// Outcome of one draw: teams, players left out, and the configuration used.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrawResult {
    pub teams: Vec<Team>,
    /// Roster players not assigned to any team, in roster order.
    pub leftovers: Vec<Player>,
    pub config: DrawConfig,
    pub drawn_at: DateTime<Utc>,
}

impl DrawResult {
    /// Team that `id` was drawn into, if any.
    pub fn team_of(&self, id: PlayerId) -> Option<&Team> {
        self.teams.iter().find(|t| t.contains(id))
    }
}
