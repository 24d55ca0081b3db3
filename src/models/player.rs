//! Player, Gender, and the draft/update shapes used to build a roster.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used for membership during a draw).
pub type PlayerId = Uuid;

/// Gender tag. `Female` is the category the "one woman per team" rule distributes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "M", alias = "m")]
    Male,
    #[serde(rename = "F", alias = "f")]
    Female,
}

/// A player on the roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub gender: Gender,
    /// Seeded players are spread one per team when that rule is on.
    pub seeded: bool,
}

impl Player {
    /// Create a new player with a fresh id.
    pub fn new(name: impl Into<String>, gender: Gender, seeded: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            gender,
            seeded,
        }
    }

    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }
}

/// A player that has not been added to the roster yet (no id).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub seeded: bool,
}

impl NewPlayer {
    /// Draft with the defaults used by list import: male, not seeded.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Partial edit of a player; `None` fields are left unchanged.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub seeded: Option<bool>,
}
