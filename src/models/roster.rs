//! Roster: the list of players available for drawing, and its edit operations.

use crate::models::player::{Gender, NewPlayer, Player, PlayerId, PlayerUpdate};
use serde::{Deserialize, Serialize};

/// Errors that can occur while editing the roster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// Player name is empty after trimming.
    EmptyName,
    /// No player with this id on the roster.
    PlayerNotFound(PlayerId),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::EmptyName => write!(f, "Player name cannot be empty"),
            RosterError::PlayerNotFound(_) => write!(f, "Player not found"),
        }
    }
}

impl std::error::Error for RosterError {}

/// Head counts shown next to the roster.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RosterStats {
    pub total: usize,
    pub male: usize,
    pub female: usize,
    pub seeded: usize,
}

/// Ordered list of players. Duplicate names are allowed; ids tell players apart.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Add a player with a fresh id. The name is trimmed and must not be empty.
    pub fn add_player(&mut self, draft: NewPlayer) -> Result<&Player, RosterError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        self.players.push(Player::new(name, draft.gender, draft.seeded));
        Ok(&self.players[self.players.len() - 1])
    }

    /// Add several players at once (e.g. after a list import). Nothing is added if any name is empty.
    pub fn add_players(&mut self, drafts: Vec<NewPlayer>) -> Result<usize, RosterError> {
        if drafts.iter().any(|d| d.name.trim().is_empty()) {
            return Err(RosterError::EmptyName);
        }
        let count = drafts.len();
        for draft in drafts {
            self.add_player(draft)?;
        }
        Ok(count)
    }

    /// Apply a partial update to one player.
    pub fn edit_player(&mut self, id: PlayerId, update: PlayerUpdate) -> Result<&Player, RosterError> {
        let name = match update.name {
            Some(ref n) if n.trim().is_empty() => return Err(RosterError::EmptyName),
            Some(ref n) => Some(n.trim().to_string()),
            None => None,
        };
        let p = self
            .get_player_mut(id)
            .ok_or(RosterError::PlayerNotFound(id))?;
        if let Some(name) = name {
            p.name = name;
        }
        if let Some(gender) = update.gender {
            p.gender = gender;
        }
        if let Some(seeded) = update.seeded {
            p.seeded = seeded;
        }
        Ok(p)
    }

    /// Remove a player by id.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, RosterError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(RosterError::PlayerNotFound(id))?;
        Ok(self.players.remove(idx))
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    pub fn stats(&self) -> RosterStats {
        let female = self.players.iter().filter(|p| p.gender == Gender::Female).count();
        RosterStats {
            total: self.players.len(),
            male: self.players.len() - female,
            female,
            seeded: self.players.iter().filter(|p| p.seeded).count(),
        }
    }
}
