//! Feasibility of a draw: the error kinds, the player pools, and the up-front validator.

use crate::models::{DrawSettings, Player, MIN_PLAYERS_PER_TEAM};
use serde::{Deserialize, Serialize};

/// Which per-team rule could not be satisfied.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    Seeded,
    Female,
}

/// Reasons a draw cannot be made. All are unmet preconditions, never internal faults.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DrawError {
    /// Requested team size is below 2.
    TeamSizeTooSmall { players_per_team: usize },
    /// A rule is on but the roster has nobody of that kind.
    ConstraintUnsatisfiable(Constraint),
    /// The rules and roster size leave zero formable teams.
    NoFeasibleTeams,
    /// Roster is smaller than the number of players the teams need.
    InsufficientPlayers { needed: usize, available: usize },
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawError::TeamSizeTooSmall { .. } => {
                write!(f, "Team size too small: each team needs at least {} players", MIN_PLAYERS_PER_TEAM)
            }
            DrawError::ConstraintUnsatisfiable(Constraint::Seeded) => write!(f, "No seeded players available"),
            DrawError::ConstraintUnsatisfiable(Constraint::Female) => write!(f, "No female players available"),
            DrawError::NoFeasibleTeams => write!(f, "Cannot form any team under current configuration"),
            DrawError::InsufficientPlayers { needed, available } => {
                write!(f, "Insufficient players: need {}, have {}", needed, available)
            }
        }
    }
}

impl std::error::Error for DrawError {}

/// What a draw with the given input would produce (returned by a successful validation).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawPreview {
    pub max_teams: usize,
    pub players_needed: usize,
    pub leftovers: usize,
}

/// Roster split into disjoint groups. A seeded woman counts only as seeded.
pub(crate) struct Pools<'a> {
    pub seeded: Vec<&'a Player>,
    pub female: Vec<&'a Player>,
    pub unconstrained: Vec<&'a Player>,
}

impl<'a> Pools<'a> {
    pub fn partition(players: &'a [Player]) -> Self {
        let mut pools = Pools {
            seeded: Vec::new(),
            female: Vec::new(),
            unconstrained: Vec::new(),
        };
        for p in players {
            if p.seeded {
                pools.seeded.push(p);
            } else if p.is_female() {
                pools.female.push(p);
            } else {
                pools.unconstrained.push(p);
            }
        }
        pools
    }

    /// Most teams that can be formed: one per `players_per_team` players, capped by each active rule's pool.
    pub fn max_teams(&self, roster_len: usize, players_per_team: usize, settings: &DrawSettings) -> usize {
        let mut max_teams = roster_len / players_per_team;
        if settings.require_seeded_per_team {
            max_teams = max_teams.min(self.seeded.len());
        }
        if settings.require_female_per_team {
            max_teams = max_teams.min(self.female.len());
        }
        max_teams
    }
}

/// Run every feasibility check in order and return the pools plus the team count.
///
/// Shared by `validate_draw` and the drawer so both report the same error for the same input.
pub(crate) fn plan<'a>(
    players: &'a [Player],
    players_per_team: usize,
    settings: &DrawSettings,
) -> Result<(Pools<'a>, usize), DrawError> {
    if players_per_team < MIN_PLAYERS_PER_TEAM {
        return Err(DrawError::TeamSizeTooSmall { players_per_team });
    }
    if settings.require_seeded_per_team && !players.iter().any(|p| p.seeded) {
        return Err(DrawError::ConstraintUnsatisfiable(Constraint::Seeded));
    }
    if settings.require_female_per_team && !players.iter().any(|p| p.is_female()) {
        return Err(DrawError::ConstraintUnsatisfiable(Constraint::Female));
    }

    let pools = Pools::partition(players);
    let max_teams = pools.max_teams(players.len(), players_per_team, settings);
    if max_teams == 0 {
        return Err(DrawError::NoFeasibleTeams);
    }

    // Guard only: max_teams never exceeds len / players_per_team.
    let needed = max_teams * players_per_team;
    if players.len() < needed {
        return Err(DrawError::InsufficientPlayers {
            needed,
            available: players.len(),
        });
    }
    Ok((pools, max_teams))
}

/// Check whether a draw is possible without drawing. No side effects.
///
/// Checks run in order: team size, seeded rule, female rule, zero teams, roster size.
/// The first failure is returned.
pub fn validate_draw(
    players: &[Player],
    players_per_team: usize,
    settings: &DrawSettings,
) -> Result<DrawPreview, DrawError> {
    let (_, max_teams) = plan(players, players_per_team, settings)?;
    let players_needed = max_teams * players_per_team;
    Ok(DrawPreview {
        max_teams,
        players_needed,
        leftovers: players.len() - players_needed,
    })
}
