//! The draw: split the roster into teams under the active rules, plus a leftover group.

use crate::logic::shuffle::shuffled;
use crate::logic::validate::{plan, DrawError};
use crate::models::{DrawConfig, DrawResult, DrawSettings, Player, PlayerId, Team, TeamId};
use chrono::Utc;
use rand::Rng;
use std::collections::HashSet;

/// Draw teams using the thread-local RNG. See [`draw_teams_with_rng`].
pub fn draw_teams(
    players: &[Player],
    players_per_team: usize,
    settings: &DrawSettings,
) -> Result<DrawResult, DrawError> {
    draw_teams_with_rng(players, players_per_team, settings, &mut rand::thread_rng())
}

/// Draw teams with the given RNG.
///
/// 1. Re-check feasibility (same checks as `validate_draw`) and get the team count.
/// 2. Shuffle the seeded, female and unconstrained pools independently.
/// 3. Team `i` gets `seeded[i]` and/or `female[i]` for each active rule.
/// 4. Everyone not yet placed is shuffled together and fills the teams in order.
/// 5. Whoever is still unplaced is a leftover (in roster order).
pub fn draw_teams_with_rng<R: Rng + ?Sized>(
    players: &[Player],
    players_per_team: usize,
    settings: &DrawSettings,
    rng: &mut R,
) -> Result<DrawResult, DrawError> {
    let (pools, max_teams) = plan(players, players_per_team, settings)?;

    let seeded = shuffled(&pools.seeded, rng);
    let female = shuffled(&pools.female, rng);
    let unconstrained = shuffled(&pools.unconstrained, rng);

    let mut used: HashSet<PlayerId> = HashSet::with_capacity(players.len());
    let mut teams: Vec<Team> = Vec::with_capacity(max_teams);

    for i in 0..max_teams {
        let mut team = Team::new(i as TeamId + 1);
        if settings.require_seeded_per_team {
            if let Some(p) = seeded.get(i) {
                if used.insert(p.id) {
                    team.seeded_player = Some(p.id);
                    team.players.push((*p).clone());
                }
            }
        }
        if settings.require_female_per_team {
            if let Some(p) = female.get(i) {
                if used.insert(p.id) {
                    team.female_player = Some(p.id);
                    team.players.push((*p).clone());
                }
            }
        }
        teams.push(team);
    }

    let remaining: Vec<&Player> = seeded
        .iter()
        .chain(female.iter())
        .chain(unconstrained.iter())
        .filter(|p| !used.contains(&p.id))
        .copied()
        .collect();
    let mut pool = shuffled(&remaining, rng).into_iter();

    for team in &mut teams {
        while team.len() < players_per_team {
            let Some(p) = pool.next() else { break };
            if used.insert(p.id) {
                team.players.push(p.clone());
            }
        }
    }

    let leftovers: Vec<Player> = players
        .iter()
        .filter(|p| !used.contains(&p.id))
        .cloned()
        .collect();

    log::debug!(
        "Drew {} team(s) of {} from {} player(s), {} left over",
        teams.len(),
        players_per_team,
        players.len(),
        leftovers.len()
    );

    Ok(DrawResult {
        teams,
        leftovers,
        config: DrawConfig {
            players_per_team,
            settings: *settings,
        },
        drawn_at: Utc::now(),
    })
}
