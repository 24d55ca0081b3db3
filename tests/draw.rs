//! Integration tests for the draw: partition, rules, team count, and the worked scenarios.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use team_draw_web::{
    draw_teams, draw_teams_with_rng, shuffled, validate_draw, Constraint, DrawError, DrawResult,
    DrawSettings, Gender, Player, PlayerId,
};

fn players(n: usize, gender: Gender, seeded: bool, prefix: &str) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("{prefix}{i}"), gender, seeded))
        .collect()
}

/// Roster with disjoint groups: seeded men, non-seeded women, plain men.
fn roster(seeded: usize, female: usize, others: usize) -> Vec<Player> {
    let mut all = players(seeded, Gender::Male, true, "S");
    all.extend(players(female, Gender::Female, false, "F"));
    all.extend(players(others, Gender::Male, false, "M"));
    all
}

fn assert_partition(roster: &[Player], result: &DrawResult) {
    let mut seen: HashSet<PlayerId> = HashSet::new();
    for team in &result.teams {
        for p in &team.players {
            assert!(seen.insert(p.id), "{} appears twice", p.name);
        }
    }
    for p in &result.leftovers {
        assert!(seen.insert(p.id), "{} is both drawn and left over", p.name);
        assert!(result.team_of(p.id).is_none());
    }
    for team in &result.teams {
        assert!(!team.is_empty());
        for p in &team.players {
            assert_eq!(result.team_of(p.id).map(|t| t.id), Some(team.id));
        }
    }
    let expected: HashSet<PlayerId> = roster.iter().map(|p| p.id).collect();
    assert_eq!(seen, expected);
}

#[test]
fn scenario_a_both_rules_exact_fit() {
    let r = roster(4, 4, 0);
    let result = draw_teams(&r, 2, &DrawSettings::default()).unwrap();
    assert_eq!(result.teams.len(), 4);
    assert!(result.leftovers.is_empty());
    for team in &result.teams {
        assert_eq!(team.len(), 2);
        assert!(team.players.iter().any(|p| p.seeded));
        assert!(team.players.iter().any(|p| p.is_female()));
    }
    assert_partition(&r, &result);
}

#[test]
fn scenario_b_one_team_limited_by_rules() {
    let r = roster(1, 1, 10);
    let result = draw_teams(&r, 6, &DrawSettings::default()).unwrap();
    assert_eq!(result.teams.len(), 1);
    assert_eq!(result.teams[0].len(), 6);
    assert_eq!(result.leftovers.len(), 6);
    assert_partition(&r, &result);
}

#[test]
fn scenario_c_no_seeded_players() {
    let r = roster(0, 5, 10);
    let settings = DrawSettings::default();
    assert_eq!(
        draw_teams(&r, 3, &settings).unwrap_err(),
        DrawError::ConstraintUnsatisfiable(Constraint::Seeded)
    );
}

#[test]
fn scenario_d_team_size_one() {
    let r = roster(4, 4, 4);
    assert!(matches!(
        draw_teams(&r, 1, &DrawSettings::default()),
        Err(DrawError::TeamSizeTooSmall { players_per_team: 1 })
    ));
}

#[test]
fn scenario_e_no_rules() {
    let r = roster(2, 3, 5);
    let result = draw_teams(&r, 3, &DrawSettings::unconstrained()).unwrap();
    assert_eq!(result.teams.len(), 3);
    assert_eq!(result.leftovers.len(), 1);
    for team in &result.teams {
        assert_eq!(team.len(), 3);
        assert!(team.seeded_player.is_none());
        assert!(team.female_player.is_none());
    }
    assert_partition(&r, &result);
}

#[test]
fn seeded_players_are_drawn_when_seeded_rule_is_off() {
    // Only seeded players on the roster: they must still fill teams.
    let r = players(6, Gender::Male, true, "S");
    let settings = DrawSettings::unconstrained();
    let result = draw_teams(&r, 3, &settings).unwrap();
    assert_eq!(result.teams.len(), 2);
    assert!(result.leftovers.is_empty());
    assert_partition(&r, &result);
}

#[test]
fn female_rule_only() {
    let r = roster(0, 2, 9);
    let settings = DrawSettings {
        require_female_per_team: true,
        require_seeded_per_team: false,
    };
    let result = draw_teams(&r, 4, &settings).unwrap();
    assert_eq!(result.teams.len(), 2);
    assert_eq!(result.leftovers.len(), 3);
    for team in &result.teams {
        let id = team.female_player.expect("female slot filled");
        assert!(team.contains(id));
        assert!(team.seeded_player.is_none());
    }
    assert_partition(&r, &result);
}

#[test]
fn team_ids_are_sequential_from_one() {
    let r = roster(3, 3, 6);
    let result = draw_teams(&r, 4, &DrawSettings::default()).unwrap();
    let ids: Vec<u32> = result.teams.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn rule_slots_point_at_members() {
    let r = roster(3, 5, 7);
    let result = draw_teams(&r, 5, &DrawSettings::default()).unwrap();
    for team in &result.teams {
        let seeded = team.seeded_player.expect("seeded slot filled");
        let female = team.female_player.expect("female slot filled");
        assert!(team.contains(seeded));
        assert!(team.contains(female));
        assert_ne!(seeded, female);
    }
}

#[test]
fn seeded_woman_only_counts_as_seeded() {
    // The only woman is seeded, so no one can fill the female slot.
    let mut r = vec![Player::new("Ana", Gender::Female, true)];
    r.extend(players(5, Gender::Male, false, "M"));
    let settings = DrawSettings::default();
    assert_eq!(draw_teams(&r, 3, &settings).unwrap_err(), DrawError::NoFeasibleTeams);
    assert_eq!(validate_draw(&r, 3, &settings).unwrap_err(), DrawError::NoFeasibleTeams);
}

#[test]
fn seeded_woman_is_drawn_once() {
    let mut r = vec![
        Player::new("Ana", Gender::Female, true),
        Player::new("Bia", Gender::Female, false),
    ];
    r.extend(players(2, Gender::Male, false, "M"));
    let result = draw_teams(&r, 4, &DrawSettings::default()).unwrap();
    assert_eq!(result.teams.len(), 1);
    assert_eq!(result.teams[0].len(), 4);
    assert_partition(&r, &result);
}

#[test]
fn team_count_does_not_depend_on_rng() {
    let r = roster(3, 4, 8);
    let settings = DrawSettings::default();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = draw_teams_with_rng(&r, 4, &settings, &mut rng).unwrap();
        assert_eq!(result.teams.len(), 3);
        assert_eq!(result.leftovers.len(), 3);
        assert!(result.teams.iter().all(|t| t.len() == 4));
        assert_partition(&r, &result);
    }
}

#[test]
fn same_seed_gives_same_draw() {
    let r = roster(2, 2, 8);
    let settings = DrawSettings::default();
    let a = draw_teams_with_rng(&r, 5, &settings, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = draw_teams_with_rng(&r, 5, &settings, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a.teams, b.teams);
    assert_eq!(a.leftovers, b.leftovers);
}

#[test]
fn leftovers_keep_roster_order() {
    let r = roster(1, 1, 8);
    let result = draw_teams(&r, 3, &DrawSettings::default()).unwrap();
    let positions: Vec<usize> = result
        .leftovers
        .iter()
        .map(|l| r.iter().position(|p| p.id == l.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn result_echoes_config() {
    let r = roster(2, 2, 4);
    let settings = DrawSettings {
        require_female_per_team: false,
        require_seeded_per_team: true,
    };
    let result = draw_teams(&r, 4, &settings).unwrap();
    assert_eq!(result.config.players_per_team, 4);
    assert_eq!(result.config.settings, settings);
}

#[test]
fn draw_does_not_touch_roster() {
    let r = roster(2, 2, 4);
    let before = r.clone();
    let _ = draw_teams(&r, 4, &DrawSettings::default()).unwrap();
    assert_eq!(r, before);
}

#[test]
fn empty_roster_without_rules_cannot_form_teams() {
    assert_eq!(
        draw_teams(&[], 2, &DrawSettings::unconstrained()).unwrap_err(),
        DrawError::NoFeasibleTeams
    );
}

#[test]
fn shuffled_is_a_permutation() {
    let items: Vec<u32> = (0..50).collect();
    let mut rng = StdRng::seed_from_u64(3);
    let out = shuffled(&items, &mut rng);
    assert_eq!(items, (0..50).collect::<Vec<u32>>());
    let mut sorted = out.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, items);
    assert_ne!(out, items);
}
