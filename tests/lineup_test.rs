//! Integration tests for lineup selection and bench partitioning

use ffl_lineup::{
    lineup::{LineupOptimizer, LineupSlot},
    roster::Player,
    LeagueFormat, LeagueSettings, Position,
};
use serde_json::json;
use std::collections::HashSet;

fn roster_from_json(value: serde_json::Value) -> Vec<Player> {
    serde_json::from_value(value).unwrap()
}

/// A messy roster the way upstream JSON exports actually look.
fn messy_roster() -> Vec<Player> {
    roster_from_json(json!([
        {"playerId": 101, "playerName": "Lamar Jackson", "position": "qb", "projectedPoints": 390.1},
        {"playerId": 102, "playerName": "Jordan Love", "position": "QB", "projectedPoints": "301.4"},
        {"playerId": 201, "playerName": "Saquon Barkley", "position": "RB", "projectedPoints": 290},
        {"playerId": 202, "playerName": "Jahmyr Gibbs", "position": "RB", "projectedPoints": 285.5},
        {"playerId": 203, "playerName": "James Cook", "position": "RB", "projectedPoints": null},
        {"playerId": 301, "playerName": "Ja'Marr Chase", "position": "WR", "projectedPoints": 300},
        {"playerId": 302, "playerName": "Nico Collins", "position": "WR", "projectedPoints": 240},
        {"playerId": 303, "playerName": "Jaxon Smith-Njigba", "position": "wr", "projectedPoints": 230},
        {"playerId": 401, "playerName": "Trey McBride", "position": "TE", "projectedPoints": 190},
        {"playerId": 501, "playerName": "Brandon Aubrey", "position": "K", "projectedPoints": 150},
        {"playerId": 601, "playerName": "Texans D/ST", "position": "D/ST", "projectedPoints": 110},
        {"playerId": 701, "playerName": "Practice Squad", "position": "", "projectedPoints": 500},
        {"playerId": 702, "playerName": "Injured Reserve", "projectedPoints": 50}
    ]))
}

#[test]
fn test_partition_holds_for_every_format() {
    let optimizer = LineupOptimizer::new();
    let roster = messy_roster();
    let all_keys: HashSet<&str> = roster.iter().map(Player::key).collect();

    for format in LeagueFormat::ALL {
        let settings = LeagueSettings::new(format);
        let lineup = optimizer.calculate_optimal_lineup(&roster, &settings);
        let bench = optimizer.get_bench_players(&roster, &lineup);

        let starters: Vec<&str> = lineup.players().map(Player::key).collect();
        let starter_set: HashSet<&str> = starters.iter().copied().collect();
        assert_eq!(starters.len(), starter_set.len(), "{format}: duplicate starter");

        let bench_set: HashSet<&str> = bench.iter().map(Player::key).collect();
        assert!(starter_set.is_disjoint(&bench_set), "{format}: overlap");

        let union: HashSet<&str> = starter_set.union(&bench_set).copied().collect();
        assert_eq!(union, all_keys, "{format}: union is not the roster");
    }
}

#[test]
fn test_messy_roster_standard_lineup() {
    let optimizer = LineupOptimizer::new();
    let roster = messy_roster();
    let lineup = optimizer.calculate_optimal_lineup(&roster, &LeagueSettings::default());

    let qb = lineup.get(LineupSlot::QB).unwrap();
    assert_eq!(qb[0].display_name(), "Lamar Jackson");

    let rbs: Vec<&str> = lineup
        .get(LineupSlot::RB)
        .unwrap()
        .iter()
        .map(|p| p.display_name())
        .collect();
    assert_eq!(rbs, vec!["Saquon Barkley", "Jahmyr Gibbs"]);

    // James Cook has null points (0) and loses FLEX to the third WR
    let flex = lineup.get(LineupSlot::FLEX).unwrap();
    assert_eq!(flex.len(), 1);
    assert_eq!(flex[0].display_name(), "Jaxon Smith-Njigba");

    assert_eq!(lineup.get(LineupSlot::DEF).unwrap()[0].display_name(), "Texans D/ST");

    let bench: Vec<String> = optimizer
        .get_bench_players(&roster, &lineup)
        .iter()
        .map(|p| p.display_name().to_string())
        .collect();
    assert_eq!(
        bench,
        vec!["Jordan Love", "James Cook", "Practice Squad", "Injured Reserve"]
    );
}

#[test]
fn test_superflex_uses_second_quarterback() {
    let optimizer = LineupOptimizer::new();
    let roster = messy_roster();
    let lineup =
        optimizer.calculate_optimal_lineup(&roster, &LeagueSettings::new(LeagueFormat::Superflex));

    let superflex = lineup.get(LineupSlot::SUPERFLEX).unwrap();
    assert_eq!(superflex[0].display_name(), "Jordan Love");
    assert_eq!(superflex[0].projected_points, 301.4);
}

#[test]
fn test_unknown_format_behaves_like_standard() {
    let optimizer = LineupOptimizer::new();
    let roster = messy_roster();
    let bogus: LeagueSettings = serde_json::from_value(json!({"leagueType": "bogus"})).unwrap();

    assert_eq!(
        optimizer.calculate_optimal_lineup(&roster, &bogus),
        optimizer.calculate_optimal_lineup(&roster, &LeagueSettings::default())
    );
    assert_eq!(
        optimizer.analyze_lineup(&Default::default(), &bogus).total_starters,
        9
    );
}

#[test]
fn test_empty_roster_contract() {
    let optimizer = LineupOptimizer::new();
    let lineup = optimizer.calculate_optimal_lineup(&[], &LeagueSettings::default());

    let slots: Vec<LineupSlot> = lineup.iter().map(|(slot, _)| slot).collect();
    assert_eq!(
        slots,
        Position::ALL.iter().map(|&p| LineupSlot::from(p)).collect::<Vec<_>>()
    );
    assert!(lineup.iter().all(|(_, players)| players.is_empty()));
    assert!(optimizer.get_bench_players(&[], &lineup).is_empty());
    assert_eq!(optimizer.calculate_total_projected_points(&lineup), 0.0);
}

#[test]
fn test_starter_and_bench_points_add_up_to_roster() {
    let optimizer = LineupOptimizer::new();
    let roster = messy_roster();
    let lineup = optimizer.calculate_optimal_lineup(&roster, &LeagueSettings::default());
    let bench = optimizer.get_bench_players(&roster, &lineup);

    let total = optimizer.calculate_total_projected_points(&roster);
    let split = optimizer.calculate_total_projected_points(&lineup)
        + optimizer.calculate_total_projected_points(&bench);
    assert!((total - split).abs() < 1e-9);
}
