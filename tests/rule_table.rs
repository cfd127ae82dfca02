mod common;

use common::{SimBuilder, STRATEGIES};
use lifesaver_lib::core::{RuleConfig, Strategy};

/// Neighbour offsets around the centre of a 5x5 grid, in fill order.
const AROUND: [(usize, usize); 8] = [
    (2, 2),
    (3, 2),
    (4, 2),
    (2, 3),
    (4, 3),
    (2, 4),
    (3, 4),
    (4, 4),
];

/// Steps a 5x5 grid whose centre has exactly `count` live neighbours and
/// reports whether the centre is alive afterwards.
fn centre_after_step(rule: RuleConfig, strategy: Strategy, alive: bool, count: usize) -> bool {
    let mut builder = SimBuilder::new(5, 5).with_rule(rule).with_strategy(strategy);
    for &(x, y) in &AROUND[..count] {
        builder = builder.alive(x, y);
    }
    if alive {
        builder = builder.alive(3, 3);
    }
    let mut sim = builder.build();
    assert_eq!(sim.cell(3, 3).unwrap().neighbors() as usize, count);
    sim.step();
    assert_invariants!(sim);
    sim.is_alive(3, 3).unwrap()
}

#[test]
fn test_conway_rule_table() {
    let rule = RuleConfig::default();
    for strategy in STRATEGIES {
        for count in 0..=8 {
            assert_eq!(
                centre_after_step(rule, strategy, false, count),
                count == 3,
                "{strategy:?}: dead cell with {count} neighbours"
            );
            assert_eq!(
                centre_after_step(rule, strategy, true, count),
                count == 2 || count == 3,
                "{strategy:?}: live cell with {count} neighbours"
            );
        }
    }
}

#[test]
fn test_custom_rule_table() {
    // Born on 3..=4, survive on 1..=5.
    let rule: RuleConfig = "B3-4/S1-5".parse().unwrap();
    for strategy in STRATEGIES {
        for count in 0..=8 {
            assert_eq!(
                centre_after_step(rule, strategy, false, count),
                (3..=4).contains(&count),
                "{strategy:?}: dead cell with {count} neighbours"
            );
            assert_eq!(
                centre_after_step(rule, strategy, true, count),
                (1..=5).contains(&count),
                "{strategy:?}: live cell with {count} neighbours"
            );
        }
    }
}

#[test]
fn test_empty_survival_band_kills_everything() {
    // death_low == death_high + 1: no count lets a live cell survive.
    let rule = RuleConfig::new(3, 3, 4, 3);
    rule.validate().unwrap();
    for strategy in STRATEGIES {
        for count in 0..=8 {
            assert!(!centre_after_step(rule, strategy, true, count));
        }
    }
}
