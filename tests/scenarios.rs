mod common;

use common::{live_cells, SimBuilder, STRATEGIES};
use lifesaver_lib::core::Cell;
use lifesaver_lib::data::{fade_color, ALIVE_COLOR, FRESH_DEATH};

#[test]
fn test_blinker_full_grid() {
    for strategy in STRATEGIES {
        let mut sim = SimBuilder::new(5, 5)
            .with_strategy(strategy)
            .pattern(2, 3, "###")
            .build();

        let report = sim.step();
        assert_eq!((report.births, report.deaths, report.reseeded), (2, 2, 0));
        for y in 1..=5 {
            for x in 1..=5 {
                let cell = sim.cell(x, y).unwrap();
                match (x, y) {
                    (3, 2) | (3, 3) | (3, 4) => {
                        assert!(cell.is_alive(), "{strategy:?} ({x}, {y})");
                        assert_eq!(cell.color().packed(), ALIVE_COLOR);
                    }
                    (2, 3) | (4, 3) => {
                        assert_fade_level!(sim, x, y, FRESH_DEATH);
                        assert_eq!(cell.color().packed(), fade_color(FRESH_DEATH));
                    }
                    _ => assert_eq!(cell.with_neighbors(0), Cell::DEAD, "{strategy:?} ({x}, {y})"),
                }
            }
        }
        assert_invariants!(sim);

        sim.step();
        assert_eq!(live_cells(&sim), vec![(2, 3), (3, 3), (4, 3)]);
        assert_fade_level!(sim, 3, 2, FRESH_DEATH);
        assert_fade_level!(sim, 3, 4, FRESH_DEATH);
        assert_invariants!(sim);

        sim.step();
        assert_alive!(sim, 3, 2);
        assert_fade_level!(sim, 2, 3, FRESH_DEATH);
        assert_population!(sim, 3);
    }
}

#[test]
fn test_glider_travels() {
    for strategy in STRATEGIES {
        let mut sim = SimBuilder::new(12, 12)
            .with_strategy(strategy)
            .pattern(2, 2, ".#.\n..#\n###")
            .build();
        let start = live_cells(&sim);

        for _ in 0..4 {
            sim.step();
            assert_invariants!(sim);
            assert_population!(sim, 5);
        }
        let moved: Vec<_> = start.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(live_cells(&sim), moved, "{strategy:?}");
    }
}

#[test]
fn test_lone_cell_dies_and_fades_out() {
    for strategy in STRATEGIES {
        let mut sim = SimBuilder::new(3, 3)
            .with_strategy(strategy)
            .alive(2, 2)
            .build();

        sim.step();
        assert_dead!(sim, 2, 2);
        for level in (0..FRESH_DEATH).rev() {
            sim.step();
            assert_fade_level!(sim, 2, 2, level);
        }
        // Stays on the floor.
        sim.step();
        assert_fade_level!(sim, 2, 2, 0);
        assert_eq!(sim.export_frame().pixel(1, 1).map(|c| c.packed()), Some(0));
        assert!(sim.metrics().is_extinct());
    }
}

#[test]
fn test_larger_decay_step() {
    let mut sim = SimBuilder::new(3, 3).with_decay_step(5).alive(2, 2).build();
    sim.step();
    assert_fade_level!(sim, 2, 2, FRESH_DEATH);
    sim.step();
    assert_fade_level!(sim, 2, 2, FRESH_DEATH - 5);
    sim.step();
    sim.step();
    assert_fade_level!(sim, 2, 2, 0);
}

#[test]
fn test_rebirth_from_fade_is_white() {
    let mut sim = SimBuilder::new(5, 5).alive(3, 3).build();
    sim.step();
    assert_fade_level!(sim, 3, 3, FRESH_DEATH);
    // Three neighbours bring it back.
    sim.set_cell(2, 2, true).unwrap();
    sim.set_cell(4, 2, true).unwrap();
    sim.set_cell(3, 4, true).unwrap();
    sim.step();
    assert_alive!(sim, 3, 3);
    assert_eq!(sim.cell(3, 3).unwrap().color().packed(), ALIVE_COLOR);
}

#[test]
fn test_one_by_one_grid() {
    for strategy in STRATEGIES {
        let mut sim = SimBuilder::new(1, 1).with_strategy(strategy).alive(1, 1).build();
        assert_eq!(sim.cell(1, 1).unwrap().neighbors(), 0);
        sim.step();
        assert_dead!(sim, 1, 1);
        assert_invariants!(sim);
    }
}
