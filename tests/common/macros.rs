/// Asserts that every stored neighbour count matches a fresh recount.
#[macro_export]
macro_rules! assert_invariants {
    ($sim:expr) => {
        if let Err(miscount) = $sim.check_invariants() {
            panic!(
                "Neighbour invariant broken at generation {}: {}",
                $sim.generation(),
                miscount
            );
        }
    };
}

/// Asserts that the live-cell count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($sim:expr, $count:expr) => {
        assert_eq!($sim.population(), $count, "Population count mismatch");
    };
}

/// Asserts that the interior cell at `(x, y)` is alive.
#[macro_export]
macro_rules! assert_alive {
    ($sim:expr, $x:expr, $y:expr) => {
        assert!(
            $sim.is_alive($x, $y).unwrap(),
            "Cell ({}, {}) should be alive at generation {}",
            $x,
            $y,
            $sim.generation()
        );
    };
}

/// Asserts that the interior cell at `(x, y)` is dead.
#[macro_export]
macro_rules! assert_dead {
    ($sim:expr, $x:expr, $y:expr) => {
        assert!(
            !$sim.is_alive($x, $y).unwrap(),
            "Cell ({}, {}) should be dead at generation {}",
            $x,
            $y,
            $sim.generation()
        );
    };
}

/// Asserts the fade level of a dead cell.
#[macro_export]
macro_rules! assert_fade_level {
    ($sim:expr, $x:expr, $y:expr, $level:expr) => {
        let cell = $sim.cell($x, $y).unwrap();
        assert!(!cell.is_alive(), "Cell ({}, {}) is alive", $x, $y);
        assert_eq!(
            cell.age(),
            $level,
            "Cell ({}, {}) fade level mismatch",
            $x,
            $y
        );
    };
}
