//! Generation stepper.
//!
//! Two strategies advance the grid by one generation. They agree on the
//! rule and on the decay model but not on memory traffic:
//!
//! - [`Strategy::Recompute`] swaps plane roles, rebuilds every interior cell
//!   from the 8 snapshot neighbours' life flags, then re-tallies the stored
//!   neighbour counts.
//! - [`Strategy::Incremental`] snapshots the current plane and trusts the
//!   stored counts; only cells that actually flip touch their neighbours,
//!   through [`Grid::set_alive`].
//!
//! Both leave every stored neighbour count exact when they return.

use lifesaver_data::Cell;
use serde::{Deserialize, Serialize};

use crate::config::RuleConfig;
use crate::grid::{Grid, NEIGHBORHOOD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    Recompute,
    #[default]
    Incremental,
}

impl Strategy {
    /// Advances `grid` by exactly one generation.
    ///
    /// Cells killed by [`Grid::kill_fresh`] since the last step end the
    /// generation at the fresh-death level unless the rule revived them.
    pub fn step(self, grid: &mut Grid, rule: &RuleConfig, decay_step: u8) -> StepReport {
        let report = match self {
            Strategy::Recompute => step_recompute(grid, rule, decay_step),
            Strategy::Incremental => step_incremental(grid, rule, decay_step),
        };
        grid.settle_fresh_deaths();
        report
    }
}

/// What one generation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepReport {
    pub births: usize,
    pub deaths: usize,
    /// Border ring flips applied before the rule ran.
    pub reseeded: usize,
}

/// Next state of one cell given its snapshot and live-neighbour count.
#[inline]
fn evolve(cell: Cell, neighbors: u8, rule: &RuleConfig, decay_step: u8) -> Cell {
    match (cell.is_alive(), rule.next_alive(cell.is_alive(), neighbors)) {
        (true, true) => cell,
        (true, false) => cell.died(),
        (false, true) => cell.born(),
        (false, false) => cell.faded(decay_step),
    }
}

fn step_recompute(grid: &mut Grid, rule: &RuleConfig, decay_step: u8) -> StepReport {
    let (width, height, stride) = (grid.width(), grid.height(), grid.stride());
    let mut report = StepReport::default();

    grid.swap();
    {
        let (prev, next) = grid.split();
        for y in 1..=height {
            for x in 1..=width {
                let idx = y * stride + x;
                let neighbors = NEIGHBORHOOD
                    .iter()
                    .filter(|&&(dx, dy)| {
                        let n = idx
                            .wrapping_add_signed(dy * stride as isize)
                            .wrapping_add_signed(dx);
                        prev[n].is_alive()
                    })
                    .count() as u8;

                let old = prev[idx];
                let new = evolve(old, neighbors, rule, decay_step);
                match (old.is_alive(), new.is_alive()) {
                    (false, true) => report.births += 1,
                    (true, false) => report.deaths += 1,
                    _ => {}
                }
                next[idx] = new;
            }
        }
    }
    grid.recount();
    report
}

fn step_incremental(grid: &mut Grid, rule: &RuleConfig, decay_step: u8) -> StepReport {
    let (width, height) = (grid.width(), grid.height());
    let mut report = StepReport::default();

    grid.snapshot();
    for y in 1..=height {
        for x in 1..=width {
            let old = grid.scratch_get(x, y);
            let alive = old.is_alive();
            let next = rule.next_alive(alive, old.neighbors());

            if alive != next {
                grid.set_alive(x, y, next);
                if next {
                    report.births += 1;
                } else {
                    report.deaths += 1;
                }
            } else if !alive {
                grid.fade(x, y, decay_step);
            }
        }
    }
    report
}
