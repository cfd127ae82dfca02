//! Simulation handle.
//!
//! One [`Simulation`] owns one grid pair, one rule and one random stream.
//! Instances share nothing, so a host can run one per display surface.
//! Every call runs to completion; there are no background threads.

use lifesaver_data::{Cell, FRESH_DEATH};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{AppConfig, RuleConfig};
use crate::error::{Miscount, Result, SimError};
use crate::frame::Frame;
use crate::grid::Grid;
use crate::metrics::Metrics;
use crate::reseed::BorderReseeder;
use crate::stepper::{StepReport, Strategy};

/// Grid dimensions for a `surface_width x surface_height` pixel surface at
/// `scale` pixels per cell. Never smaller than 1x1.
#[must_use]
pub fn grid_dimensions(surface_width: u32, surface_height: u32, scale: u32) -> (usize, usize) {
    let scale = scale.max(1);
    (
        (surface_width / scale).max(1) as usize,
        (surface_height / scale).max(1) as usize,
    )
}

#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    rule: RuleConfig,
    strategy: Strategy,
    decay_step: u8,
    reseeder: BorderReseeder,
    rng: ChaCha8Rng,
    generation: u64,
    metrics: Metrics,
}

impl Simulation {
    /// Allocates a fresh, empty grid pair with default strategy, decay step
    /// and reseeding.
    pub fn initialize(width: usize, height: usize, rule: RuleConfig) -> Result<Self> {
        let grid = Grid::allocate(width, height)?;
        tracing::info!(width, height, %rule, "Simulation initialized");
        Ok(Self {
            grid,
            rule,
            strategy: Strategy::default(),
            decay_step: 1,
            reseeder: BorderReseeder::default(),
            rng: ChaCha8Rng::from_entropy(),
            generation: 0,
            metrics: Metrics::default(),
        })
    }

    /// Builds a simulation from host configuration. `config` is expected to
    /// have passed [`AppConfig::validate`].
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut sim = Self::initialize(config.world.width, config.world.height, config.rule)?
            .with_strategy(config.engine.strategy)
            .with_decay_step(config.engine.decay_step)
            .with_reseeder(BorderReseeder::from(config.reseed));
        sim.metrics = Metrics::new(config.engine.log_interval);
        if let Some(seed) = config.world.seed {
            sim = sim.with_seed(seed);
        }
        Ok(sim)
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_decay_step(mut self, decay_step: u8) -> Self {
        self.decay_step = decay_step.clamp(1, FRESH_DEATH);
        self
    }

    #[must_use]
    pub fn with_reseeder(mut self, reseeder: BorderReseeder) -> Self {
        self.reseeder = reseeder;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Advances exactly one generation: border reseed, then the rule.
    pub fn step(&mut self) -> StepReport {
        let reseeded = self.reseeder.reseed(&mut self.grid, &mut self.rng);
        let mut report = self
            .strategy
            .step(&mut self.grid, &self.rule, self.decay_step);
        report.reseeded = reseeded;

        self.generation += 1;
        self.metrics
            .record_step(&report, self.grid.population(), self.reseeder.is_enabled());
        report
    }

    /// Throws the grid pair away and allocates a fresh one.
    ///
    /// On failure the previous grid is left untouched, so a host that keeps
    /// running never sees a half-replaced pair.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        let grid = Grid::allocate(width, height)?;
        self.grid = grid;
        self.generation = 0;
        self.metrics.reset();
        tracing::info!(width, height, strategy = ?self.strategy, "Simulation resized");
        Ok(())
    }

    /// Fresh grid at the current dimensions.
    pub fn reset(&mut self) -> Result<()> {
        let (width, height) = self.dimensions();
        self.resize(width, height)
    }

    /// Read-only view of the current generation.
    pub fn export_frame(&self) -> Frame<'_> {
        Frame::new(&self.grid)
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if self.grid.in_interior(x, y) {
            Ok(())
        } else {
            Err(SimError::OutOfBounds {
                x,
                y,
                width: self.grid.width(),
                height: self.grid.height(),
            })
        }
    }

    /// Sets interior cell `(x, y)` (1-based) through the mutation gateway.
    /// A kill shows the fresh-death color after the next step, like any
    /// other death. Returns whether the cell changed.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<bool> {
        self.check_bounds(x, y)?;
        Ok(if alive {
            self.grid.set_alive(x, y, true)
        } else {
            self.grid.kill_fresh(x, y)
        })
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<Cell> {
        self.check_bounds(x, y)?;
        Ok(self.grid.get(x, y))
    }

    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool> {
        self.cell(x, y).map(Cell::is_alive)
    }

    /// Recounts every cell's neighbours and reports the first stored count
    /// that disagrees.
    pub fn check_invariants(&self) -> std::result::Result<(), Miscount> {
        self.grid.verify_neighbor_counts()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.width(), self.grid.height())
    }

    pub fn rule(&self) -> &RuleConfig {
        &self.rule
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn decay_step(&self) -> u8 {
        self.decay_step
    }

    pub fn reseeder(&self) -> &BorderReseeder {
        &self.reseeder
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
