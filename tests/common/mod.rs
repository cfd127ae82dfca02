pub mod macros;

use lifesaver_lib::core::{AppConfig, RuleConfig, Simulation, Strategy};

#[allow(dead_code)]
pub struct SimBuilder {
    config: AppConfig,
    live: Vec<(usize, usize)>,
}

#[allow(dead_code)]
impl SimBuilder {
    /// Deterministic, reseeding off. Tests opt back in with `with_reseed`.
    pub fn new(width: usize, height: usize) -> Self {
        let mut config = AppConfig::default();
        config.world.width = width;
        config.world.height = height;
        config.world.seed = Some(0);
        config.reseed.enabled = false;
        Self {
            config,
            live: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.config.engine.strategy = strategy;
        self
    }

    pub fn with_rule(mut self, rule: RuleConfig) -> Self {
        self.config.rule = rule;
        self
    }

    pub fn with_decay_step(mut self, decay_step: u8) -> Self {
        self.config.engine.decay_step = decay_step;
        self
    }

    pub fn with_reseed(mut self, random_life: u32) -> Self {
        self.config.reseed.enabled = true;
        self.config.reseed.random_life = random_life;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Live cell at interior coordinates (1-based).
    pub fn alive(mut self, x: usize, y: usize) -> Self {
        self.live.push((x, y));
        self
    }

    /// Cells from a picture: `#` alive, anything else dead. The first
    /// character of the first line lands on `(x, y)`.
    pub fn pattern(mut self, x: usize, y: usize, picture: &str) -> Self {
        for (dy, line) in picture.lines().enumerate() {
            for (dx, ch) in line.trim().chars().enumerate() {
                if ch == '#' {
                    self.live.push((x + dx, y + dy));
                }
            }
        }
        self
    }

    pub fn build(self) -> Simulation {
        self.config
            .validate()
            .expect("Invalid config in test builder");
        let mut sim = Simulation::from_config(&self.config)
            .expect("Failed to create simulation in test builder");
        for (x, y) in self.live {
            sim.set_cell(x, y, true).expect("Seed cell outside grid");
        }
        sim
    }
}

/// Interior coordinates of every live cell, row-major.
#[allow(dead_code)]
pub fn live_cells(sim: &Simulation) -> Vec<(usize, usize)> {
    let (width, height) = sim.dimensions();
    let mut out = Vec::new();
    for y in 1..=height {
        for x in 1..=width {
            if sim.is_alive(x, y).unwrap() {
                out.push((x, y));
            }
        }
    }
    out
}

/// Both stepping strategies, for tests that must hold under either.
#[allow(dead_code)]
pub const STRATEGIES: [Strategy; 2] = [Strategy::Recompute, Strategy::Incremental];
