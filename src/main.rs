use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use lifesaver_lib::core::{init_logging, AppConfig, RuleConfig, Simulation, Strategy};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 1000)]
    generations: u64,

    /// Stepping strategy (overrides the config file)
    #[arg(short, long, value_enum)]
    strategy: Option<Mode>,

    /// Rule in B<low>-<high>/S<low>-<high> notation, e.g. B3-3/S2-3
    #[arg(short, long)]
    rule: Option<RuleConfig>,

    /// Seed for the border reseeder
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Print the final frame as text
    #[arg(long)]
    ascii: bool,

    /// Disable border reseeding
    #[arg(long)]
    no_reseed: bool,

    /// Ignore target_fps and step as fast as possible
    #[arg(long)]
    fast: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Recompute,
    Incremental,
}

impl From<Mode> for Strategy {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Recompute => Strategy::Recompute,
            Mode::Incremental => Strategy::Incremental,
        }
    }
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(mode) = self.strategy {
            config.engine.strategy = mode.into();
        }
        if let Some(rule) = self.rule {
            config.rule = rule;
        }
        if self.seed.is_some() {
            config.world.seed = self.seed;
        }
        if let Some(width) = self.width {
            config.world.width = width;
        }
        if let Some(height) = self.height {
            config.world.height = height;
        }
        if self.no_reseed {
            config.reseed.enabled = false;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut config = AppConfig::load(&args.config)?;
    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    let mut sim = Simulation::from_config(&config)?;
    let frame_budget = Duration::from_secs_f64(1.0 / config.target_fps as f64);
    let started = Instant::now();

    for _ in 0..args.generations {
        let tick = Instant::now();
        sim.step();
        if !args.fast {
            if let Some(rest) = frame_budget.checked_sub(tick.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    let metrics = sim.metrics();
    tracing::info!(
        generations = sim.generation(),
        population = sim.population(),
        peak_population = metrics.peak_population(),
        births = metrics.births(),
        deaths = metrics.deaths(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Run finished"
    );

    if args.ascii {
        print!("{}", sim.export_frame().to_ascii());
    }

    Ok(())
}
