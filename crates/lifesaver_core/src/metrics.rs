//! Generation statistics and structured logging.
//!
//! Tracks birth/death totals and population for one simulation, and emits
//! a summary through `tracing` every `log_interval` generations.

use tracing_subscriber::EnvFilter;

use crate::stepper::StepReport;

/// Per-simulation statistics collector.
#[derive(Debug, Clone)]
pub struct Metrics {
    generations: u64,
    births: u64,
    deaths: u64,
    reseeded: u64,
    population: usize,
    peak_population: usize,
    log_interval: u64,
    extinct: bool,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Metrics {
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            generations: 0,
            births: 0,
            deaths: 0,
            reseeded: 0,
            population: 0,
            peak_population: 0,
            log_interval: log_interval.max(1),
            extinct: false,
        }
    }

    /// Records a completed generation.
    pub fn record_step(&mut self, report: &StepReport, population: usize, reseeding: bool) {
        self.generations += 1;
        self.births += report.births as u64;
        self.deaths += report.deaths as u64;
        self.reseeded += report.reseeded as u64;
        self.population = population;
        self.peak_population = self.peak_population.max(population);

        tracing::debug!(
            generation = self.generations,
            births = report.births,
            deaths = report.deaths,
            reseeded = report.reseeded,
            population,
            "Generation stepped"
        );

        let extinct = population == 0 && !reseeding;
        if extinct && !self.extinct {
            tracing::warn!(
                generation = self.generations,
                "Population extinct with reseeding disabled"
            );
        }
        self.extinct = extinct;

        if self.generations % self.log_interval == 0 {
            tracing::info!(
                generation = self.generations,
                population,
                peak_population = self.peak_population,
                births = self.births,
                deaths = self.deaths,
                reseeded = self.reseeded,
                "Simulation summary"
            );
        }
    }

    /// Forgets everything; called when the grid is reallocated.
    pub fn reset(&mut self) {
        *self = Self::new(self.log_interval);
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations
    }

    #[must_use]
    pub fn births(&self) -> u64 {
        self.births
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths
    }

    #[must_use]
    pub fn reseeded(&self) -> u64 {
        self.reseeded
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.population
    }

    #[must_use]
    pub fn peak_population(&self) -> usize {
        self.peak_population
    }

    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.extinct
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honours `RUST_LOG`; defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
