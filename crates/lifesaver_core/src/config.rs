//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration that maps onto `config.toml`. Every section
//! has defaults, so a file only needs the keys it overrides.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 160
//! height = 120
//! seed = 42
//!
//! [rule]
//! birth_low = 3
//! birth_high = 3
//! death_low = 2
//! death_high = 3
//!
//! [reseed]
//! enabled = true
//! random_life = 3
//!
//! [engine]
//! strategy = "Incremental"
//! decay_step = 1
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use lifesaver_data::{FRESH_DEATH, MAX_NEIGHBORS};
use serde::{Deserialize, Serialize};

use crate::stepper::Strategy;

/// Birth/survival rule.
///
/// A dead cell is born when its live-neighbour count lies in
/// `birth_low..=birth_high`. A live cell dies when its count is above
/// `death_high` or below `death_low`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct RuleConfig {
    pub birth_low: u8,
    pub birth_high: u8,
    pub death_low: u8,
    pub death_high: u8,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            birth_low: 3,
            birth_high: 3,
            death_low: 2,
            death_high: 3,
        }
    }
}

impl RuleConfig {
    #[must_use]
    pub const fn new(birth_low: u8, birth_high: u8, death_low: u8, death_high: u8) -> Self {
        Self {
            birth_low,
            birth_high,
            death_low,
            death_high,
        }
    }

    #[inline]
    #[must_use]
    pub fn born(&self, neighbors: u8) -> bool {
        neighbors >= self.birth_low && neighbors <= self.birth_high
    }

    #[inline]
    #[must_use]
    pub fn dies(&self, neighbors: u8) -> bool {
        neighbors > self.death_high || neighbors < self.death_low
    }

    /// Life status next generation.
    #[inline]
    #[must_use]
    pub fn next_alive(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            !self.dies(neighbors)
        } else {
            self.born(neighbors)
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.birth_high <= MAX_NEIGHBORS && self.death_high <= MAX_NEIGHBORS,
            "Rule bounds must be within 0..=8"
        );
        anyhow::ensure!(
            self.birth_low <= self.birth_high,
            "Birth range is empty ({}..={})",
            self.birth_low,
            self.birth_high
        );
        anyhow::ensure!(
            self.death_low <= self.death_high + 1,
            "Death bounds overlap ({} > {} + 1)",
            self.death_low,
            self.death_high
        );
        Ok(())
    }
}

/// Compact notation `B<low>-<high>/S<low>-<high>`: the birth range, then
/// the band a live cell survives in (`death_low..=death_high`).
impl fmt::Display for RuleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B{}-{}/S{}-{}",
            self.birth_low, self.birth_high, self.death_low, self.death_high
        )
    }
}

impl FromStr for RuleConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn range(part: &str, tag: char) -> anyhow::Result<(u8, u8)> {
            let body = part
                .strip_prefix(tag)
                .or_else(|| part.strip_prefix(tag.to_ascii_lowercase()))
                .ok_or_else(|| anyhow::anyhow!("Expected '{tag}' section, got '{part}'"))?;
            match body.split_once('-') {
                Some((lo, hi)) => Ok((lo.trim().parse()?, hi.trim().parse()?)),
                None => {
                    let n = body.trim().parse()?;
                    Ok((n, n))
                }
            }
        }

        let (birth, survive) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| anyhow::anyhow!("Rule '{s}' is missing '/'"))?;
        let (birth_low, birth_high) = range(birth, 'B')?;
        let (death_low, death_high) = range(survive, 'S')?;
        let rule = Self::new(birth_low, birth_high, death_low, death_high);
        rule.validate()?;
        Ok(rule)
    }
}

/// Grid size and randomness.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
    /// Pixels per cell when the grid is derived from a display surface.
    pub scale: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 160,
            height: 120,
            seed: None,
            scale: 4,
        }
    }
}

/// Border reseeding policy.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ReseedConfig {
    pub enabled: bool,
    /// Each ring cell comes up alive with probability `1 / random_life`.
    pub random_life: u32,
}

impl Default for ReseedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            random_life: 3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    pub strategy: Strategy,
    /// Fade levels a dead cell loses per generation.
    pub decay_step: u8,
    /// Generations between metric summaries in the log.
    pub log_interval: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            decay_step: 1,
            log_interval: 1000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub rule: RuleConfig,
    pub reseed: ReseedConfig,
    pub engine: EngineConfig,
    pub target_fps: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            rule: RuleConfig::default(),
            reseed: ReseedConfig::default(),
            engine: EngineConfig::default(),
            target_fps: 30,
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// The engine trusts what it is given; this is the host-side gate.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.width > 0, "World width must be positive");
        anyhow::ensure!(
            self.world.width <= 4096,
            "World width too large (max 4096)"
        );
        anyhow::ensure!(self.world.height > 0, "World height must be positive");
        anyhow::ensure!(
            self.world.height <= 4096,
            "World height too large (max 4096)"
        );
        anyhow::ensure!(self.world.scale > 0, "Scale must be positive");

        self.rule.validate()?;

        anyhow::ensure!(
            self.reseed.random_life >= 1,
            "Random life must be at least 1"
        );
        anyhow::ensure!(
            (1..=FRESH_DEATH).contains(&self.engine.decay_step),
            "Decay step must be in [1, {FRESH_DEATH}]"
        );
        anyhow::ensure!(
            self.engine.log_interval > 0,
            "Log interval must be positive"
        );

        anyhow::ensure!(self.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(self.target_fps <= 240, "Target FPS too high (max 240)");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| e.context(format!("Invalid config {}", path.display())))
    }
}
