//! Border reseeding.
//!
//! The grid is finite, so left alone it settles into still lifes and
//! oscillators or dies out. Once per generation, before the rule runs, every
//! cell on the outermost live ring is re-rolled: alive with probability
//! `1 / random_life`, dead otherwise. This stands in for the infinite plane
//! outside the window and keeps activity flowing inward.

use rand::Rng;

use crate::config::ReseedConfig;
use crate::grid::Grid;

/// Ring of interior cells just inside the padding, each listed once.
///
/// Order: top row, bottom row, then the left and right columns between them.
pub fn ring(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    let top = (1..=width).map(|x| (x, 1));
    let bottom = (1..=width)
        .filter(move |_| height > 1)
        .map(move |x| (x, height));
    let sides = (2..height).flat_map(move |y| {
        let right = (width > 1).then_some((width, y));
        std::iter::once((1, y)).chain(right)
    });
    top.chain(bottom).chain(sides)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderReseeder {
    enabled: bool,
    random_life: u32,
}

impl Default for BorderReseeder {
    fn default() -> Self {
        Self::from(ReseedConfig::default())
    }
}

impl From<ReseedConfig> for BorderReseeder {
    fn from(config: ReseedConfig) -> Self {
        Self::new(config.random_life).enabled(config.enabled)
    }
}

impl BorderReseeder {
    #[must_use]
    pub fn new(random_life: u32) -> Self {
        Self {
            enabled: true,
            random_life: random_life.max(1),
        }
    }

    /// A reseeder that never touches the grid.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default().enabled(false)
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn random_life(&self) -> u32 {
        self.random_life
    }

    /// Re-rolls the border ring of the current plane.
    ///
    /// Flips go through the grid's mutation gateway; a roll that matches the
    /// cell's present state changes nothing. Kills are held at the
    /// fresh-death level through the following rule pass
    /// ([`Grid::kill_fresh`]). Returns the number of cells flipped.
    pub fn reseed<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> usize {
        if !self.enabled {
            return 0;
        }
        let mut flipped = 0;
        for (x, y) in ring(grid.width(), grid.height()) {
            let alive = rng.gen_range(0..self.random_life) == 0;
            let changed = if alive {
                grid.set_alive(x, y, true)
            } else {
                grid.kill_fresh(x, y)
            };
            if changed {
                flipped += 1;
            }
        }
        flipped
    }
}
