//! Packed cell word.
//!
//! Layout of one cell (32 bit):
//!
//! ```text
//! | 4 bit age | 4 bit neighbours | 8 bit blue | 8 bit green | 8 bit red |
//! ```
//!
//! The age nibble doubles as the life flag: [`ALIVE_AGE`] marks a live cell,
//! anything below it is a dead cell's remaining fade level. The color bits
//! are what the display layer uploads.

use serde::{Deserialize, Serialize};

use super::color::{fade_color, Rgb, ALIVE_COLOR};

const AGE_SHIFT: u32 = 28;
const NEIGHBOR_SHIFT: u32 = 24;
const AGE_MASK: u32 = 0xf000_0000;
const NEIGHBOR_MASK: u32 = 0x0f00_0000;
const COLOR_MASK: u32 = 0x00ff_ffff;

/// Age nibble of a live cell.
pub const ALIVE_AGE: u8 = 15;
/// Fade level given to a cell the generation it dies.
pub const FRESH_DEATH: u8 = 14;
/// Size of the Moore neighbourhood.
pub const MAX_NEIGHBORS: u8 = 8;

/// One cell of the grid: life flag, live-neighbour count and color in a
/// single word.
///
/// All mutators are by value and leave the fields they do not name intact.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Cell(u32);

impl Cell {
    /// Dead, no live neighbours, fully faded.
    pub const DEAD: Cell = Cell(0);

    #[must_use]
    pub const fn from_raw(word: u32) -> Self {
        Self(word)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn age(self) -> u8 {
        ((self.0 & AGE_MASK) >> AGE_SHIFT) as u8
    }

    #[inline]
    #[must_use]
    pub const fn is_alive(self) -> bool {
        self.age() == ALIVE_AGE
    }

    #[inline]
    #[must_use]
    pub const fn neighbors(self) -> u8 {
        ((self.0 & NEIGHBOR_MASK) >> NEIGHBOR_SHIFT) as u8
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Rgb {
        Rgb::from_packed(self.0 & COLOR_MASK)
    }

    #[inline]
    #[must_use]
    pub fn with_age(self, age: u8) -> Self {
        debug_assert!(age <= ALIVE_AGE, "age nibble overflow: {age}");
        let age = (age.min(ALIVE_AGE) as u32) << AGE_SHIFT;
        Self((self.0 & !AGE_MASK) | age)
    }

    #[inline]
    #[must_use]
    pub fn with_color(self, color: Rgb) -> Self {
        Self((self.0 & !COLOR_MASK) | (color.packed() & COLOR_MASK))
    }

    /// Overwrites the neighbour count, clamped to `0..=8`.
    #[inline]
    #[must_use]
    pub fn with_neighbors(self, count: u8) -> Self {
        debug_assert!(count <= MAX_NEIGHBORS, "neighbour count {count} > 8");
        let count = (count.min(MAX_NEIGHBORS) as u32) << NEIGHBOR_SHIFT;
        Self((self.0 & !NEIGHBOR_MASK) | count)
    }

    /// Shifts the neighbour count by `delta`.
    ///
    /// Leaving `0..=8` means some neighbour flipped without going through the
    /// grid's mutation gateway. Debug builds panic; release builds clamp.
    #[inline]
    #[must_use]
    pub fn adjust_neighbors(self, delta: i8) -> Self {
        let next = self.neighbors() as i16 + delta as i16;
        debug_assert!(
            (0..=MAX_NEIGHBORS as i16).contains(&next),
            "neighbour count left 0..=8: {} {:+}",
            self.neighbors(),
            delta
        );
        let next = next.clamp(0, MAX_NEIGHBORS as i16) as u32;
        Self((self.0 & !NEIGHBOR_MASK) | (next << NEIGHBOR_SHIFT))
    }

    /// Live, fully lit. Neighbour count untouched.
    #[inline]
    #[must_use]
    pub fn born(self) -> Self {
        self.with_age(ALIVE_AGE)
            .with_color(Rgb::from_packed(ALIVE_COLOR))
    }

    /// Dead this generation: top of the fade ramp. Neighbour count untouched.
    #[inline]
    #[must_use]
    pub fn died(self) -> Self {
        self.with_age(FRESH_DEATH)
            .with_color(Rgb::from_packed(fade_color(FRESH_DEATH)))
    }

    #[inline]
    #[must_use]
    pub fn with_alive(self, alive: bool) -> Self {
        if alive {
            self.born()
        } else {
            self.died()
        }
    }

    /// One more generation spent dead: the fade level drops by `step`,
    /// saturating at the floor, and the color follows it.
    #[inline]
    #[must_use]
    pub fn faded(self, step: u8) -> Self {
        debug_assert!(!self.is_alive(), "live cells do not fade");
        let level = self.age().min(FRESH_DEATH).saturating_sub(step);
        self.with_age(level)
            .with_color(Rgb::from_packed(fade_color(level)))
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("alive", &self.is_alive())
            .field("age", &self.age())
            .field("neighbors", &self.neighbors())
            .field("color", &format_args!("{:06x}", self.0 & COLOR_MASK))
            .finish()
    }
}
