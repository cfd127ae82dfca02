use serde::{Deserialize, Serialize};

use super::cell::FRESH_DEATH;

/// Color of a live cell, packed as `0x00BBGGRR`.
pub const ALIVE_COLOR: u32 = 0x00ff_ffff;

/// Fade ramp for dead cells, packed as `0x00BBGGRR`.
///
/// Index 0 is the color of a cell that died this generation, the last entry
/// is the floor. Brightness strictly decreases along the ramp.
pub const FADE_RAMP: [u32; FRESH_DEATH as usize + 1] = [
    0xffecba, 0xffe299, 0xffd877, 0xffcf56, 0xffc532, 0xffbb11, 0xf4af00, 0xe5a400, 0xd39700,
    0xc48c00, 0xb27f00, 0xa07300, 0x916800, 0x7f5b00, 0x000000,
];

/// Packed color for a dead cell at the given fade level.
///
/// Level [`FRESH_DEATH`] maps to the head of the ramp and level 0 to black.
#[inline]
pub fn fade_color(level: u8) -> u32 {
    let level = level.min(FRESH_DEATH);
    FADE_RAMP[(FRESH_DEATH - level) as usize]
}

/// An 8-bit-per-channel color sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpacks the low 24 bits of `0x00BBGGRR`.
    #[must_use]
    pub const fn from_packed(word: u32) -> Self {
        Self::new(
            (word & 0xff) as u8,
            ((word >> 8) & 0xff) as u8,
            ((word >> 16) & 0xff) as u8,
        )
    }

    #[must_use]
    pub const fn packed(self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16)
    }

    /// Bytes in upload order, fully opaque.
    #[must_use]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Channel sum, a cheap brightness proxy.
    #[must_use]
    pub fn brightness(self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_ramp_darkens() {
        for pair in FADE_RAMP.windows(2) {
            let a = Rgb::from_packed(pair[0]);
            let b = Rgb::from_packed(pair[1]);
            assert!(
                b.brightness() < a.brightness(),
                "{:06x} should be darker than {:06x}",
                pair[1],
                pair[0]
            );
        }
        assert_eq!(FADE_RAMP[FADE_RAMP.len() - 1], 0);
    }

    #[test]
    fn test_fade_color_endpoints() {
        assert_eq!(fade_color(FRESH_DEATH), FADE_RAMP[0]);
        assert_eq!(fade_color(0), 0);
        // Levels above a fresh death clamp to the head of the ramp.
        assert_eq!(fade_color(15), FADE_RAMP[0]);
    }

    #[test]
    fn test_channel_order() {
        let c = Rgb::from_packed(0x00ffbb11);
        assert_eq!(c, Rgb::new(0x11, 0xbb, 0xff));
        assert_eq!(c.packed(), 0x00ffbb11);
        assert_eq!(c.to_rgba8(), [0x11, 0xbb, 0xff, 255]);
        assert_eq!(Rgb::from_packed(ALIVE_COLOR), Rgb::WHITE);
    }
}
