//! Read-only view of the current generation for display.

use lifesaver_data::{Cell, Rgb};

use crate::grid::Grid;

/// Borrow of the current plane, interior only, row-major.
///
/// Coordinates are 0-based frame coordinates (`0..width`, `0..height`).
/// The borrow keeps the simulation from stepping while a frame is alive.
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    grid: &'a Grid,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// `None` outside `0..width` x `0..height`.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width() && y < self.height()).then(|| self.grid.get(x + 1, y + 1))
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        self.cell(x, y).map(Cell::color)
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &'a [Cell]> + 'a {
        self.grid.rows()
    }

    pub fn samples(&self) -> impl Iterator<Item = Rgb> + 'a {
        self.rows().flat_map(|row| row.iter().map(|c| c.color()))
    }

    /// Appends the frame to `out` as RGBA bytes, ready for texture upload.
    pub fn write_rgba8(&self, out: &mut Vec<u8>) {
        out.reserve(self.width() * self.height() * 4);
        for sample in self.samples() {
            out.extend_from_slice(&sample.to_rgba8());
        }
    }

    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_rgba8(&mut out);
        out
    }

    /// `#` alive, `+` fading, `.` fully faded; one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for row in self.rows() {
            for cell in row {
                out.push(if cell.is_alive() {
                    '#'
                } else if cell.age() > 0 {
                    '+'
                } else {
                    '.'
                });
            }
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
