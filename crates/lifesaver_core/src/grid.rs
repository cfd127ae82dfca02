//! Double-buffered, padded cell grid.
//!
//! Both planes are `(width + 2) x (height + 2)` row-major vectors. The outer
//! ring is padding: it is never alive, so neighbour lookups for interior
//! cells (`1..=width`, `1..=height`) never need bounds checks. Padding cells
//! still carry neighbour counts, which keeps the mutation gateway branch-free.
//!
//! `current` is what the display layer reads; the other plane is scratch.
//! Roles change by flipping an index, never by moving data.

use lifesaver_data::Cell;

use crate::error::{Miscount, Result, SimError};

/// Offsets of the Moore neighbourhood.
pub const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    stride: usize,
    planes: [Vec<Cell>; 2],
    current: usize,
    population: usize,
    /// Padded indices killed outside the rule this generation.
    fresh_deaths: Vec<usize>,
}

fn plane(len: usize, width: usize, height: usize) -> Result<Vec<Cell>> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| SimError::Allocation { width, height })?;
    cells.resize(len, Cell::DEAD);
    Ok(cells)
}

impl Grid {
    /// Allocates both planes: every cell dead, no neighbours, floor color.
    pub fn allocate(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidDimensions { width, height });
        }
        let stride = width
            .checked_add(2)
            .ok_or(SimError::Allocation { width, height })?;
        let len = height
            .checked_add(2)
            .and_then(|rows| rows.checked_mul(stride))
            .ok_or(SimError::Allocation { width, height })?;

        Ok(Self {
            width,
            height,
            stride,
            planes: [plane(len, width, height)?, plane(len, width, height)?],
            current: 0,
            population: 0,
            fresh_deaths: Vec::new(),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row length of a plane, padding included.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Live interior cells in the current plane.
    #[inline]
    pub fn population(&self) -> usize {
        self.population
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x <= self.width + 1 && y <= self.height + 1,
            "({x}, {y}) outside padded {}x{}",
            self.width,
            self.height
        );
        y * self.stride + x
    }

    #[inline]
    pub fn in_interior(&self, x: usize, y: usize) -> bool {
        (1..=self.width).contains(&x) && (1..=self.height).contains(&y)
    }

    /// Current plane, padding included.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.planes[self.current]
    }

    /// Scratch plane, padding included.
    #[inline]
    pub fn scratch(&self) -> &[Cell] {
        &self.planes[1 - self.current]
    }

    /// Cell of the current plane at padded coordinates.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells()[self.index(x, y)]
    }

    /// Cell of the scratch plane at padded coordinates.
    #[inline]
    pub fn scratch_get(&self, x: usize, y: usize) -> Cell {
        self.scratch()[self.index(x, y)]
    }

    /// The single mutation gateway for life flips.
    ///
    /// Flips the cell at interior `(x, y)` and moves the neighbour count of
    /// each of its 8 neighbours by one, so stored counts stay exact. A request
    /// that does not change the cell's state is a no-op and returns `false`.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> bool {
        debug_assert!(self.in_interior(x, y), "gateway used on padding ({x}, {y})");
        let idx = self.index(x, y);
        let stride = self.stride;
        let cells = &mut self.planes[self.current];
        if cells[idx].is_alive() == alive {
            return false;
        }

        let delta = if alive { 1 } else { -1 };
        for (dx, dy) in NEIGHBORHOOD {
            let n = idx
                .wrapping_add_signed(dy * stride as isize)
                .wrapping_add_signed(dx);
            cells[n] = cells[n].adjust_neighbors(delta);
        }
        cells[idx] = cells[idx].with_alive(alive);

        if alive {
            self.population += 1;
        } else {
            self.population -= 1;
        }
        true
    }

    /// Kills interior `(x, y)` through the gateway and keeps it at the top
    /// of the fade ramp until [`Grid::settle_fresh_deaths`] runs.
    ///
    /// For kills made before the rule runs: a cell never fades in the
    /// generation it died. Returns whether the cell changed.
    pub fn kill_fresh(&mut self, x: usize, y: usize) -> bool {
        if !self.set_alive(x, y, false) {
            return false;
        }
        let idx = self.index(x, y);
        self.fresh_deaths.push(idx);
        true
    }

    /// Restores the fresh-death level of every cell held by
    /// [`Grid::kill_fresh`] that is still dead, then forgets them.
    pub fn settle_fresh_deaths(&mut self) {
        let cells = &mut self.planes[self.current];
        for idx in self.fresh_deaths.drain(..) {
            if !cells[idx].is_alive() {
                cells[idx] = cells[idx].died();
            }
        }
    }

    /// Ages a dead interior cell of the current plane by one generation.
    #[inline]
    pub fn fade(&mut self, x: usize, y: usize, step: u8) {
        let idx = self.index(x, y);
        let cells = &mut self.planes[self.current];
        cells[idx] = cells[idx].faded(step);
    }

    /// Copies one padded row of the current plane into scratch.
    pub fn copy_row(&mut self, row: usize) {
        debug_assert!(row <= self.height + 1);
        let start = row * self.stride;
        let end = start + self.stride;
        let (front, back) = self.planes.split_at_mut(1);
        let (src, dst) = if self.current == 0 {
            (&front[0], &mut back[0])
        } else {
            (&back[0], &mut front[0])
        };
        dst[start..end].copy_from_slice(&src[start..end]);
    }

    /// Full snapshot of the current plane into scratch, row by row.
    pub fn snapshot(&mut self) {
        for row in 0..self.height + 2 {
            self.copy_row(row);
        }
    }

    /// Exchanges the roles of the two planes. O(1).
    pub fn swap(&mut self) {
        self.current = 1 - self.current;
    }

    /// Scratch plane for reading and current plane for writing, at once.
    pub fn split(&mut self) -> (&[Cell], &mut [Cell]) {
        let (front, back) = self.planes.split_at_mut(1);
        if self.current == 0 {
            (&back[0], &mut front[0])
        } else {
            (&front[0], &mut back[0])
        }
    }

    /// Rebuilds every stored neighbour count and the population from the
    /// live cells of the current plane.
    ///
    /// Used after a step that wrote cells without going through the gateway.
    pub fn recount(&mut self) {
        let (width, height, stride) = (self.width, self.height, self.stride);
        let cells = &mut self.planes[self.current];
        for cell in cells.iter_mut() {
            *cell = cell.with_neighbors(0);
        }

        let mut population = 0;
        for y in 1..=height {
            for x in 1..=width {
                let idx = y * stride + x;
                if !cells[idx].is_alive() {
                    continue;
                }
                population += 1;
                for (dx, dy) in NEIGHBORHOOD {
                    let n = idx
                        .wrapping_add_signed(dy * stride as isize)
                        .wrapping_add_signed(dx);
                    cells[n] = cells[n].adjust_neighbors(1);
                }
            }
        }
        self.population = population;
    }

    /// Live neighbours of padded `(x, y)` in the current plane, counted
    /// afresh instead of read from the stored field.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for (dx, dy) in NEIGHBORHOOD {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
            else {
                continue;
            };
            if nx <= self.width + 1 && ny <= self.height + 1 && self.get(nx, ny).is_alive() {
                count += 1;
            }
        }
        count
    }

    /// Checks every stored neighbour count, padding included, against a
    /// fresh count. Returns the first disagreement in row-major order.
    pub fn verify_neighbor_counts(&self) -> std::result::Result<(), Miscount> {
        for y in 0..self.height + 2 {
            for x in 0..self.width + 2 {
                let stored = self.get(x, y).neighbors();
                let actual = self.count_live_neighbors(x, y);
                if stored != actual {
                    return Err(Miscount {
                        x,
                        y,
                        stored,
                        actual,
                    });
                }
            }
        }
        Ok(())
    }

    /// Interior rows of the current plane, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        let cells = self.cells();
        (1..self.height + 1).map(move |y| {
            let start = y * self.stride + 1;
            &cells[start..start + self.width]
        })
    }
}
