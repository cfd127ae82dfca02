//! Error types for lifesaver_core.
//!
//! The engine has almost no runtime failure modes: everything it steps is
//! generated internally. What remains is allocation at (re)initialization
//! and host-facing coordinate checks.

use thiserror::Error;

/// Main error type for lifesaver_core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The padded grid pair could not be reserved. Fatal for the host.
    #[error("Allocation failed for a {width}x{height} grid pair")]
    Allocation { width: usize, height: usize },

    /// Zero width or height.
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Host addressed a cell outside the interior `1..=width`, `1..=height`.
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Result type alias for lifesaver_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Whether the host has anything left to display after this error.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }
}

/// A stored neighbour count that disagrees with the live cells around it.
///
/// Only produced by [`crate::grid::Grid::verify_neighbor_counts`]; seeing one
/// means a flip bypassed the mutation gateway.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Cell ({x}, {y}) stores {stored} live neighbours but has {actual}")]
pub struct Miscount {
    pub x: usize,
    pub y: usize,
    pub stored: u8,
    pub actual: u8,
}
