//! # Lifesaver Core
//!
//! The simulation engine behind Lifesaver, a screen-saver style two-state
//! cellular automaton with fading trails.
//!
//! This crate contains:
//! - Double-buffered padded grids with cached neighbour counts
//! - Two interchangeable generation steppers (full recompute and incremental)
//! - Border reseeding that keeps a finite window from dying out
//! - Frame export for display hosts
//! - Configuration, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use lifesaver_core::{BorderReseeder, RuleConfig, Simulation};
//!
//! let mut sim = Simulation::initialize(5, 5, RuleConfig::default())
//!     .unwrap()
//!     .with_reseeder(BorderReseeder::disabled());
//!
//! // Horizontal blinker.
//! for x in 2..=4 {
//!     sim.set_cell(x, 3, true).unwrap();
//! }
//! sim.step();
//!
//! assert!(sim.is_alive(3, 2).unwrap());
//! assert!(!sim.is_alive(2, 3).unwrap());
//! assert_eq!(sim.export_frame().to_ascii().lines().nth(1), Some("..#.."));
//! ```

/// Configuration management for world, rule, reseed and engine parameters
pub mod config;
/// Error types for allocation and cell access
pub mod error;
/// Read-only frame view for display hosts
pub mod frame;
/// Padded double-buffered cell grid
pub mod grid;
/// Generation statistics and structured logging
pub mod metrics;
/// Border ring reseeding
pub mod reseed;
/// Simulation handle tying grid, rule and reseeder together
pub mod simulation;
/// Generation stepping strategies
pub mod stepper;

pub use config::{AppConfig, EngineConfig, ReseedConfig, RuleConfig, WorldConfig};
pub use error::{Miscount, Result, SimError};
pub use frame::Frame;
pub use grid::Grid;
pub use metrics::{init_logging, Metrics};
pub use reseed::BorderReseeder;
pub use simulation::{grid_dimensions, Simulation};
pub use stepper::{StepReport, Strategy};
pub use lifesaver_data::{Cell, Rgb};
