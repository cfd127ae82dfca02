//! # Lifesaver
//!
//! Screen-saver style two-state cellular automaton. The engine lives in
//! `lifesaver_core`, the cell encoding and palette in `lifesaver_data`;
//! this crate hosts the headless runner and re-exports both.

pub use lifesaver_core as core;
pub use lifesaver_data as data;
