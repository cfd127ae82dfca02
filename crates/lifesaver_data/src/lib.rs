//! # Lifesaver Data
//!
//! Plain data types shared by the Lifesaver engine and its hosts.
//!
//! The only type with real structure here is [`Cell`], the packed 32-bit
//! word that holds a cell's life flag, its live-neighbour count and its
//! display color side by side. Everything that knows the bit layout lives
//! in this crate.

pub mod data;

pub use data::cell::{Cell, ALIVE_AGE, FRESH_DEATH, MAX_NEIGHBORS};
pub use data::color::{fade_color, Rgb, ALIVE_COLOR, FADE_RAMP};
