//! Core data structures for the Lifesaver automaton.

pub mod cell;
pub mod color;
