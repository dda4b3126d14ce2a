//! Game of Life engine.
//!
//! A fixed-size board of cells and the simulator that advances it one
//! generation at a time, reporting which cells flipped.

pub mod board;
pub mod patterns;
pub mod simulation;

pub use board::Board;
pub use patterns::Pattern;
pub use simulation::{RunSummary, Simulator};
