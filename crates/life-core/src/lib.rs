//! Core types and utilities for the Game of Life engine and its viewer.

pub mod types;
pub mod config;
pub mod error;

pub use error::{Error, Result};
pub use types::*;
pub use config::*;
