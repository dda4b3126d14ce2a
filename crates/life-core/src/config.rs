//! Configuration types for the engine and viewer.

use crate::{BoundaryPolicy, Error, Result, RunState};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable that overrides `BoardConfig::seed`
pub const SEED_ENV_VAR: &str = "LIFE_SEED";

/// Board configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Width of the board in cells
    pub width: i32,
    /// Height of the board in cells
    pub height: i32,
    /// Seed the board with a fair coin flip per cell
    pub randomize: bool,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Neighbor lookup behaviour at the edges
    pub boundary: BoundaryPolicy,
    /// Named pattern stamped at the center of the board
    pub pattern: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            randomize: true,
            seed: 10_000,
            boundary: BoundaryPolicy::EdgeWrap,
            pattern: None,
        }
    }
}

/// Rendering parameters for the viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Terminal columns per board cell
    pub cell_width: u16,
    /// Terminal rows per board cell
    pub cell_height: u16,
    /// Glyph drawn for a live cell
    pub alive_glyph: char,
    /// Glyph drawn for a dead cell
    pub dead_glyph: char,
    /// Delay between frames (milliseconds)
    pub frame_interval_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            cell_width: 2,
            cell_height: 1,
            alive_glyph: '#',
            dead_glyph: ' ',
            frame_interval_ms: 100,
        }
    }
}

/// Run loop parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Whether generations advance before any input arrives
    pub start_state: RunState,
    /// Stop advancing after this many generations
    pub max_generations: Option<u64>,
    /// Run without a terminal and print a JSON summary
    pub headless: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start_state: RunState::Paused,
            max_generations: None,
            headless: false,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub board: BoardConfig,
    pub view: ViewConfig,
    pub run: RunConfig,
}

impl LifeConfig {
    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        let config: LifeConfig = serde_json::from_str(&contents)?;
        config.validate()?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `LIFE_SEED` from the environment, if set
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_seed_override(std::env::var(SEED_ENV_VAR).ok().as_deref())
    }

    fn with_seed_override(mut self, seed: Option<&str>) -> Result<Self> {
        if let Some(raw) = seed {
            self.board.seed = raw.trim().parse().map_err(|_| {
                Error::Config(format!("{} must be an unsigned integer, got {:?}", SEED_ENV_VAR, raw))
            })?;
            debug!(seed = self.board.seed, "Seed overridden from environment");
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.board.width <= 0 || self.board.height <= 0 {
            return Err(Error::InvalidDimensions {
                width: self.board.width,
                height: self.board.height,
            });
        }
        if self.view.cell_width == 0 || self.view.cell_height == 0 {
            return Err(Error::Config(
                "cell_width and cell_height must be positive".to_string(),
            ));
        }
        if self.view.frame_interval_ms == 0 {
            return Err(Error::Config("frame_interval_ms must be positive".to_string()));
        }
        if self.view.alive_glyph == self.view.dead_glyph {
            return Err(Error::Config(
                "alive_glyph and dead_glyph must differ".to_string(),
            ));
        }
        Ok(())
    }
}
