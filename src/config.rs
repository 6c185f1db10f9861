use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR_NAME: &str = "tile-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Number of grid columns when nothing else is configured.
pub const DEFAULT_GRID_WIDTH: u16 = 50;

/// Number of grid rows when nothing else is configured.
pub const DEFAULT_GRID_HEIGHT: u16 = 50;

/// Terminal columns drawn per grid tile. Two columns make tiles roughly square.
pub const DEFAULT_TILE_SIZE: u16 = 2;

/// Starting speed in ticks per second.
pub const DEFAULT_INITIAL_SPEED: f32 = 3.0;

/// Speed added for every fruit eaten, in ticks per second.
pub const DEFAULT_SPEED_INCREMENT: f32 = 0.5;

/// Minimum distance, in tiles, between a freshly spawned snake and any edge.
pub const SPAWN_EDGE_INSET: u16 = 5;

/// Shortest tick interval the shell will schedule.
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// Colors for the play field.
#[derive(Debug)]
pub struct Palette {
    /// Snake tiles cycle through these colors from tail to head.
    pub snake: [Color; 2],
    pub fruit: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud: Color,
    pub start_bg: Color,
    pub death_bg: Color,
    pub pause_title: Color,
}

pub const PALETTE: Palette = Palette {
    snake: [Color::Rgb(255, 255, 255), Color::Rgb(200, 200, 200)],
    fruit: Color::Rgb(255, 0, 0),
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud: Color::Gray,
    start_bg: Color::Rgb(100, 255, 120),
    death_bg: Color::Rgb(150, 0, 0),
    pause_title: Color::Rgb(255, 0, 0),
};

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("grid must be at least 1x1 tiles, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },
    #[error("tile size must be at least 1")]
    ZeroTileSize,
    #[error("initial speed must be a positive number, got {0}")]
    InvalidInitialSpeed(f32),
    #[error("speed increment must be a non-negative number, got {0}")]
    InvalidSpeedIncrement(f32),
}

/// Startup configuration, read-only to the engine.
///
/// Every field has a default so a config file only needs to name the values
/// it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub tile_size: u16,
    /// Ticks per second at the start of a game.
    pub initial_speed: f32,
    /// Ticks per second added on every fruit pickup.
    pub speed_increment: f32,
    /// Keeps fruit off the outermost ring of tiles.
    pub easy_mode: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            initial_speed: DEFAULT_INITIAL_SPEED,
            speed_increment: DEFAULT_SPEED_INCREMENT,
            easy_mode: false,
        }
    }
}

impl GameConfig {
    /// Default configuration with a custom grid.
    #[must_use]
    pub fn with_grid(width: u16, height: u16) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize {
            width: self.grid_width,
            height: self.grid_height,
        }
    }

    /// Parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the config at `explicit`, or the platform default file when one
    /// exists. Falls back to built-in defaults otherwise.
    ///
    /// Returns the path that was read, if any.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                let config = Self::load(&path)?;
                Ok((config, Some(path)))
            }
            _ => Ok((Self::default(), None)),
        }
    }

    fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }

        if !self.initial_speed.is_finite() || self.initial_speed <= 0.0 {
            return Err(ConfigError::InvalidInitialSpeed(self.initial_speed));
        }

        if !self.speed_increment.is_finite() || self.speed_increment < 0.0 {
            return Err(ConfigError::InvalidSpeedIncrement(self.speed_increment));
        }

        Ok(())
    }

    /// Returns true when the grid leaves room for the spawn inset on both axes.
    #[must_use]
    pub fn fits_spawn_inset(&self) -> bool {
        let min = SPAWN_EDGE_INSET * 2 + 1;
        self.grid_width >= min && self.grid_height >= min
    }
}

/// Returns the platform-correct default config file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    Some(base)
}
