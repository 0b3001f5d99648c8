use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::board::Board;
use super::error::ConfigError;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the playing surface in pixels
    pub screen_width: u32,
    /// Height of the playing surface in pixels
    pub screen_height: u32,
    /// Side of one grid cell in pixels
    pub cell_size: u32,
    /// Simulation ticks per second
    pub ticks_per_second: u32,
    /// Seed for food placement; random when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            ticks_per_second: 8,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a board of `width` x `height` cells
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            cell_size: 1,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Read a JSON configuration file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn board(&self) -> Result<Board, ConfigError> {
        Board::from_screen(self.screen_width, self.screen_height, self.cell_size)
    }

    /// Check everything the simulation needs before it starts
    pub fn validate(&self) -> Result<Board, ConfigError> {
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        self.board()
    }

    /// Time between two simulation ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}
