use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Smallest board the game will start on
pub const MIN_GRID_CELLS: usize = 9;

/// Largest accepted width or height
pub const MAX_GRID_SIDE: usize = 1024;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Simulation speed
    pub ticks_per_second: u32,
    /// Cells gained per food eaten
    pub growth_per_food: usize,
    /// Fixed seed for a reproducible session; drawn from entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            ticks_per_second: 20,
            growth_per_food: 1,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Time between two simulation ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.ticks_per_second.max(1)))
    }

    /// Check every value is in range before a game is built from it
    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }

        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(GameError::InvalidConfig(format!(
                "grid sides must not exceed {}, got {}x{}",
                MAX_GRID_SIDE, self.grid_width, self.grid_height
            )));
        }

        if self.grid_width * self.grid_height < MIN_GRID_CELLS {
            return Err(GameError::InvalidConfig(format!(
                "grid needs at least {} cells, got {}x{}",
                MIN_GRID_CELLS, self.grid_width, self.grid_height
            )));
        }

        if !(1..=1000).contains(&self.ticks_per_second) {
            return Err(GameError::InvalidConfig(format!(
                "ticks_per_second must be in [1, 1000], got {}",
                self.ticks_per_second
            )));
        }

        if self.growth_per_food == 0 {
            return Err(GameError::InvalidConfig(
                "growth_per_food must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.ticks_per_second, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.growth_per_food, 1);
    }

    #[test]
    fn test_tick_interval() {
        let mut config = GameConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
        config.ticks_per_second = 8;
        assert_eq!(config.tick_interval(), Duration::from_millis(125));
    }

    #[test]
    fn test_rejects_tiny_grid() {
        assert!(GameConfig::new(2, 2).validate().is_err());
        assert!(GameConfig::new(0, 10).validate().is_err());
        assert!(GameConfig::new(3, 3).validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let mut config = GameConfig::default();
        config.ticks_per_second = 0;
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let mut config = GameConfig::default();
        config.growth_per_food = 0;
        assert!(config.validate().is_err());

        let config = GameConfig::new(MAX_GRID_SIDE + 1, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "grid_width": 12, "seed": 5 }"#).unwrap();
        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = GameConfig::from_json_file(Path::new("/nonexistent/snake.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/snake.json"));
    }
}
