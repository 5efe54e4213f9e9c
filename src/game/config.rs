use super::action::Direction;
use super::error::ConfigError;
use super::stages::STAGES;
use super::state::{Position, MIN_SNAKE_LENGTH};
use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Height of the game grid, border included
    pub grid_height: usize,
    /// Width of the game grid, border included
    pub grid_width: usize,
    /// Head position of the snake at the start of every stage
    pub snake_start: Position,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Delay between ticks in milliseconds
    pub tick_interval_ms: u64,
    /// Items are replaced every this many successful ticks
    pub item_respawn_interval: u64,
    /// Random draws per item before scanning for an empty cell
    pub max_spawn_attempts: usize,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_height: 21,
            grid_width: 41,
            snake_start: Position::new(5, 5),
            initial_snake_length: MIN_SNAKE_LENGTH,
            tick_interval_ms: 250,
            item_respawn_interval: 30,
            max_spawn_attempts: 256,
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

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the grid can host every stage and the starting snake
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Ring plus at least one interior cell
        if self.grid_height < 3 || self.grid_width < 3 {
            return Err(ConfigError::InvalidDimensions {
                height: self.grid_height,
                width: self.grid_width,
                min_height: 3,
                min_width: 3,
            });
        }

        let interior = |pos: Position| {
            pos.row > 0
                && pos.col > 0
                && (pos.row as usize) < self.grid_height - 1
                && (pos.col as usize) < self.grid_width - 1
        };

        for (stage, def) in STAGES.iter().enumerate() {
            if let Some(pos) = def.walls.iter().flat_map(|s| s.cells()).find(|p| !interior(*p)) {
                return Err(ConfigError::LayoutOutOfBounds { stage, pos });
            }
        }

        if self.initial_snake_length < MIN_SNAKE_LENGTH {
            return Err(ConfigError::SnakeTooShort {
                length: self.initial_snake_length,
                min: MIN_SNAKE_LENGTH,
            });
        }

        let mut segment = self.snake_start;
        for _ in 0..self.initial_snake_length {
            if !interior(segment) {
                return Err(ConfigError::StartOutOfBounds { pos: segment });
            }
            segment = segment.moved_in_direction(Direction::Left);
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }

        if self.item_respawn_interval == 0 {
            return Err(ConfigError::InvalidRespawnInterval);
        }

        Ok(())
    }
}
