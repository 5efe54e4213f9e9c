use thiserror::Error;

use super::state::Position;

/// Structural misconfiguration detected while building the engine or a stage.
///
/// Gameplay failures (walls, self collision, poison) are never errors; they end
/// up as [`super::Status::Crashed`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least {min_height}x{min_width}, got {height}x{width}")]
    InvalidDimensions {
        height: usize,
        width: usize,
        min_height: usize,
        min_width: usize,
    },

    #[error("stage {stage} wall at {pos:?} is outside the grid interior")]
    LayoutOutOfBounds { stage: usize, pos: Position },

    #[error("snake start segment {pos:?} is outside the grid interior")]
    StartOutOfBounds { pos: Position },

    #[error("snake start segment {pos:?} is blocked by a wall in stage {stage}")]
    StartBlocked { stage: usize, pos: Position },

    #[error("initial snake length {length} is below the minimum of {min}")]
    SnakeTooShort { length: usize, min: usize },

    #[error("stage {stage} has {found} gate candidate wall cells, need at least 2")]
    NotEnoughGateCandidates { stage: usize, found: usize },

    #[error("stage {stage} does not exist (there are {count} stages)")]
    UnknownStage { stage: usize, count: usize },

    #[error("tick interval must be positive")]
    InvalidTickInterval,

    #[error("item respawn interval must be at least 1 tick")]
    InvalidRespawnInterval,
}
