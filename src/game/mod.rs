//! Core game logic module for the staged snake
//!
//! This module contains all the simulation rules without any I/O or rendering
//! dependencies: terrain, the snake, items, gates, missions and the tick state
//! machine that ties them together.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod gates;
pub mod grid;
pub mod items;
pub mod mission;
pub mod stages;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepEvent, StepResult};
pub use error::ConfigError;
pub use gates::GatePair;
pub use grid::{Cell, Coord, Grid};
pub use items::ItemSpawner;
pub use mission::{Mission, MissionProgress};
pub use stages::STAGE_COUNT;
pub use state::{CrashCause, GameState, Position, Snake, StageState, Status};
