//! Gate Snake - a staged snake game with teleport gates, poison and missions
//!
//! This library provides:
//! - Core simulation (game module): grid, snake, items, gates, missions and
//!   the tick state machine
//! - Terminal rendering (render module)
//! - Keyboard mapping (input module)
//! - Session timing (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
