//! Game state engine for the electric football scoreboard.
//!
//! Owns the game, applies control-panel commands, runs the game and play
//! clocks at one tick per second and produces `GameView`s for the display.

pub mod config;
pub mod engine;
pub mod scheduler;
pub mod systems;
pub mod validation;

pub use config::{EngineConfig, FeatureConfig};
pub use engine::ScoreboardEngine;
pub use scoreboard_core as core;
