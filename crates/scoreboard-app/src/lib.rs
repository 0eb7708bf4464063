//! Headless scoreboard host.
//!
//! Wires the engine to a 1 Hz game loop thread, a JSON-lines console on
//! stdin/stdout and save files on disk.

pub mod cli;
pub mod config;
pub mod console;
pub mod game_loop;
pub mod persistence;
pub mod presenter;
pub mod state;

pub use scoreboard_core as core;
