//! Core types and definitions for the electric football scoreboard.
//!
//! This crate defines the vocabulary shared across the other crates:
//! commands, the persisted game state, display views, events, errors and
//! constants. It has no dependency on any runtime or I/O layer.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
