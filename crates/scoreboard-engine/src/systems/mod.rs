//! Rule systems that operate on the game state.
//!
//! Systems are plain functions over `&mut GameState` (or `&GameState` for
//! read-only ones). They do not own state; runtime state lives in the engine.

pub mod clock;
pub mod field;
pub mod play_log;
pub mod possession;
pub mod scoring;
pub mod timeouts;
pub mod view;
