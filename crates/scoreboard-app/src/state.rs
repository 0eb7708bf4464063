//! Messages passed from the input side to the game loop thread.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use scoreboard_core::commands::Command;
use scoreboard_core::events::Notice;

/// Host-level requests that go around the engine's command set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionRequest {
    Save { slot: String },
    Load { slot: String },
    ListSaves,
    DeleteSave { slot: String },
    ExportLog { path: PathBuf },
    Quit,
}

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// Forwarded to the engine queue; applied on the next tick.
    Engine(Command),
    Session(SessionRequest),
    /// Shown to the operator with the next view, e.g. unreadable input.
    Notice(Notice),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

impl From<Command> for LoopCommand {
    fn from(command: Command) -> Self {
        Self::Engine(command)
    }
}

impl From<SessionRequest> for LoopCommand {
    fn from(request: SessionRequest) -> Self {
        match request {
            SessionRequest::Quit => Self::Shutdown,
            other => Self::Session(other),
        }
    }
}
