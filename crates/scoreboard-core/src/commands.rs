//! Commands sent from the control panel to the engine.
//!
//! Commands are validated when applied. Queued commands are applied at the
//! next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    // --- Clock ---
    StartClock,
    PauseClock,
    /// Set the regulation period length, also resetting the running clock.
    SetQuarterLength { minutes: u32 },
    /// Arm the play clock at full duration.
    StartPlayClock,
    /// Manually end the current period.
    AdvanceQuarter,

    // --- Field ---
    Kickoff {
        kicking_team: TeamId,
        kick_distance: i32,
        return_yards: i32,
    },
    /// Place the ball on `side`'s half at `yard_line` (1..=50).
    SetBallPosition { side: TeamId, yard_line: i32 },
    ResolvePlay {
        play_type: PlayType,
        yards: i32,
        #[serde(default)]
        turnover: bool,
    },
    /// Resolve a randomly generated play.
    SimulatePlay,

    // --- Scoring ---
    Award { team: TeamId, points: u32 },
    ChoosePostTouchdown {
        team: TeamId,
        choice: PostTouchdownChoice,
    },
    UndoLastScore,
    /// Official review. An overturned ruling removes the last score.
    ReplayReview { overturn: bool },

    // --- Possession ---
    Penalty { team: TeamId, yards: i32 },
    SwitchPossession,

    // --- Timeouts ---
    UseTimeout { team: TeamId },

    // --- Game management ---
    ClearLog,
    ResetGame,
    ToggleOvertime,
    /// `None` picks a random label.
    SetWeather {
        #[serde(default)]
        label: Option<String>,
    },
    SetTeamName { team: TeamId, name: String },
    SetTeamColor { team: TeamId, color: String },

    // --- Physical play timer ---
    ToggleVibration,
    SetVibrationIntensity { value: f64 },
    SetPlaySeconds { seconds: u32 },
    StartPlayTimer,
    /// Posted by the scheduler when a play timer runs out.
    PlayTimerElapsed,
}

impl Command {
    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartClock => "StartClock",
            Self::PauseClock => "PauseClock",
            Self::SetQuarterLength { .. } => "SetQuarterLength",
            Self::StartPlayClock => "StartPlayClock",
            Self::AdvanceQuarter => "AdvanceQuarter",
            Self::Kickoff { .. } => "Kickoff",
            Self::SetBallPosition { .. } => "SetBallPosition",
            Self::ResolvePlay { .. } => "ResolvePlay",
            Self::SimulatePlay => "SimulatePlay",
            Self::Award { .. } => "Award",
            Self::ChoosePostTouchdown { .. } => "ChoosePostTouchdown",
            Self::UndoLastScore => "UndoLastScore",
            Self::ReplayReview { .. } => "ReplayReview",
            Self::Penalty { .. } => "Penalty",
            Self::SwitchPossession => "SwitchPossession",
            Self::UseTimeout { .. } => "UseTimeout",
            Self::ClearLog => "ClearLog",
            Self::ResetGame => "ResetGame",
            Self::ToggleOvertime => "ToggleOvertime",
            Self::SetWeather { .. } => "SetWeather",
            Self::SetTeamName { .. } => "SetTeamName",
            Self::SetTeamColor { .. } => "SetTeamColor",
            Self::ToggleVibration => "ToggleVibration",
            Self::SetVibrationIntensity { .. } => "SetVibrationIntensity",
            Self::SetPlaySeconds { .. } => "SetPlaySeconds",
            Self::StartPlayTimer => "StartPlayTimer",
            Self::PlayTimerElapsed => "PlayTimerElapsed",
        }
    }

    /// Commands still accepted once the game is final.
    pub fn allowed_after_final(&self) -> bool {
        !matches!(
            self,
            Self::StartClock
                | Self::StartPlayClock
                | Self::AdvanceQuarter
                | Self::Kickoff { .. }
                | Self::ResolvePlay { .. }
                | Self::SimulatePlay
                | Self::Award { .. }
                | Self::Penalty { .. }
                | Self::UseTimeout { .. }
        )
    }
}

/// Result of a successfully validated command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Applied,
    NoOp(NoOpReason),
}

/// Why a valid command changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoOpReason {
    NoTimeoutsRemaining,
    NothingToUndo,
    ClockAlreadyRunning,
    ClockAlreadyPaused,
    ClockExpired,
    VibrationDisabled,
    PlayTimerStale,
}

impl NoOpReason {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoTimeoutsRemaining => "No timeouts remaining",
            Self::NothingToUndo => "Nothing to undo",
            Self::ClockAlreadyRunning => "Clock already running",
            Self::ClockAlreadyPaused => "Clock already paused",
            Self::ClockExpired => "Clock has expired",
            Self::VibrationDisabled => "Vibration is disabled",
            Self::PlayTimerStale => "Play timer ended with the clock stopped",
        }
    }
}
