//! Notifications emitted by the engine for the display and sound adapters.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Sounds the presentation layer may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    Touchdown,
    FieldGoal,
    Kickoff,
    GameOver,
    PlayClockBuzzer,
    /// Pulse the physical board.
    Vibration,
}

/// Short visual effects on the spectator display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VisualCue {
    ScoreFlash { team: TeamId },
}

/// Operator-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// State-change notification, drained by the host after each step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    ScoreChanged {
        team: TeamId,
        points: i32,
        score: u32,
    },
    PostTouchdownChoiceRequired { team: TeamId },
    KickoffRequired { kicking_team: Option<TeamId> },
    FirstDown { team: TeamId },
    Turnover { new_possession: TeamId },
    TimeoutUsed { team: TeamId, remaining: u8 },
    PlayClockExpired,
    PeriodStarted { quarter: Quarter },
    OvertimeStarted,
    /// `winner` is `None` for a tie.
    GameOver {
        winner: Option<TeamId>,
        score_a: u32,
        score_b: u32,
    },
    Audio { cue: AudioCue },
    Visual { cue: VisualCue },
    Notice(Notice),
}
