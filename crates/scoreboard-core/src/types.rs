//! Value types held inside the game state.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;

/// Per-team counters.
///
/// Yardage is signed so that a drive with a net loss is recorded as such.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub first_downs: u32,
    pub total_yards: i32,
    pub pass_yards: i32,
    pub rush_yards: i32,
    pub penalties: u32,
}

impl TeamStats {
    /// Credit a resolved play to this team's totals.
    pub fn record_play(&mut self, play_type: PlayType, yards: i32) {
        self.total_yards += yards;
        match play_type {
            PlayType::Pass => self.pass_yards += yards,
            PlayType::Rush => self.rush_yards += yards,
            PlayType::Stop => {}
        }
    }

    /// `FD: n | Tot: n | Pass: n | Rush: n | Pen: n`
    pub fn summary_line(&self) -> String {
        format!(
            "FD: {} | Tot: {} | Pass: {} | Rush: {} | Pen: {}",
            self.first_downs, self.total_yards, self.pass_yards, self.rush_yards, self.penalties
        )
    }
}

/// Identity, score and budget of one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamState {
    pub name: String,
    pub color: String,
    pub score: u32,
    pub timeouts: u8,
    pub stats: TeamStats,
}

impl TeamState {
    pub fn new(name: impl Into<String>, color: impl Into<String>, timeouts: u8) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            score: 0,
            timeouts,
            stats: TeamStats::default(),
        }
    }
}

/// Structured record of one score. The undo stack is a `Vec` of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub team: TeamId,
    pub points: u32,
    pub quarter: Quarter,
    pub clock_seconds: u32,
    pub possession_at_time: TeamId,
    pub ball_on_at_time: i32,
    /// Index of the narrative entry written for this score.
    pub log_index: usize,
}

/// Annotation for the most recent scrimmage play. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastPlay {
    pub play_type: PlayType,
    pub yards: i32,
    pub start: i32,
    pub end: i32,
    pub team: TeamId,
}

/// Physical play timer settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VibrationSettings {
    pub enabled: bool,
    /// Scale factor in `[0, 1]` applied to `play_seconds`.
    pub intensity: f64,
    pub play_seconds: u32,
}

impl Default for VibrationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            intensity: 1.0,
            play_seconds: PLAY_SECONDS,
        }
    }
}

impl VibrationSettings {
    /// Length of one physical play in whole seconds, fractions dropped.
    pub fn timer_seconds(&self) -> u32 {
        (f64::from(self.play_seconds) * self.intensity) as u32
    }
}

/// Narrative log plus the score-event stack that indexes into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayLog {
    pub play_log: Vec<String>,
    pub score_events: Vec<ScoreEvent>,
}

/// Format seconds as `MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Ordinal label for a down number.
pub fn down_label(down: u8) -> &'static str {
    match down {
        1 => "1st",
        2 => "2nd",
        3 => "3rd",
        _ => "4th",
    }
}

/// Validate a `#RRGGBB` colour string.
pub fn is_hex_color(color: &str) -> bool {
    let bytes = color.as_bytes();
    bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(|b| b.is_ascii_hexdigit())
}
