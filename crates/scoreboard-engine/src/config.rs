//! Engine configuration. Every field has a default so a partial TOML table
//! (or none at all) is valid.

use serde::{Deserialize, Serialize};

use scoreboard_core::constants::*;
use scoreboard_core::enums::FieldOrientation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RNG seed for simulated plays and random weather. Same seed, same game.
    pub seed: u64,
    pub period_seconds: u32,
    pub overtime_seconds: u32,
    pub play_clock_seconds: u32,
    pub timeouts_per_half: u8,
    pub overtime_timeouts: u8,
    /// Raw field coordinate the ball is spotted on after a touchdown play.
    pub post_score_spot: i32,
    /// Kicking team's own yard line for kickoffs.
    pub kickoff_spot: i32,
    /// Delay before the clock restarts after a timeout. `0` disables it.
    pub timeout_resume_secs: u32,
    pub resume_clock_on_play_clock_expiry: bool,
    pub orientation: FieldOrientation,
    pub overtime_enabled: bool,
    pub features: FeatureConfig,
    pub teams: TeamsConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            period_seconds: PERIOD_SECONDS,
            overtime_seconds: OVERTIME_SECONDS,
            play_clock_seconds: PLAY_CLOCK_SECONDS,
            timeouts_per_half: TIMEOUTS_PER_HALF,
            overtime_timeouts: OVERTIME_TIMEOUTS,
            post_score_spot: POST_SCORE_SPOT,
            kickoff_spot: KICKOFF_SPOT,
            timeout_resume_secs: TIMEOUT_RESUME_SECONDS,
            resume_clock_on_play_clock_expiry: true,
            orientation: FieldOrientation::default(),
            overtime_enabled: true,
            features: FeatureConfig::default(),
            teams: TeamsConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Largest timeout budget a team can legitimately hold.
    pub fn max_timeouts(&self) -> u8 {
        self.timeouts_per_half.max(self.overtime_timeouts)
    }
}

/// Optional control-panel features. The baseline panel has none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    pub play_clock_enabled: bool,
    pub manual_quarter_advance_enabled: bool,
    /// Allow scaling the physical play timer. When off the timer runs at
    /// full length.
    pub vibration_intensity: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            play_clock_enabled: true,
            manual_quarter_advance_enabled: true,
            vibration_intensity: true,
        }
    }
}

impl FeatureConfig {
    /// The single-clock panel with no optional controls.
    pub fn baseline() -> Self {
        Self {
            play_clock_enabled: false,
            manual_quarter_advance_enabled: false,
            vibration_intensity: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamsConfig {
    pub team_a: TeamConfig,
    pub team_b: TeamConfig,
}

/// Starting name and colour; unset fields fall back to the stock values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    pub name: Option<String>,
    pub color: Option<String>,
}
