//! The persisted game aggregate and the display view derived from it.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::*;

/// Complete persisted state of one game.
///
/// Owned exclusively by the engine. Adapters only ever see a clone (via
/// `save()`) or the derived [`GameView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub team_a: TeamState,
    pub team_b: TeamState,
    pub quarter: Quarter,
    pub clock_seconds: u32,
    /// Regulation quarter length. Older snapshots without it get the stock
    /// fifteen minutes.
    #[serde(default = "default_period_seconds")]
    pub period_seconds: u32,
    pub play_clock_seconds: u32,
    pub down: u8,
    pub yards_to_go: i32,
    /// Unified field coordinate; 0 and 100 are the end zones.
    pub ball_on: i32,
    pub possession: TeamId,
    pub weather: String,
    pub overtime_enabled: bool,
    pub vibration: VibrationSettings,
    #[serde(flatten)]
    pub log: PlayLog,
}

fn default_period_seconds() -> u32 {
    PERIOD_SECONDS
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            team_a: TeamState::new(DEFAULT_TEAM_A_NAME, DEFAULT_TEAM_A_COLOR, TIMEOUTS_PER_HALF),
            team_b: TeamState::new(DEFAULT_TEAM_B_NAME, DEFAULT_TEAM_B_COLOR, TIMEOUTS_PER_HALF),
            quarter: Quarter::First,
            clock_seconds: PERIOD_SECONDS,
            period_seconds: PERIOD_SECONDS,
            play_clock_seconds: PLAY_CLOCK_SECONDS,
            down: 1,
            yards_to_go: FIRST_DOWN_YARDS,
            ball_on: MIDFIELD,
            possession: TeamId::TeamA,
            weather: DEFAULT_WEATHER.to_string(),
            overtime_enabled: true,
            vibration: VibrationSettings::default(),
            log: PlayLog::default(),
        }
    }
}

impl GameState {
    pub fn team(&self, id: TeamId) -> &TeamState {
        match id {
            TeamId::TeamA => &self.team_a,
            TeamId::TeamB => &self.team_b,
        }
    }

    pub fn team_mut(&mut self, id: TeamId) -> &mut TeamState {
        match id {
            TeamId::TeamA => &mut self.team_a,
            TeamId::TeamB => &mut self.team_b,
        }
    }

    pub fn scores_tied(&self) -> bool {
        self.team_a.score == self.team_b.score
    }

    /// The leading team, or `None` when tied.
    pub fn leader(&self) -> Option<TeamId> {
        use std::cmp::Ordering;
        match self.team_a.score.cmp(&self.team_b.score) {
            Ordering::Greater => Some(TeamId::TeamA),
            Ordering::Less => Some(TeamId::TeamB),
            Ordering::Equal => None,
        }
    }

    pub fn set_all_timeouts(&mut self, timeouts: u8) {
        self.team_a.timeouts = timeouts;
        self.team_b.timeouts = timeouts;
    }

    /// Start a new series: first down and ten.
    pub fn reset_downs(&mut self) {
        self.down = 1;
        self.yards_to_go = FIRST_DOWN_YARDS;
    }
}

/// Display snapshot sent to the presentation adapter after every step.
///
/// Every text field is derived; nothing here is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub tick: u64,
    pub phase: GamePhase,
    pub quarter: Quarter,
    pub quarter_text: String,
    pub clock_state: ClockState,
    pub clock_seconds: u32,
    pub clock_text: String,
    pub play_clock_enabled: bool,
    pub play_clock_armed: bool,
    pub play_clock_seconds: u32,
    pub down: u8,
    pub yards_to_go: i32,
    /// e.g. `3rd & 4` or `1st & Goal`.
    pub down_and_distance: String,
    pub ball_on: i32,
    pub ball_on_text: String,
    pub possession: TeamId,
    pub team_a: TeamView,
    pub team_b: TeamView,
    pub weather: String,
    pub overtime_enabled: bool,
    pub vibration: VibrationSettings,
    pub pending: Option<PendingDecision>,
    pub last_play: Option<LastPlay>,
    pub last_play_text: Option<String>,
    /// Narrative entries for scores only.
    pub box_score: Vec<String>,
    pub play_log: Vec<String>,
    /// Set once the game is final; `None` inside means a tie.
    pub winner: Option<Option<TeamId>>,
    pub result_text: Option<String>,
}

/// One team's panel on the display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamView {
    pub id: TeamId,
    pub name: String,
    pub color: String,
    pub score: u32,
    pub timeouts: u8,
    pub has_possession: bool,
    pub stats: TeamStats,
    pub stats_line: String,
}
