//! Enumeration types used throughout the scoreboard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the two fixed team identities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamId {
    #[default]
    TeamA,
    TeamB,
}

impl TeamId {
    /// The opposing team.
    pub fn other(self) -> Self {
        match self {
            Self::TeamA => Self::TeamB,
            Self::TeamB => Self::TeamA,
        }
    }

    pub fn both() -> [TeamId; 2] {
        [Self::TeamA, Self::TeamB]
    }
}

impl FromStr for TeamId {
    type Err = ValidationError;

    /// Accepts the control panel spellings: `a`/`b`, `1`/`2`, `team_a`/`team_b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "1" | "team_a" | "teama" | "team1" => Ok(Self::TeamA),
            "b" | "2" | "team_b" | "teamb" | "team2" => Ok(Self::TeamB),
            _ => Err(ValidationError::UnknownTeam(s.to_string())),
        }
    }
}

/// Game period. Regulation has four quarters followed by optional overtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quarter {
    #[default]
    First,
    Second,
    Third,
    Fourth,
    Overtime,
}

impl Quarter {
    /// The following regulation quarter, or `None` after the fourth.
    pub fn next_regulation(self) -> Option<Quarter> {
        match self {
            Self::First => Some(Self::Second),
            Self::Second => Some(Self::Third),
            Self::Third => Some(Self::Fourth),
            Self::Fourth | Self::Overtime => None,
        }
    }

    pub fn is_regulation(self) -> bool {
        self != Self::Overtime
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
            Self::Fourth => "4",
            Self::Overtime => "OT",
        };
        f.write_str(label)
    }
}

/// Kind of scrimmage play reported by the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayType {
    Pass,
    Rush,
    /// Play stopped at the line; counts toward total yards only.
    Stop,
}

impl PlayType {
    pub const ALL: [PlayType; 3] = [Self::Pass, Self::Rush, Self::Stop];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Rush => "Rush",
            Self::Stop => "Stop",
        }
    }
}

impl FromStr for PlayType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pass" => Ok(Self::Pass),
            "rush" => Ok(Self::Rush),
            "stop" => Ok(Self::Stop),
            _ => Err(ValidationError::UnknownPlayType(s.to_string())),
        }
    }
}

/// Decision required after a touchdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostTouchdownChoice {
    /// Extra point kick (+1).
    Pat,
    /// Two-point conversion (+2).
    TwoPoint,
    /// Skip the try and go straight to the kickoff.
    Kickoff,
}

impl FromStr for PostTouchdownChoice {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "pat" | "xp" => Ok(Self::Pat),
            "2" | "two_point" | "2pt" => Ok(Self::TwoPoint),
            "3" | "kickoff" => Ok(Self::Kickoff),
            _ => Err(ValidationError::UnknownChoice(s.to_string())),
        }
    }
}

/// What a point value means on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreKind {
    Touchdown,
    FieldGoal,
    ExtraPoint,
    /// Two-point conversion or safety; both are worth 2.
    TwoPointOrSafety,
}

impl ScoreKind {
    pub fn from_points(points: u32) -> Result<Self, ValidationError> {
        match points {
            6 => Ok(Self::Touchdown),
            3 => Ok(Self::FieldGoal),
            1 => Ok(Self::ExtraPoint),
            2 => Ok(Self::TwoPointOrSafety),
            other => Err(ValidationError::InvalidPoints(other)),
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Self::Touchdown => 6,
            Self::FieldGoal => 3,
            Self::ExtraPoint => 1,
            Self::TwoPointOrSafety => 2,
        }
    }

    /// Short box-score abbreviation.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Touchdown => "TD",
            Self::FieldGoal => "FG",
            Self::ExtraPoint => "XP",
            Self::TwoPointOrSafety => "2PT/Safety",
        }
    }
}

/// Game clock run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockState {
    Running,
    #[default]
    Paused,
    /// Reached zero; the period transition runs before the next tick.
    Expired,
}

/// Which end zone each team defends. Fixed for the whole game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrientation {
    /// Team A defends the 100 end and drives toward 0.
    #[default]
    TeamADefendsHundred,
    /// Team A defends the 0 end and drives toward 100.
    TeamADefendsZero,
}

impl FieldOrientation {
    /// Sign of a gain for `team` on the unified 0..100 coordinate.
    pub fn direction(self, team: TeamId) -> i32 {
        match (self, team) {
            (Self::TeamADefendsHundred, TeamId::TeamA) => -1,
            (Self::TeamADefendsHundred, TeamId::TeamB) => 1,
            (Self::TeamADefendsZero, TeamId::TeamA) => 1,
            (Self::TeamADefendsZero, TeamId::TeamB) => -1,
        }
    }

    /// Coordinate of the goal line `team` defends.
    pub fn own_goal(self, team: TeamId) -> i32 {
        if self.direction(team) > 0 {
            0
        } else {
            100
        }
    }

    /// Coordinate of the goal line `team` attacks.
    pub fn target_goal(self, team: TeamId) -> i32 {
        100 - self.own_goal(team)
    }

    /// The team whose half holds the low (`< 50`) coordinates.
    pub fn low_end_defender(self) -> TeamId {
        match self {
            Self::TeamADefendsHundred => TeamId::TeamB,
            Self::TeamADefendsZero => TeamId::TeamA,
        }
    }
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    InProgress,
    /// Regulation (or overtime) has ended; only review commands remain.
    Final,
}

/// Decision the engine is waiting on before play continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PendingDecision {
    /// A touchdown was scored; PAT, two-point try or kickoff must be chosen.
    PostTouchdown { team: TeamId },
    /// A kickoff must be entered. `kicking_team` is the expected kicker when known.
    Kickoff { kicking_team: Option<TeamId> },
}

/// Notice severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Warning,
}
