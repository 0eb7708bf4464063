//! Error taxonomy for commands and snapshots.
//!
//! Validation errors reject a command at the boundary and leave the game
//! untouched. Persistence errors abort a load; the current game is retained.
//! Conditions that are merely pointless (no timeouts left, nothing to undo)
//! are not errors at all, see [`crate::commands::NoOpReason`].

use thiserror::Error;

use crate::enums::TeamId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("vibration intensity out of range: {0} (allowed 0.0..=1.0)")]
    IntensityOutOfRange(f64),

    #[error("unknown team: {0:?}")]
    UnknownTeam(String),

    #[error("unknown play type: {0:?} (expected pass, rush or stop)")]
    UnknownPlayType(String),

    #[error("unknown post-touchdown choice: {0:?}")]
    UnknownChoice(String),

    #[error("invalid point value: {0} (expected 6, 3, 2 or 1)")]
    InvalidPoints(u32),

    #[error("post-touchdown choice pending for {team:?}")]
    PostTouchdownPending { team: TeamId },

    #[error("no post-touchdown choice is pending")]
    NoPostTouchdownPending,

    #[error("post-touchdown choice belongs to {expected:?}, not {got:?}")]
    WrongTeam { expected: TeamId, got: TeamId },

    #[error("feature disabled: {0}")]
    FeatureDisabled(&'static str),

    #[error("the game is over")]
    GameOver,

    #[error("invalid colour {0:?} (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("team name must not be empty")]
    EmptyTeamName,
}

impl ValidationError {
    /// Check `value` against an inclusive range.
    pub fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self::OutOfRange {
                field,
                value,
                min,
                max,
            })
        }
    }
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid snapshot field {field}: {detail}")]
    InvalidField { field: &'static str, detail: String },

    #[error("save slot not found: {slot}")]
    SlotNotFound { slot: String },

    #[error("invalid save slot name: {slot:?}")]
    InvalidSlot { slot: String },
}

impl PersistenceError {
    pub fn invalid(field: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            detail: detail.into(),
        }
    }
}
