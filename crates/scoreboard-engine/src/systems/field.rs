//! Ball position arithmetic on the unified 0..100 field.
//!
//! These are pure helpers; the engine decides what a touchdown or a first
//! down means for the rest of the game.

use scoreboard_core::constants::*;
use scoreboard_core::enums::{FieldOrientation, TeamId};
use scoreboard_core::state::GameState;
use scoreboard_core::types::down_label;

/// Result of moving the ball for the team in possession.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallMovement {
    /// Ball stays in play at `to` (already clamped).
    Moved { to: i32 },
    /// Raw result reached or crossed the target goal line.
    Touchdown,
}

pub fn clamp_to_field(position: i32) -> i32 {
    position.clamp(FIELD_MIN, FIELD_MAX)
}

/// Where `yards` carries the ball for `team`. Nothing is mutated.
pub fn project_gain(
    orientation: FieldOrientation,
    team: TeamId,
    ball_on: i32,
    yards: i32,
) -> BallMovement {
    let direction = orientation.direction(team);
    let raw = ball_on + direction * yards;
    let target = orientation.target_goal(team);
    let scored = if direction > 0 { raw >= target } else { raw <= target };
    if scored {
        BallMovement::Touchdown
    } else {
        BallMovement::Moved {
            to: clamp_to_field(raw),
        }
    }
}

/// Spot after a kickoff from `kicker`'s `kickoff_spot` yard line.
pub fn kickoff_result(
    orientation: FieldOrientation,
    kicker: TeamId,
    kickoff_spot: i32,
    kick_distance: i32,
    return_yards: i32,
) -> i32 {
    let direction = orientation.direction(kicker);
    let tee = orientation.own_goal(kicker) + direction * kickoff_spot;
    clamp_to_field(tee + direction * (kick_distance - return_yards))
}

/// `yard_line` measured from the goal line `side` defends.
pub fn place_on_side(orientation: FieldOrientation, side: TeamId, yard_line: i32) -> i32 {
    clamp_to_field(orientation.own_goal(side) + orientation.direction(side) * yard_line)
}

/// Spot after a penalty on `penalized`. Never scores.
pub fn penalty_result(
    orientation: FieldOrientation,
    offense: TeamId,
    penalized: TeamId,
    ball_on: i32,
    yards: i32,
) -> i32 {
    let direction = orientation.direction(offense);
    let delta = if penalized == offense {
        -direction * yards
    } else {
        direction * yards
    };
    clamp_to_field(ball_on + delta)
}

/// Distance from the ball to the goal line `team` attacks.
pub fn yards_to_goal(orientation: FieldOrientation, team: TeamId, ball_on: i32) -> i32 {
    (orientation.target_goal(team) - ball_on).abs()
}

/// `50` at midfield, else `<defender of that half> <yards from that goal>`.
pub fn yard_line_text(state: &GameState, orientation: FieldOrientation, ball_on: i32) -> String {
    if ball_on == MIDFIELD {
        return MIDFIELD.to_string();
    }
    let low = orientation.low_end_defender();
    let (side, distance) = if ball_on < MIDFIELD {
        (low, ball_on)
    } else {
        (low.other(), 100 - ball_on)
    };
    format!("{} {}", state.team(side).name, distance)
}

/// `3rd & 4`, or `1st & Goal` when the line to gain is in the end zone.
pub fn down_and_distance_text(state: &GameState, orientation: FieldOrientation) -> String {
    let to_goal = yards_to_goal(orientation, state.possession, state.ball_on);
    let distance = if state.yards_to_go >= to_goal {
        "Goal".to_string()
    } else {
        state.yards_to_go.to_string()
    };
    format!("{} & {}", down_label(state.down), distance)
}
