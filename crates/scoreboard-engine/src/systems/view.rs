//! View system: derives the display `GameView` from the game state.
//!
//! Read-only. All display text is recomputed here, so a freshly loaded state
//! renders exactly like one that was played to the same point.

use scoreboard_core::enums::*;
use scoreboard_core::state::{GameState, GameView, TeamView};
use scoreboard_core::types::{format_clock, LastPlay};

use super::clock::ClockController;
use super::{field, play_log};

/// Runtime context the view needs beyond the persisted state.
pub struct ViewContext<'a> {
    pub tick: u64,
    pub phase: GamePhase,
    pub clock: &'a ClockController,
    pub orientation: FieldOrientation,
    pub play_clock_enabled: bool,
    pub pending: Option<PendingDecision>,
    pub last_play: Option<LastPlay>,
}

pub fn build_view(state: &GameState, ctx: &ViewContext<'_>) -> GameView {
    let winner = match ctx.phase {
        GamePhase::Final => Some(state.leader()),
        GamePhase::InProgress => None,
    };

    GameView {
        tick: ctx.tick,
        phase: ctx.phase,
        quarter: state.quarter,
        quarter_text: quarter_text(state.quarter),
        clock_state: ctx.clock.state(),
        clock_seconds: state.clock_seconds,
        clock_text: format_clock(state.clock_seconds),
        play_clock_enabled: ctx.play_clock_enabled,
        play_clock_armed: ctx.clock.play_clock_armed(),
        play_clock_seconds: state.play_clock_seconds,
        down: state.down,
        yards_to_go: state.yards_to_go,
        down_and_distance: field::down_and_distance_text(state, ctx.orientation),
        ball_on: state.ball_on,
        ball_on_text: field::yard_line_text(state, ctx.orientation, state.ball_on),
        possession: state.possession,
        team_a: build_team(state, TeamId::TeamA),
        team_b: build_team(state, TeamId::TeamB),
        weather: state.weather.clone(),
        overtime_enabled: state.overtime_enabled,
        vibration: state.vibration,
        pending: ctx.pending,
        last_play: ctx.last_play,
        last_play_text: ctx
            .last_play
            .map(|play| last_play_text(state, ctx.orientation, &play)),
        box_score: play_log::box_score(state),
        play_log: state.log.play_log.clone(),
        winner,
        result_text: winner.map(|w| result_text(state, w)),
    }
}

fn build_team(state: &GameState, id: TeamId) -> TeamView {
    let team = state.team(id);
    TeamView {
        id,
        name: team.name.clone(),
        color: team.color.clone(),
        score: team.score,
        timeouts: team.timeouts,
        has_possession: state.possession == id,
        stats: team.stats,
        stats_line: team.stats.summary_line(),
    }
}

pub fn quarter_text(quarter: Quarter) -> String {
    match quarter {
        Quarter::Overtime => "OT".to_string(),
        q => format!("Q{q}"),
    }
}

/// `Rush +7: Team 2 25 to Team 2 32`
fn last_play_text(state: &GameState, orientation: FieldOrientation, play: &LastPlay) -> String {
    format!(
        "{} {:+}: {} to {}",
        play.play_type.label(),
        play.yards,
        field::yard_line_text(state, orientation, play.start),
        field::yard_line_text(state, orientation, play.end),
    )
}

fn result_text(state: &GameState, winner: Option<TeamId>) -> String {
    let (a, b) = (state.team_a.score, state.team_b.score);
    match winner {
        Some(team) => {
            let (high, low) = if a >= b { (a, b) } else { (b, a) };
            format!("{} wins {}-{}", state.team(team).name, high, low)
        }
        None => format!("Tie {a}-{b}"),
    }
}
