//! Checks a snapshot must pass before it may replace the live game.

use scoreboard_core::constants::*;
use scoreboard_core::error::PersistenceError;
use scoreboard_core::state::GameState;
use scoreboard_core::types::is_hex_color;

use crate::config::EngineConfig;

pub fn validate_snapshot(state: &GameState, config: &EngineConfig) -> Result<(), PersistenceError> {
    if !(1..=MAX_DOWN).contains(&state.down) {
        return Err(PersistenceError::invalid("down", format!("{} not in 1..=4", state.down)));
    }
    if state.yards_to_go < 1 {
        return Err(PersistenceError::invalid(
            "yards_to_go",
            format!("{} must be positive", state.yards_to_go),
        ));
    }
    if !(FIELD_MIN..=FIELD_MAX).contains(&state.ball_on) {
        return Err(PersistenceError::invalid(
            "ball_on",
            format!("{} not in {FIELD_MIN}..={FIELD_MAX}", state.ball_on),
        ));
    }
    if state.clock_seconds > MAX_QUARTER_MINUTES * 60 {
        return Err(PersistenceError::invalid(
            "clock_seconds",
            format!("{} exceeds the longest period", state.clock_seconds),
        ));
    }
    if !(1..=MAX_QUARTER_MINUTES * 60).contains(&state.period_seconds) {
        return Err(PersistenceError::invalid(
            "period_seconds",
            format!("{} is not a playable quarter length", state.period_seconds),
        ));
    }
    if state.play_clock_seconds > config.play_clock_seconds {
        return Err(PersistenceError::invalid(
            "play_clock_seconds",
            format!(
                "{} exceeds {}",
                state.play_clock_seconds, config.play_clock_seconds
            ),
        ));
    }

    for (field, team) in [("team_a", &state.team_a), ("team_b", &state.team_b)] {
        if team.name.trim().is_empty() {
            return Err(PersistenceError::invalid(field, "empty team name"));
        }
        if !is_hex_color(&team.color) {
            return Err(PersistenceError::invalid(
                field,
                format!("bad colour {:?}", team.color),
            ));
        }
        if team.timeouts > config.max_timeouts() {
            return Err(PersistenceError::invalid(
                field,
                format!("{} timeouts exceeds {}", team.timeouts, config.max_timeouts()),
            ));
        }
    }

    let vibration = &state.vibration;
    if !(0.0..=1.0).contains(&vibration.intensity) {
        return Err(PersistenceError::invalid(
            "vibration",
            format!("intensity {} not in 0..=1", vibration.intensity),
        ));
    }
    if !(MIN_PLAY_SECONDS..=MAX_PLAY_SECONDS).contains(&vibration.play_seconds) {
        return Err(PersistenceError::invalid(
            "vibration",
            format!("play_seconds {} not in 5..=30", vibration.play_seconds),
        ));
    }

    let log_len = state.log.play_log.len();
    if state.log.score_events.len() > log_len {
        return Err(PersistenceError::invalid(
            "score_events",
            "more score events than log entries",
        ));
    }
    let mut previous: Option<usize> = None;
    for event in &state.log.score_events {
        if event.log_index >= log_len {
            return Err(PersistenceError::invalid(
                "score_events",
                format!("log_index {} out of bounds", event.log_index),
            ));
        }
        if previous.is_some_and(|p| event.log_index <= p) {
            return Err(PersistenceError::invalid(
                "score_events",
                "log indices must increase",
            ));
        }
        if scoreboard_core::enums::ScoreKind::from_points(event.points).is_err() {
            return Err(PersistenceError::invalid(
                "score_events",
                format!("invalid points {}", event.points),
            ));
        }
        previous = Some(event.log_index);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreboard_core::enums::{Quarter, TeamId};
    use scoreboard_core::types::ScoreEvent;

    fn event(log_index: usize) -> ScoreEvent {
        ScoreEvent {
            team: TeamId::TeamA,
            points: 6,
            quarter: Quarter::First,
            clock_seconds: 800,
            possession_at_time: TeamId::TeamA,
            ball_on_at_time: 10,
            log_index,
        }
    }

    #[test]
    fn test_default_state_is_valid() {
        assert!(validate_snapshot(&GameState::default(), &EngineConfig::default()).is_ok());
    }

    fn rejected_field(mutate: impl FnOnce(&mut GameState)) -> &'static str {
        let mut state = GameState::default();
        mutate(&mut state);
        match validate_snapshot(&state, &EngineConfig::default()) {
            Err(PersistenceError::InvalidField { field, .. }) => field,
            other => panic!("expected an invalid field, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        assert_eq!(rejected_field(|s| s.down = 5), "down");
        assert_eq!(rejected_field(|s| s.down = 0), "down");
        assert_eq!(rejected_field(|s| s.ball_on = 0), "ball_on");
        assert_eq!(rejected_field(|s| s.ball_on = 100), "ball_on");
        assert_eq!(rejected_field(|s| s.yards_to_go = 0), "yards_to_go");
        assert_eq!(rejected_field(|s| s.period_seconds = 0), "period_seconds");
        assert_eq!(rejected_field(|s| s.team_b.timeouts = 4), "team_b");
        assert_eq!(rejected_field(|s| s.team_a.color = "red".into()), "team_a");
        assert_eq!(rejected_field(|s| s.vibration.intensity = 1.5), "vibration");
        assert_eq!(rejected_field(|s| s.vibration.play_seconds = 2), "vibration");
    }

    #[test]
    fn test_score_events_must_align_with_log() {
        let config = EngineConfig::default();
        let mut state = GameState::default();
        state.log.score_events.push(event(0));
        assert!(validate_snapshot(&state, &config).is_err(), "no log entry");

        state.log.play_log.push("Q1 13:20 - Team 1 TD (6 pts)".into());
        assert!(validate_snapshot(&state, &config).is_ok());

        state.log.play_log.push("Q1 13:20 - Team 1 XP (1 pts)".into());
        state.log.score_events.push(event(0));
        assert!(
            validate_snapshot(&state, &config).is_err(),
            "duplicate log index"
        );
    }
}
