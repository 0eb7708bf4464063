//! Per-team timeout budget.

use scoreboard_core::commands::{NoOpReason, Outcome};
use scoreboard_core::enums::{Quarter, TeamId};
use scoreboard_core::events::GameEvent;
use scoreboard_core::state::GameState;

use super::play_log;

/// Charge one timeout to `team`. The caller pauses the clock on `Applied`.
pub fn use_timeout(state: &mut GameState, events: &mut Vec<GameEvent>, team: TeamId) -> Outcome {
    let remaining = state.team(team).timeouts;
    if remaining == 0 {
        return Outcome::NoOp(NoOpReason::NoTimeoutsRemaining);
    }
    let remaining = remaining - 1;
    state.team_mut(team).timeouts = remaining;

    let name = state.team(team).name.clone();
    play_log::append(state, format!("Timeout: {name} ({remaining} left)"));
    events.push(GameEvent::TimeoutUsed { team, remaining });
    Outcome::Applied
}

/// Refill budgets on entering a new period. Only the third quarter (second
/// half) and overtime periods refill.
pub fn refill_for_period(
    state: &mut GameState,
    quarter: Quarter,
    per_half: u8,
    per_overtime: u8,
) {
    match quarter {
        Quarter::Third => state.set_all_timeouts(per_half),
        Quarter::Overtime => state.set_all_timeouts(per_overtime),
        Quarter::First | Quarter::Second | Quarter::Fourth => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourth_timeout_is_noop() {
        let mut state = GameState::default();
        let mut events = Vec::new();
        for expected in [2, 1, 0] {
            assert_eq!(
                use_timeout(&mut state, &mut events, TeamId::TeamB),
                Outcome::Applied
            );
            assert_eq!(state.team_b.timeouts, expected);
        }
        assert_eq!(
            use_timeout(&mut state, &mut events, TeamId::TeamB),
            Outcome::NoOp(NoOpReason::NoTimeoutsRemaining)
        );
        assert_eq!(state.team_b.timeouts, 0);
        assert_eq!(state.team_a.timeouts, 3, "other team untouched");
        assert_eq!(state.log.play_log.len(), 3);
        assert_eq!(state.log.play_log[2], "Q1 15:00 - Timeout: Team 2 (0 left)");
    }

    #[test]
    fn test_refill_rules() {
        let mut state = GameState::default();
        state.set_all_timeouts(0);
        refill_for_period(&mut state, Quarter::Second, 3, 1);
        assert_eq!(state.team_a.timeouts, 0, "no refill entering Q2");
        refill_for_period(&mut state, Quarter::Fourth, 3, 1);
        assert_eq!(state.team_a.timeouts, 0, "no refill entering Q4");
        refill_for_period(&mut state, Quarter::Third, 3, 1);
        assert_eq!((state.team_a.timeouts, state.team_b.timeouts), (3, 3));
        refill_for_period(&mut state, Quarter::Overtime, 3, 1);
        assert_eq!((state.team_a.timeouts, state.team_b.timeouts), (1, 1));
    }
}
