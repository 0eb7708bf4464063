//! Possession changes.

use scoreboard_core::events::GameEvent;
use scoreboard_core::state::GameState;

use super::play_log;

/// Flip possession and start a new series. Logs the change.
pub fn switch(state: &mut GameState, events: &mut Vec<GameEvent>) {
    flip(state);
    let name = state.team(state.possession).name.clone();
    play_log::append(state, format!("Turnover: Possession to {name}"));
    events.push(GameEvent::Turnover {
        new_possession: state.possession,
    });
}

/// Flip possession and reset downs without a log entry. Used after scores.
pub fn flip(state: &mut GameState) {
    state.possession = state.possession.other();
    state.reset_downs();
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreboard_core::enums::TeamId;

    #[test]
    fn test_switch_resets_series() {
        let mut state = GameState::default();
        let mut events = Vec::new();
        state.down = 3;
        state.yards_to_go = 7;

        switch(&mut state, &mut events);
        assert_eq!(state.possession, TeamId::TeamB);
        assert_eq!((state.down, state.yards_to_go), (1, 10));
        assert_eq!(
            state.log.play_log,
            vec!["Q1 15:00 - Turnover: Possession to Team 2"]
        );
        assert_eq!(
            events,
            vec![GameEvent::Turnover {
                new_possession: TeamId::TeamB
            }]
        );

        switch(&mut state, &mut events);
        assert_eq!(state.possession, TeamId::TeamA, "pure toggle");
    }
}
