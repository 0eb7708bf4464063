//! Point awards and single-step undo.

use tracing::info;

use scoreboard_core::enums::{ScoreKind, TeamId};
use scoreboard_core::events::{AudioCue, GameEvent, VisualCue};
use scoreboard_core::state::GameState;
use scoreboard_core::types::ScoreEvent;

use super::play_log;

/// Credit `kind` to `team`. Returns the index of the new score event.
///
/// The event captures the ball position and possession as they are now, so
/// callers resolving a scoring play must award before moving the ball.
pub fn award(
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
    team: TeamId,
    kind: ScoreKind,
) -> usize {
    let points = kind.points();
    state.team_mut(team).score += points;

    let name = state.team(team).name.clone();
    let log_index = play_log::append(
        state,
        format!("{} {} ({} pts)", name, kind.abbreviation(), points),
    );
    let event = ScoreEvent {
        team,
        points,
        quarter: state.quarter,
        clock_seconds: state.clock_seconds,
        possession_at_time: state.possession,
        ball_on_at_time: state.ball_on,
        log_index,
    };
    let index = play_log::push_score_event(state, event);

    let score = state.team(team).score;
    info!(?team, points, score, "score awarded");
    events.push(GameEvent::ScoreChanged {
        team,
        points: points as i32,
        score,
    });
    match kind {
        ScoreKind::Touchdown => events.push(GameEvent::Audio {
            cue: AudioCue::Touchdown,
        }),
        ScoreKind::FieldGoal => events.push(GameEvent::Audio {
            cue: AudioCue::FieldGoal,
        }),
        ScoreKind::ExtraPoint | ScoreKind::TwoPointOrSafety => {}
    }
    events.push(GameEvent::Visual {
        cue: VisualCue::ScoreFlash { team },
    });
    index
}

/// Reverse the most recent score. Returns the removed event and its stack
/// index, or `None` when there is nothing to undo.
pub fn undo_last(state: &mut GameState, events: &mut Vec<GameEvent>) -> Option<(usize, ScoreEvent)> {
    let event = play_log::pop_score_event(state)?;
    let index = state.log.score_events.len();

    let team = state.team_mut(event.team);
    team.score = team.score.saturating_sub(event.points);
    let score = team.score;

    play_log::remove_entry(state, event.log_index);
    state.ball_on = event.ball_on_at_time;
    state.possession = event.possession_at_time;

    info!(team = ?event.team, points = event.points, score, "score undone");
    events.push(GameEvent::ScoreChanged {
        team: event.team,
        points: -(event.points as i32),
        score,
    });
    Some((index, event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreboard_core::enums::Quarter;

    #[test]
    fn test_award_writes_event_and_entry() {
        let mut state = GameState::default();
        let mut events = Vec::new();
        state.ball_on = 4;
        state.quarter = Quarter::Second;
        state.clock_seconds = 421;

        let idx = award(&mut state, &mut events, TeamId::TeamA, ScoreKind::Touchdown);
        assert_eq!(idx, 0);
        assert_eq!(state.team_a.score, 6);
        assert_eq!(state.log.play_log, vec!["Q2 07:01 - Team 1 TD (6 pts)"]);

        let event = &state.log.score_events[0];
        assert_eq!(event.ball_on_at_time, 4);
        assert_eq!(event.log_index, 0);
        assert_eq!(event.quarter, Quarter::Second);
        assert!(events.contains(&GameEvent::Audio {
            cue: AudioCue::Touchdown
        }));
        assert!(events.contains(&GameEvent::Visual {
            cue: VisualCue::ScoreFlash {
                team: TeamId::TeamA
            }
        }));
    }

    #[test]
    fn test_field_goal_cue_and_no_cue_for_extra_point() {
        let mut state = GameState::default();
        let mut events = Vec::new();
        award(&mut state, &mut events, TeamId::TeamB, ScoreKind::FieldGoal);
        assert!(events.contains(&GameEvent::Audio {
            cue: AudioCue::FieldGoal
        }));

        events.clear();
        award(&mut state, &mut events, TeamId::TeamB, ScoreKind::ExtraPoint);
        assert!(!events
            .iter()
            .any(|e| matches!(e, GameEvent::Audio { .. })));
        assert_eq!(state.team_b.score, 4);
    }

    #[test]
    fn test_undo_restores_exactly() {
        let mut state = GameState::default();
        let mut events = Vec::new();
        play_log::append(&mut state, "Kickoff");
        state.ball_on = 12;
        award(&mut state, &mut events, TeamId::TeamA, ScoreKind::Touchdown);
        state.ball_on = 35;
        state.possession = TeamId::TeamB;
        play_log::append(&mut state, "later entry");

        let (index, undone) = undo_last(&mut state, &mut events).unwrap();
        assert_eq!(index, 0);
        assert_eq!(undone.points, 6);
        assert_eq!(state.team_a.score, 0);
        assert_eq!(state.ball_on, 12);
        assert_eq!(state.possession, TeamId::TeamA);
        assert_eq!(state.log.play_log.len(), 2, "exactly one entry removed");
        assert!(state.log.play_log[1].ends_with("later entry"));
    }

    #[test]
    fn test_undo_empty_stack() {
        let mut state = GameState::default();
        let mut events = Vec::new();
        assert!(undo_last(&mut state, &mut events).is_none());
        assert!(events.is_empty());
    }
}
