//! Narrative play log and the score-event stack that indexes into it.

use scoreboard_core::enums::Quarter;
use scoreboard_core::state::GameState;
use scoreboard_core::types::{format_clock, ScoreEvent};

/// `Q1 12:34` or `OT 04:10`.
pub fn stamp(quarter: Quarter, clock_seconds: u32) -> String {
    match quarter {
        Quarter::Overtime => format!("OT {}", format_clock(clock_seconds)),
        q => format!("Q{} {}", q, format_clock(clock_seconds)),
    }
}

/// Append a stamped entry and return its index.
pub fn append(state: &mut GameState, text: impl AsRef<str>) -> usize {
    let entry = format!(
        "{} - {}",
        stamp(state.quarter, state.clock_seconds),
        text.as_ref()
    );
    state.log.play_log.push(entry);
    state.log.play_log.len() - 1
}

/// Remove the entry at `index`, keeping score-event indices pointing at the
/// right entries.
pub fn remove_entry(state: &mut GameState, index: usize) -> Option<String> {
    if index >= state.log.play_log.len() {
        return None;
    }
    let removed = state.log.play_log.remove(index);
    for event in state.log.score_events.iter_mut() {
        if event.log_index > index {
            event.log_index -= 1;
        }
    }
    Some(removed)
}

pub fn push_score_event(state: &mut GameState, event: ScoreEvent) -> usize {
    state.log.score_events.push(event);
    state.log.score_events.len() - 1
}

pub fn pop_score_event(state: &mut GameState) -> Option<ScoreEvent> {
    state.log.score_events.pop()
}

/// Empty the narrative log and the score stack together.
pub fn clear(state: &mut GameState) {
    state.log.play_log.clear();
    state.log.score_events.clear();
}

/// Narrative entries written for scores, oldest first.
pub fn box_score(state: &GameState) -> Vec<String> {
    state
        .log
        .score_events
        .iter()
        .filter_map(|e| state.log.play_log.get(e.log_index).cloned())
        .collect()
}

/// Plain-text export: a header block followed by the whole narrative.
pub fn export_text(state: &GameState, exported_at: &str) -> String {
    let mut out = String::new();
    out.push_str("Electric Football Game Log\n");
    out.push_str(&format!(
        "{} vs {}\n",
        state.team_a.name, state.team_b.name
    ));
    out.push_str(&format!(
        "Final Score: {} {} - {} {}\n",
        state.team_a.name, state.team_a.score, state.team_b.name, state.team_b.score
    ));
    out.push_str(&format!("Weather: {}\n", state.weather));
    out.push_str(&format!("Exported: {exported_at}\n"));
    out.push('\n');
    for entry in &state.log.play_log {
        out.push_str(entry);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreboard_core::enums::TeamId;

    fn score_event(log_index: usize) -> ScoreEvent {
        ScoreEvent {
            team: TeamId::TeamA,
            points: 3,
            quarter: Quarter::First,
            clock_seconds: 900,
            possession_at_time: TeamId::TeamA,
            ball_on_at_time: 20,
            log_index,
        }
    }

    #[test]
    fn test_entries_are_stamped() {
        let mut state = GameState::default();
        state.clock_seconds = 754;
        let idx = append(&mut state, "Kickoff: Team 1 to Team 2 25");
        assert_eq!(idx, 0);
        assert_eq!(state.log.play_log[0], "Q1 12:34 - Kickoff: Team 1 to Team 2 25");

        state.quarter = Quarter::Overtime;
        state.clock_seconds = 300;
        append(&mut state, "Start of overtime");
        assert_eq!(state.log.play_log[1], "OT 05:00 - Start of overtime");
    }

    #[test]
    fn test_remove_entry_shifts_later_indices() {
        let mut state = GameState::default();
        append(&mut state, "a");
        append(&mut state, "b");
        append(&mut state, "c");
        push_score_event(&mut state, score_event(0));
        push_score_event(&mut state, score_event(2));

        assert_eq!(remove_entry(&mut state, 1).as_deref(), Some("Q1 15:00 - b"));
        assert_eq!(state.log.score_events[0].log_index, 0);
        assert_eq!(state.log.score_events[1].log_index, 1);
        assert_eq!(box_score(&state), vec!["Q1 15:00 - a", "Q1 15:00 - c"]);
        assert_eq!(remove_entry(&mut state, 9), None);
    }

    #[test]
    fn test_clear_empties_both() {
        let mut state = GameState::default();
        append(&mut state, "a");
        push_score_event(&mut state, score_event(0));
        clear(&mut state);
        assert!(state.log.play_log.is_empty());
        assert!(state.log.score_events.is_empty());
    }

    #[test]
    fn test_export_header() {
        let mut state = GameState::default();
        state.team_a.score = 7;
        append(&mut state, "Team 1 TD (6 pts)");
        let text = export_text(&state, "2026-01-01 12:00:00");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Team 1 vs Team 2");
        assert_eq!(lines[2], "Final Score: Team 1 7 - Team 2 0");
        assert_eq!(lines[3], "Weather: Clear");
        assert_eq!(lines[4], "Exported: 2026-01-01 12:00:00");
        assert_eq!(lines[6], "Q1 15:00 - Team 1 TD (6 pts)");
    }
}
