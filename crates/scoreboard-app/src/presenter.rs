//! Presentation adapters: where views and notifications go after each tick.

use std::io::{self, Write};

use serde::Serialize;

use scoreboard_core::events::GameEvent;
use scoreboard_core::state::GameView;

/// Receives the display snapshot and the notifications of one tick.
pub trait Presenter {
    fn present(&mut self, view: &GameView, events: &[GameEvent]) -> io::Result<()>;
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Line<'a> {
    Event(&'a GameEvent),
    View(&'a GameView),
}

/// One JSON object per line: events first, then the view.
pub struct JsonLinesPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &Line<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, line)?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> Presenter for JsonLinesPresenter<W> {
    fn present(&mut self, view: &GameView, events: &[GameEvent]) -> io::Result<()> {
        for event in events {
            self.write_line(&Line::Event(event))?;
        }
        self.write_line(&Line::View(view))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreboard_core::enums::TeamId;
    use scoreboard_core::events::{AudioCue, Notice};
    use scoreboard_engine::{EngineConfig, ScoreboardEngine};

    #[test]
    fn test_json_lines_output() {
        let engine = ScoreboardEngine::new(EngineConfig::default());
        let view = engine.view();
        let events = vec![
            GameEvent::FirstDown {
                team: TeamId::TeamA,
            },
            GameEvent::Audio {
                cue: AudioCue::Touchdown,
            },
            GameEvent::Notice(Notice::info("Saved")),
        ];

        let mut presenter = JsonLinesPresenter::new(Vec::new());
        presenter.present(&view, &events).unwrap();
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["kind"], "event");
        assert_eq!(lines[0]["type"], "FirstDown");
        assert_eq!(lines[1]["cue"], "Touchdown");
        assert_eq!(lines[2]["type"], "Notice");
        assert_eq!(lines[2]["message"], "Saved");
        assert_eq!(lines[3]["kind"], "view");
        assert_eq!(lines[3]["clock_text"], "15:00");
    }

    #[test]
    fn test_view_only_when_quiet() {
        let engine = ScoreboardEngine::new(EngineConfig::default());
        let mut presenter = JsonLinesPresenter::new(Vec::new());
        presenter.present(&engine.view(), &[]).unwrap();
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.ends_with('\n'));
    }
}
