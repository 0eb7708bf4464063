//! Save slots and log export on the local filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use scoreboard_core::enums::Quarter;
use scoreboard_core::error::PersistenceError;
use scoreboard_core::state::GameState;
use scoreboard_engine::systems::play_log;

const MAX_SLOT_LEN: usize = 64;

/// Full save file: the game snapshot plus slot bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub slot_name: String,
    /// Unix seconds, UTC.
    pub timestamp: i64,
    #[serde(flatten)]
    pub game: GameState,
}

impl SaveData {
    pub fn new(slot_name: impl Into<String>, game: GameState) -> Self {
        Self {
            slot_name: slot_name.into(),
            timestamp: Utc::now().timestamp(),
            game,
        }
    }
}

/// Lightweight metadata for listing saves without handing out full state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub slot_name: String,
    pub timestamp: i64,
    pub quarter: Quarter,
    pub score_a: u32,
    pub score_b: u32,
}

impl SaveMetadata {
    /// `"slot (Q2 7-3, 2026-10-19 14:02)"`
    pub fn describe(&self) -> String {
        let when = DateTime::<Utc>::from_timestamp(self.timestamp, 0)
            .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown time".to_string());
        let period = match self.quarter {
            Quarter::Overtime => "OT".to_string(),
            q => format!("Q{q}"),
        };
        format!(
            "{} ({period} {}-{}, {when})",
            self.slot_name, self.score_a, self.score_b
        )
    }
}

/// Slot names become file names: ASCII letters, digits, `-` and `_` only.
pub fn validate_slot(slot: &str) -> Result<(), PersistenceError> {
    let ok = !slot.is_empty()
        && slot.len() <= MAX_SLOT_LEN
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(PersistenceError::InvalidSlot {
            slot: slot.to_string(),
        })
    }
}

fn save_path(dir: &Path, slot: &str) -> PathBuf {
    dir.join(format!("{slot}.json"))
}

pub fn save_to_file(dir: &Path, data: &SaveData) -> Result<PathBuf, PersistenceError> {
    validate_slot(&data.slot_name)?;
    fs::create_dir_all(dir)?;
    let path = save_path(dir, &data.slot_name);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Reads and parses a slot. The game itself is validated by the engine on
/// load, not here.
pub fn load_from_file(dir: &Path, slot: &str) -> Result<SaveData, PersistenceError> {
    validate_slot(slot)?;
    let path = save_path(dir, slot);
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(PersistenceError::SlotNotFound {
                slot: slot.to_string(),
            })
        }
        Err(err) => return Err(err.into()),
    };
    Ok(serde_json::from_str(&json)?)
}

/// Every readable save in `dir`, newest first. Unreadable files are skipped.
pub fn list_saves(dir: &Path) -> Vec<SaveMetadata> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Vec::new(),
    };

    let mut saves = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }
        let Ok(json) = fs::read_to_string(&path) else {
            continue;
        };
        match serde_json::from_str::<SaveData>(&json) {
            Ok(data) => saves.push(SaveMetadata {
                slot_name: data.slot_name,
                timestamp: data.timestamp,
                quarter: data.game.quarter,
                score_a: data.game.team_a.score,
                score_b: data.game.team_b.score,
            }),
            Err(err) => tracing::debug!(path = %path.display(), %err, "skipping unreadable save"),
        }
    }
    saves.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| a.slot_name.cmp(&b.slot_name))
    });
    saves
}

/// Removes a slot. Deleting a slot that does not exist is not an error.
pub fn delete_save(dir: &Path, slot: &str) -> Result<(), PersistenceError> {
    validate_slot(slot)?;
    let path = save_path(dir, slot);
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}

/// Writes the plain-text game log to `path`, stamped with the local time.
pub fn export_log(path: &Path, state: &GameState) -> Result<(), PersistenceError> {
    let exported_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    export_log_at(path, state, &exported_at)
}

fn export_log_at(path: &Path, state: &GameState, exported_at: &str) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, play_log::export_text(state, exported_at))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn game_with_score(a: u32, b: u32) -> GameState {
        let mut game = GameState::default();
        game.team_a.score = a;
        game.team_b.score = b;
        game
    }

    #[test]
    fn save_data_roundtrip() {
        let data = SaveData::new("test", game_with_score(7, 3));
        let json = serde_json::to_string(&data).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["slot_name"], "test");
        assert!(value.get("ball_on").is_some(), "game fields sit at top level");
        assert!(value.get("play_log").is_some());

        let restored: SaveData = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, data);
    }

    #[test]
    fn save_and_load_file() {
        let dir = TempDir::new().unwrap();
        let data = SaveData::new("slot1", game_with_score(14, 10));
        let path = save_to_file(dir.path(), &data).unwrap();
        assert!(path.ends_with("slot1.json"));

        let loaded = load_from_file(dir.path(), "slot1").unwrap();
        assert_eq!(loaded.game.team_a.score, 14);
        assert_eq!(loaded.game, data.game);
    }

    #[test]
    fn load_missing_slot() {
        let dir = TempDir::new().unwrap();
        let err = load_from_file(dir.path(), "nope").unwrap_err();
        assert!(matches!(err, PersistenceError::SlotNotFound { .. }));
    }

    #[test]
    fn load_malformed_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        let err = load_from_file(dir.path(), "broken").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed(_)));
    }

    #[test]
    fn load_rejects_missing_field() {
        let dir = TempDir::new().unwrap();
        let mut value = serde_json::to_value(SaveData::new("partial", GameState::default())).unwrap();
        value.as_object_mut().unwrap().remove("ball_on");
        fs::write(dir.path().join("partial.json"), value.to_string()).unwrap();
        assert!(matches!(
            load_from_file(dir.path(), "partial"),
            Err(PersistenceError::Malformed(_))
        ));
    }

    #[test]
    fn slot_names_are_checked() {
        for bad in ["", "../escape", "has space", "dot.json", &"x".repeat(65)] {
            assert!(
                matches!(validate_slot(bad), Err(PersistenceError::InvalidSlot { .. })),
                "{bad:?} should be rejected"
            );
        }
        validate_slot("halftime_2-B").unwrap();

        let dir = TempDir::new().unwrap();
        let data = SaveData::new("../escape", GameState::default());
        assert!(save_to_file(dir.path(), &data).is_err());
    }

    #[test]
    fn list_saves_empty() {
        let dir = TempDir::new().unwrap();
        assert!(list_saves(&dir.path().join("missing")).is_empty());
        assert!(list_saves(dir.path()).is_empty());
    }

    #[test]
    fn list_saves_newest_first() {
        let dir = TempDir::new().unwrap();

        let mut early = SaveData::new("early", game_with_score(0, 0));
        early.timestamp = 1000;
        save_to_file(dir.path(), &early).unwrap();

        let mut late = SaveData::new("late", game_with_score(21, 17));
        late.timestamp = 2000;
        save_to_file(dir.path(), &late).unwrap();

        fs::write(dir.path().join("junk.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let saves = list_saves(dir.path());
        assert_eq!(saves.len(), 2);
        assert_eq!(saves[0].slot_name, "late");
        assert_eq!(saves[0].score_a, 21);
        assert_eq!(saves[1].slot_name, "early");
        assert!(saves[0].describe().starts_with("late (Q1 21-17, "));
    }

    #[test]
    fn delete_save_removes_file() {
        let dir = TempDir::new().unwrap();
        let data = SaveData::new("todelete", GameState::default());
        save_to_file(dir.path(), &data).unwrap();
        assert!(save_path(dir.path(), "todelete").exists());

        delete_save(dir.path(), "todelete").unwrap();
        assert!(!save_path(dir.path(), "todelete").exists());
        delete_save(dir.path(), "todelete").unwrap();
    }

    #[test]
    fn export_writes_header_and_log() {
        let dir = TempDir::new().unwrap();
        let mut game = game_with_score(7, 0);
        game.log.play_log.push("Q1 12:00 - Team 1 TD (6 pts)".into());
        game.log.play_log.push("Q1 12:00 - Team 1 XP (1 pts)".into());

        let path = dir.path().join("logs").join("game.txt");
        export_log_at(&path, &game, "2026-10-19 20:00:00").unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Electric Football Game Log");
        assert_eq!(lines[1], "Team 1 vs Team 2");
        assert_eq!(lines[2], "Final Score: Team 1 7 - Team 2 0");
        assert_eq!(lines[4], "Exported: 2026-10-19 20:00:00");
        assert_eq!(lines[5], "");
        assert_eq!(&lines[6..], ["Q1 12:00 - Team 1 TD (6 pts)", "Q1 12:00 - Team 1 XP (1 pts)"]);
    }
}
