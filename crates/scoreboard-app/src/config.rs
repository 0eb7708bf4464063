//! Host configuration: engine settings plus where saves go and how fast the
//! loop ticks. Loaded from TOML; every key is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use scoreboard_engine::EngineConfig;

use crate::game_loop::{LoopSettings, TICK_DURATION};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub engine: EngineConfig,
    pub save_dir: PathBuf,
    /// Wall-clock length of one engine tick.
    pub tick_millis: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            save_dir: PathBuf::from("saves"),
            tick_millis: TICK_DURATION.as_millis() as u64,
        }
    }
}

/// Values from the command line that win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub team_a: Option<String>,
    pub team_b: Option<String>,
    pub overtime: Option<bool>,
    pub seed: Option<u64>,
    pub save_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// File if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(name) = overrides.team_a {
            self.engine.teams.team_a.name = Some(name);
        }
        if let Some(name) = overrides.team_b {
            self.engine.teams.team_b.name = Some(name);
        }
        if let Some(overtime) = overrides.overtime {
            self.engine.overtime_enabled = overtime;
        }
        if let Some(seed) = overrides.seed {
            self.engine.seed = seed;
        }
        if let Some(dir) = overrides.save_dir {
            self.save_dir = dir;
        }
    }

    pub fn loop_settings(&self) -> LoopSettings {
        LoopSettings {
            tick: Duration::from_millis(self.tick_millis.max(1)),
            save_dir: self.save_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreboard_core::enums::FieldOrientation;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tick_millis, 1000);
    }

    #[test]
    fn test_partial_file() {
        let config = AppConfig::from_toml_str(
            r##"
            period_seconds = 300
            timeout_resume_secs = 0
            orientation = "team_a_defends_zero"
            save_dir = "/tmp/scoreboard"
            tick_millis = 250

            [features]
            play_clock_enabled = false

            [teams.team_a]
            name = "Packers"
            color = "#203731"
            "##,
        )
        .unwrap();
        assert_eq!(config.engine.period_seconds, 300);
        assert_eq!(config.engine.timeout_resume_secs, 0);
        assert_eq!(config.engine.orientation, FieldOrientation::TeamADefendsZero);
        assert!(!config.engine.features.play_clock_enabled);
        assert!(config.engine.features.manual_quarter_advance_enabled);
        assert_eq!(config.engine.teams.team_a.name.as_deref(), Some("Packers"));
        assert_eq!(config.engine.teams.team_a.color.as_deref(), Some("#203731"));
        assert_eq!(config.engine.teams.team_b.name, None);
        assert_eq!(config.engine.overtime_seconds, 300);
        assert_eq!(config.save_dir, PathBuf::from("/tmp/scoreboard"));
        assert_eq!(config.loop_settings().tick, Duration::from_millis(250));
    }

    #[test]
    fn test_bad_value_is_an_error() {
        assert!(AppConfig::from_toml_str("period_seconds = \"long\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoreboard.toml");
        std::fs::write(&path, "seed = 7\novertime_enabled = false\n").unwrap();

        let config = AppConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.engine.seed, 7);
        assert!(!config.engine.overtime_enabled);

        let err = AppConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn test_overrides_win() {
        let mut config = AppConfig::from_toml_str("[teams.team_a]\nname = \"Bears\"\n").unwrap();
        config.apply(Overrides {
            team_a: Some("Lions".into()),
            overtime: Some(false),
            seed: Some(99),
            ..Default::default()
        });
        assert_eq!(config.engine.teams.team_a.name.as_deref(), Some("Lions"));
        assert!(!config.engine.overtime_enabled);
        assert_eq!(config.engine.seed, 99);
        assert_eq!(config.save_dir, PathBuf::from("saves"));
    }
}
