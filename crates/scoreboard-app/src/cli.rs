//! Command-line interface for the scoreboard host.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

/// Electric football scoreboard: game clock, downs and scoring engine
#[derive(Parser, Debug)]
#[command(name = "scoreboard")]
#[command(about = "Headless electric football scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a game: JSON commands on stdin, JSON views and events on stdout
    Run(RunArgs),

    /// List saved games, newest first
    ListSaves {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Save directory (overrides the config file)
        #[arg(long)]
        save_dir: Option<PathBuf>,
    },

    /// Write a saved game's play log to a text file
    ExportLog {
        /// Save slot to read
        slot: String,

        /// Output file
        #[arg(short, long, default_value = "game_log.txt")]
        output: PathBuf,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Save directory (overrides the config file)
        #[arg(long)]
        save_dir: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Save directory (overrides the config file)
    #[arg(long)]
    pub save_dir: Option<PathBuf>,

    /// Name for team A
    #[arg(long)]
    pub team_a: Option<String>,

    /// Name for team B
    #[arg(long)]
    pub team_b: Option<String>,

    /// RNG seed for simulated plays and random weather
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with overtime disabled
    #[arg(long, conflicts_with = "overtime")]
    pub no_overtime: bool,

    /// Start with overtime enabled
    #[arg(long)]
    pub overtime: bool,

    /// Slot to load before the first tick
    #[arg(long)]
    pub resume: Option<String>,
}

impl RunArgs {
    pub fn overrides(&self) -> Overrides {
        let overtime = match (self.overtime, self.no_overtime) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        Overrides {
            team_a: self.team_a.clone(),
            team_b: self.team_b.clone(),
            overtime,
            seed: self.seed,
            save_dir: self.save_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from([
            "scoreboard",
            "run",
            "--team-a",
            "Packers",
            "--no-overtime",
            "--seed",
            "5",
        ])
        .unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.team_a.as_deref(), Some("Packers"));
        assert_eq!(overrides.team_b, None);
        assert_eq!(overrides.overtime, Some(false));
        assert_eq!(overrides.seed, Some(5));
    }

    #[test]
    fn test_overtime_flags_conflict() {
        assert!(Cli::try_parse_from(["scoreboard", "run", "--overtime", "--no-overtime"]).is_err());
        let cli = Cli::try_parse_from(["scoreboard", "run"]).unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.overrides().overtime, None);
    }

    #[test]
    fn test_export_log_defaults() {
        let cli = Cli::try_parse_from(["scoreboard", "export-log", "halftime"]).unwrap();
        match cli.command {
            Command::ExportLog { slot, output, .. } => {
                assert_eq!(slot, "halftime");
                assert_eq!(output, PathBuf::from("game_log.txt"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
