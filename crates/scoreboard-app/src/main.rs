use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scoreboard_app::cli::{Cli, Command, RunArgs};
use scoreboard_app::config::{AppConfig, Overrides};
use scoreboard_app::console::spawn_console_reader;
use scoreboard_app::game_loop::spawn_game_loop;
use scoreboard_app::persistence;
use scoreboard_app::presenter::JsonLinesPresenter;
use scoreboard_engine::ScoreboardEngine;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the presentation stream, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Run(args) => run(args),
        Command::ListSaves { config, save_dir } => {
            let config = load_config(config, save_dir)?;
            for save in persistence::list_saves(&config.save_dir) {
                println!("{}", save.describe());
            }
            Ok(())
        }
        Command::ExportLog {
            slot,
            output,
            config,
            save_dir,
        } => {
            let config = load_config(config, save_dir)?;
            let data = persistence::load_from_file(&config.save_dir, &slot)
                .with_context(|| format!("cannot read slot {slot}"))?;
            persistence::export_log(&output, &data.game)
                .with_context(|| format!("cannot write {}", output.display()))?;
            info!(slot = %slot, output = %output.display(), "log exported");
            Ok(())
        }
    }
}

fn load_config(path: Option<PathBuf>, save_dir: Option<PathBuf>) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(path.as_deref())?;
    config.apply(Overrides {
        save_dir,
        ..Default::default()
    });
    Ok(config)
}

fn run(args: RunArgs) -> Result<()> {
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply(args.overrides());

    let mut engine = ScoreboardEngine::new(config.engine.clone());
    if let Some(slot) = &args.resume {
        let data = persistence::load_from_file(&config.save_dir, slot)
            .with_context(|| format!("cannot read slot {slot}"))?;
        engine
            .load(data.game)
            .with_context(|| format!("slot {slot} is not a valid game"))?;
    }

    info!(
        team_a = %engine.state().team_a.name,
        team_b = %engine.state().team_b.name,
        save_dir = %config.save_dir.display(),
        "starting scoreboard"
    );

    let presenter = JsonLinesPresenter::new(io::stdout());
    let (tx, game_loop) = spawn_game_loop(engine, presenter, config.loop_settings())
        .context("failed to spawn game loop thread")?;
    // Not joined: a blocking stdin read cannot be interrupted, and the
    // process exits once the game loop does.
    spawn_console_reader(BufReader::new(io::stdin()), tx)
        .context("failed to spawn console thread")?;

    game_loop
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    info!("scoreboard stopped");
    Ok(())
}
