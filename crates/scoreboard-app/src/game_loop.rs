//! Game loop thread: runs the engine at one tick per second and hands each
//! view to the presenter.
//!
//! The engine is moved into this thread and owned by it. Commands arrive via
//! an `mpsc` channel; session requests (saves, log export) are served here
//! between ticks so the engine itself never touches the filesystem.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use scoreboard_core::constants::TICK_RATE;
use scoreboard_core::events::{GameEvent, Notice};
use scoreboard_engine::ScoreboardEngine;

use crate::persistence::{self, SaveData};
use crate::presenter::Presenter;
use crate::state::{LoopCommand, SessionRequest};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone)]
pub struct LoopSettings {
    pub tick: Duration,
    pub save_dir: PathBuf,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            tick: TICK_DURATION,
            save_dir: PathBuf::from("saves"),
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input side and the thread handle.
pub fn spawn_game_loop<P>(
    engine: ScoreboardEngine,
    presenter: P,
    settings: LoopSettings,
) -> io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>)>
where
    P: Presenter + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("scoreboard-game-loop".into())
        .spawn(move || run_game_loop(engine, presenter, cmd_rx, &settings))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect or a dead
/// presenter.
fn run_game_loop<P: Presenter>(
    mut engine: ScoreboardEngine,
    mut presenter: P,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    settings: &LoopSettings,
) {
    let mut next_tick_time = Instant::now();
    let mut host_events = Vec::new();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Engine(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Session(request)) => {
                    // Commands sent ahead of a save or load apply first.
                    engine.process_queued();
                    if let Some(notice) = handle_session(&mut engine, &settings.save_dir, request) {
                        host_events.push(GameEvent::Notice(notice));
                    }
                }
                Ok(LoopCommand::Notice(notice)) => host_events.push(GameEvent::Notice(notice)),
                Ok(LoopCommand::Shutdown) => {
                    info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one second
        let view = engine.tick();
        let mut events = std::mem::take(&mut host_events);
        events.extend(engine.drain_events());

        // 3. Hand off to the presenter
        if let Err(err) = presenter.present(&view, &events) {
            warn!(%err, "presenter failed; stopping game loop");
            return;
        }

        // 4. Sleep until next tick
        next_tick_time += settings.tick;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > settings.tick * 2 {
            // Too far behind: reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Serves one session request against the engine. Returns the notice to
/// show, if the engine did not already emit one.
pub fn handle_session(
    engine: &mut ScoreboardEngine,
    save_dir: &Path,
    request: SessionRequest,
) -> Option<Notice> {
    match request {
        SessionRequest::Save { slot } => {
            let data = SaveData::new(slot.clone(), engine.save());
            match persistence::save_to_file(save_dir, &data) {
                Ok(path) => {
                    info!(slot = %slot, path = %path.display(), "game saved");
                    Some(Notice::info(format!("Saved to slot {slot}")))
                }
                Err(err) => {
                    warn!(slot = %slot, %err, "save failed");
                    Some(Notice::warning(format!("Save failed: {err}")))
                }
            }
        }
        SessionRequest::Load { slot } => {
            let loaded = persistence::load_from_file(save_dir, &slot)
                .and_then(|data| engine.load(data.game));
            match loaded {
                Ok(()) => None,
                Err(err) => {
                    warn!(slot = %slot, %err, "load failed");
                    Some(Notice::warning(format!("Load failed: {err}")))
                }
            }
        }
        SessionRequest::ListSaves => {
            let saves = persistence::list_saves(save_dir);
            if saves.is_empty() {
                return Some(Notice::info("No saved games"));
            }
            let listing: Vec<String> = saves.iter().map(|s| s.describe()).collect();
            Some(Notice::info(format!("Saves: {}", listing.join("; "))))
        }
        SessionRequest::DeleteSave { slot } => match persistence::delete_save(save_dir, &slot) {
            Ok(()) => Some(Notice::info(format!("Deleted slot {slot}"))),
            Err(err) => Some(Notice::warning(format!("Delete failed: {err}"))),
        },
        SessionRequest::ExportLog { path } => {
            match persistence::export_log(&path, engine.state()) {
                Ok(()) => {
                    info!(path = %path.display(), "log exported");
                    Some(Notice::info(format!("Log exported to {}", path.display())))
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "log export failed");
                    Some(Notice::warning(format!("Export failed: {err}")))
                }
            }
        }
        SessionRequest::Quit => None,
    }
}
