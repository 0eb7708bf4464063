//! Reads control messages, one JSON object per line, and forwards them to
//! the game loop.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread::JoinHandle;

use serde::Deserialize;
use tracing::{debug, warn};

use scoreboard_core::commands::Command;
use scoreboard_core::events::Notice;

use crate::state::{LoopCommand, SessionRequest};

/// A line of operator input: a session request or any engine command.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ControlRequest {
    Session(SessionRequest),
    Engine(Command),
}

/// Parses one input line. Blank lines yield `None`; anything unreadable
/// becomes a warning notice for the operator.
pub fn parse_line(line: &str) -> Option<LoopCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str::<ControlRequest>(line) {
        Ok(ControlRequest::Session(request)) => Some(request.into()),
        Ok(ControlRequest::Engine(command)) => Some(command.into()),
        Err(err) => {
            warn!(%err, input = line, "unrecognised control input");
            Some(LoopCommand::Notice(Notice::warning(format!(
                "Unrecognised input: {line}"
            ))))
        }
    }
}

/// Spawns the reader thread. End of input shuts the loop down.
pub fn spawn_console_reader<R>(
    input: R,
    tx: mpsc::Sender<LoopCommand>,
) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    std::thread::Builder::new()
        .name("scoreboard-console".into())
        .spawn(move || read_commands(input, &tx))
}

fn read_commands<R: BufRead>(input: R, tx: &mpsc::Sender<LoopCommand>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(%err, "console read failed");
                break;
            }
        };
        let Some(command) = parse_line(&line) else {
            continue;
        };
        let shutdown = matches!(command, LoopCommand::Shutdown);
        if tx.send(command).is_err() || shutdown {
            return;
        }
    }
    debug!("console input closed");
    let _ = tx.send(LoopCommand::Shutdown);
}
