//! Gomoku terminal driver
//!
//! Reads one command per line from stdin and writes one JSON response per
//! line to stdout. Logs go to stderr.
//!
//! ```text
//! new [easy|medium|hard]   start a game (becomes the current game)
//! move <row> <col>         play black, the AI answers as white
//! undo [steps]             take back moves, two by default
//! hint                     suggest a move for black
//! history                  totals and the most recent finished games
//! board                    current board
//! quit
//! ```

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Request};
use gomoku::{Difficulty, GameError, GomokuService};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = cli.engine_config();
    info!(?config, difficulty = %cli.difficulty, "starting gomoku");

    let mut driver = Driver {
        service: GomokuService::with_config(config),
        current: None,
        default_difficulty: cli.difficulty,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match Request::parse(&line) {
            Ok(Request::Quit) => break,
            Ok(request) => driver.handle(request),
            Err(err) => Err(err),
        };
        let response = match reply {
            Ok(data) => json!({ "status": "success", "data": data }),
            Err(err) => error_response(&err),
        };

        writeln!(stdout, "{response}").context("failed to write response")?;
        stdout.flush()?;
    }

    info!("bye");
    Ok(())
}

struct Driver {
    service: GomokuService,
    current: Option<Uuid>,
    default_difficulty: Difficulty,
}

impl Driver {
    fn handle(&mut self, request: Request) -> Result<Value> {
        match request {
            Request::New(difficulty) => {
                let resp = self
                    .service
                    .new_game(difficulty.unwrap_or(self.default_difficulty))?;
                self.current = Some(resp.session_id);
                to_value(&resp)
            }
            Request::Move { row, col } => {
                let id = self.current_or_new()?;
                to_value(&self.service.play(id, row, col)?)
            }
            Request::Undo(steps) => {
                let id = self.current_or_new()?;
                to_value(&self.service.undo(id, steps)?)
            }
            Request::Hint => {
                let id = self.current_or_new()?;
                to_value(&self.service.hint(id)?)
            }
            Request::History => to_value(&self.service.history()),
            Request::Board => {
                let id = self.current_or_new()?;
                let session = self.service.sessions().get(id)?;
                eprintln!("{}", session.board());
                Ok(json!({
                    "board": session.board().to_rows(),
                    "status": session.status(),
                    "undo_count": session.undo_count(),
                    "hint_count": session.hint_count(),
                }))
            }
            Request::Quit => Ok(Value::Null),
        }
    }

    /// Id of the current game, starting one at the default difficulty if needed
    fn current_or_new(&mut self) -> Result<Uuid> {
        if let Some(id) = self.current {
            return Ok(id);
        }
        let id = self.service.new_game(self.default_difficulty)?.session_id;
        self.current = Some(id);
        Ok(id)
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("failed to serialize response")
}

fn error_response(err: &anyhow::Error) -> Value {
    let code = match err.downcast_ref::<GameError>() {
        Some(game_err) => game_err.status_code(),
        None if err.is::<serde_json::Error>() => 500,
        None => 400,
    };
    if code >= 500 {
        warn!(%err, code, "request failed");
    }
    json!({ "status": "error", "code": code, "message": format!("{err:#}") })
}
