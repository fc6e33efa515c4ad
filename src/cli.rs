//! Command-line interface definitions

use std::time::Duration;

use clap::Parser;
use gomoku::search::alphabeta::DEFAULT_DEPTH;
use gomoku::{Difficulty, EngineConfig};

#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Play Gomoku against the AI over a line-based stdin protocol", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Difficulty for games started without an explicit one (easy, medium, hard)
    #[arg(short, long, default_value = "medium")]
    pub difficulty: Difficulty,

    /// Minimax depth of the hard tier
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: i8,

    /// Time budget of the hard tier in milliseconds
    #[arg(long, default_value_t = 3000)]
    pub time_limit_ms: u64,

    /// Seed for the easy tier, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_depth: self.depth,
            time_limit: Duration::from_millis(self.time_limit_ms),
            seed: self.seed,
            ..EngineConfig::default()
        }
    }
}

/// One line of the stdin protocol
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `new [easy|medium|hard]`
    New(Option<Difficulty>),
    /// `move <row> <col>`
    Move { row: i32, col: i32 },
    /// `undo [steps]`, two by default
    Undo(usize),
    Hint,
    History,
    Board,
    Quit,
}

impl Request {
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            anyhow::bail!("empty command");
        };

        let request = match command.to_ascii_lowercase().as_str() {
            "new" => Request::New(words.next().map(str::parse::<Difficulty>).transpose()?),
            "move" | "play" => {
                let (Some(row), Some(col)) = (words.next(), words.next()) else {
                    anyhow::bail!("usage: move <row> <col>");
                };
                Request::Move {
                    row: row.parse()?,
                    col: col.parse()?,
                }
            }
            "undo" => Request::Undo(words.next().map(str::parse::<usize>).transpose()?.unwrap_or(2)),
            "hint" => Request::Hint,
            "history" => Request::History,
            "board" => Request::Board,
            "quit" | "exit" => Request::Quit,
            other => anyhow::bail!("unknown command '{other}'"),
        };

        if let Some(extra) = words.next() {
            anyhow::bail!("unexpected argument '{extra}'");
        }
        Ok(request)
    }
}
