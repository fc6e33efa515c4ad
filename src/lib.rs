//! Gomoku game core: board, three-tier AI and session state machine
//!
//! Standard free-style Gomoku against a computer opponent:
//! - 15x15 board, black (the human) moves first
//! - Five or more in a row wins
//! - A full board without a five is a draw
//! - Up to 3 undos and 5 hints per game
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation and speculative placement
//! - [`rules`]: Win detection, line counting and candidate moves
//! - [`eval`]: Line-count scoring of positions and candidates
//! - [`search`]: One search strategy per difficulty tier
//! - [`engine`]: AI engine dispatching on [`Difficulty`]
//! - [`session`]: Per-game state machine, session store and history log
//! - [`service`]: Request/response facade over all of the above
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Difficulty, EngineConfig, GameStatus, GomokuService};
//!
//! let mut service = GomokuService::with_config(EngineConfig {
//!     seed: Some(1),
//!     ..EngineConfig::default()
//! });
//! let game = service.new_game(Difficulty::Medium).unwrap();
//!
//! // Black plays the center, the AI answers as white
//! let turn = service.play(game.session_id, 7, 7).unwrap();
//! assert_eq!(turn.status, GameStatus::Ongoing);
//! if let Some(pos) = turn.ai_move {
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Difficulty tiers
//!
//! 1. Easy: uniform random choice among empty cells
//! 2. Medium: attack and defense line counts of each nearby cell
//! 3. Hard: minimax with alpha-beta pruning, depth 3, 3 second budget

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod service;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{AIEngine, Difficulty, EngineConfig, MoveResult, SearchType};
pub use error::GameError;
pub use service::GomokuService;
pub use session::{GameSession, GameStatus, HistoryLog, HistorySink, SessionStore};
