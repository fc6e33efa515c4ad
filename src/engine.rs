//! Main AI Engine dispatching to one search strategy per difficulty
//!
//! This module provides the engine that the session layer asks for the
//! opponent's move. The strategy is chosen by [`Difficulty`]:
//!
//! 1. **Easy**: uniform random choice among all empty cells
//! 2. **Medium**: single-ply attack/defense scoring of nearby cells
//! 3. **Hard**: minimax with alpha-beta pruning, depth 3, 3 second budget
//!
//! The caller's board is never touched: every search runs on a private copy.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, EngineConfig, Pos, Stone};
//!
//! let mut engine = AIEngine::with_config(EngineConfig {
//!     seed: Some(7),
//!     ..EngineConfig::default()
//! });
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board, Difficulty::Medium, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::error::GameError;
use crate::rules::DEFAULT_RADIUS;
use crate::search::alphabeta::{DEFAULT_DEPTH, DEFAULT_TIME_LIMIT};
use crate::search::{HeuristicSearcher, RandomSearcher, SearchResult, SearchStrategy, Searcher};

/// AI difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::UnknownDifficulty(s.to_string()))
    }
}

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Uniform random choice
    Random,
    /// Single-ply rule-based scoring
    Heuristic,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
}

impl From<Difficulty> for SearchType {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => SearchType::Random,
            Difficulty::Medium => SearchType::Heuristic,
            Difficulty::Hard => SearchType::AlphaBeta,
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Strategy-specific score of the move
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether the time budget truncated the search
    pub timed_out: bool,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms,
            nodes: result.nodes,
            timed_out: result.timed_out,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Minimax depth in plies for the hard tier
    pub max_depth: i8,
    /// Wall-clock budget for the hard tier
    pub time_limit: Duration,
    /// Candidate radius around existing stones
    pub radius: i32,
    /// Seed for the easy tier; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            time_limit: DEFAULT_TIME_LIMIT,
            radius: DEFAULT_RADIUS,
            seed: None,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// Holds one searcher per difficulty tier. The random searcher keeps its RNG
/// across calls, so a seeded engine replays the same sequence of easy moves.
pub struct AIEngine {
    random: RandomSearcher,
    heuristic: HeuristicSearcher,
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    ///
    /// Default configuration:
    /// - Depth 3
    /// - 3 second time limit
    /// - Candidate radius 2
    /// - Entropy-seeded random tier
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an AI engine with custom configuration.
    ///
    /// ```
    /// use std::time::Duration;
    /// use gomoku::{AIEngine, EngineConfig};
    ///
    /// let engine = AIEngine::with_config(EngineConfig {
    ///     max_depth: 2,
    ///     time_limit: Duration::from_millis(500),
    ///     ..EngineConfig::default()
    /// });
    /// assert_eq!(engine.config().max_depth, 2);
    /// ```
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let random = match config.seed {
            Some(seed) => RandomSearcher::with_seed(seed),
            None => RandomSearcher::from_entropy(),
        };
        Self {
            random,
            heuristic: HeuristicSearcher::new(config.radius),
            searcher: Searcher::new(config.max_depth, config.time_limit).with_radius(config.radius),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` only when the board has no empty cell.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, difficulty: Difficulty, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, difficulty, color).best_move
    }

    /// Get the best move with detailed search statistics.
    #[must_use]
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
        color: Stone,
    ) -> MoveResult {
        let start = Instant::now();
        let mut work_board = board.clone();

        let result = self.strategy(difficulty).search(&mut work_board, color);
        debug_assert_eq!(&work_board, board, "search leaked a speculative stone");

        let result = MoveResult::from_search(
            result,
            SearchType::from(difficulty),
            start.elapsed().as_millis() as u64,
        );
        debug!(
            %difficulty,
            ?color,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            timed_out = result.timed_out,
            "engine search finished"
        );
        result
    }

    fn strategy(&mut self, difficulty: Difficulty) -> &mut dyn SearchStrategy {
        match difficulty {
            Difficulty::Easy => &mut self.random,
            Difficulty::Medium => &mut self.heuristic,
            Difficulty::Hard => &mut self.searcher,
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
