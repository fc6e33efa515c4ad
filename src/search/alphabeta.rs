//! Minimax search with alpha-beta pruning and a wall-clock budget
//!
//! This module implements the hard-tier search for the Gomoku AI.
//!
//! # Features
//!
//! - Fixed-depth minimax from the AI's perspective (no iterative deepening)
//! - Alpha-beta cutoffs in both the maximizing and minimizing branches
//! - Move generation with proximity filtering
//! - Time budget polled once per recursive call; a call entered after the
//!   budget is spent returns a neutral score immediately
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use gomoku::board::{Board, Stone, Pos};
//! use gomoku::search::{SearchStrategy, Searcher};
//!
//! let mut searcher = Searcher::new(2, Duration::from_secs(5));
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = searcher.search(&mut board, Stone::White);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::time::{Duration, Instant};

use crate::board::{Board, Stone};
use crate::eval::evaluate_board;
use crate::rules::{nearby_moves, DEFAULT_RADIUS};

use super::{SearchResult, SearchStrategy};

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX;

/// Score returned by a call that found the budget exhausted
const TIMEOUT_SCORE: i32 = 0;

/// Default search depth in plies
pub const DEFAULT_DEPTH: i8 = 3;

/// Default wall-clock budget per move
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(3);

/// Minimax searcher with alpha-beta pruning.
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: i8,
    time_limit: Duration,
    radius: i32,
    nodes: u64,
    start_time: Option<Instant>,
    timed_out: bool,
}

impl Searcher {
    /// Create a searcher with the given depth and time budget
    #[must_use]
    pub fn new(max_depth: i8, time_limit: Duration) -> Self {
        Self {
            max_depth: max_depth.max(1),
            time_limit,
            radius: DEFAULT_RADIUS,
            nodes: 0,
            start_time: None,
            timed_out: false,
        }
    }

    /// Override the candidate radius
    #[must_use]
    pub fn with_radius(mut self, radius: i32) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn max_depth(&self) -> i8 {
        self.max_depth
    }

    #[must_use]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Check the clock, latching `timed_out` once the budget is spent.
    #[inline]
    fn check_time(&mut self) -> bool {
        if self.timed_out {
            return true;
        }
        if let Some(start) = self.start_time {
            if start.elapsed() >= self.time_limit {
                self.timed_out = true;
            }
        }
        self.timed_out
    }

    /// Recursive minimax evaluation. Scores are always from `ai`'s point of view.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: i8,
        maximizing: bool,
        ai: Stone,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if self.check_time() {
            return TIMEOUT_SCORE;
        }

        if depth <= 0 {
            return evaluate_board(board, ai);
        }

        let moves = nearby_moves(board, self.radius);
        if moves.is_empty() {
            return evaluate_board(board, ai);
        }

        if maximizing {
            let mut best = -INF;
            for mov in moves {
                let score = {
                    let mut spec = board.speculate(mov, ai);
                    self.minimax(&mut spec, depth - 1, false, ai, alpha, beta)
                };
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let opponent = ai.opponent();
            let mut best = INF;
            for mov in moves {
                let score = {
                    let mut spec = board.speculate(mov, opponent);
                    self.minimax(&mut spec, depth - 1, true, ai, alpha, beta)
                };
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH, DEFAULT_TIME_LIMIT)
    }
}

impl SearchStrategy for Searcher {
    /// Root-level search: try each candidate for `color`, keep the best.
    ///
    /// Falls back to the first candidate when no candidate scored before the
    /// budget ran out.
    fn search(&mut self, board: &mut Board, color: Stone) -> SearchResult {
        self.nodes = 0;
        self.timed_out = false;
        self.start_time = Some(Instant::now());

        let moves = nearby_moves(board, self.radius);
        let Some(&first) = moves.first() else {
            return SearchResult::no_move();
        };

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for &mov in &moves {
            if self.check_time() {
                break;
            }

            let score = {
                let mut spec = board.speculate(mov, color);
                self.minimax(&mut spec, self.max_depth - 1, false, color, alpha, beta)
            };

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
        }

        SearchResult {
            best_move: best_move.or(Some(first)),
            score: if best_move.is_some() { best_score } else { TIMEOUT_SCORE },
            depth: self.max_depth,
            nodes: self.nodes,
            timed_out: self.timed_out,
        }
    }
}
