//! Search module for Gomoku AI
//!
//! Contains one strategy per difficulty tier:
//! - Random choice among all empty cells
//! - Rule-based single-ply scoring of nearby cells
//! - Minimax with alpha-beta pruning under a wall-clock budget
//!
//! Every strategy receives a scratch board and must hand it back unchanged.

pub mod alphabeta;
pub mod heuristic;
pub mod random;

pub use alphabeta::Searcher;
pub use heuristic::HeuristicSearcher;
pub use random::RandomSearcher;

use crate::board::{Board, Pos, Stone};

/// A move-selection strategy.
pub trait SearchStrategy {
    /// Choose a move for `color`.
    ///
    /// `board` is scratch space: implementations may place stones on it
    /// speculatively but must leave it exactly as they found it.
    fn search(&mut self, board: &mut Board, color: Stone) -> SearchResult;
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` only when no legal move exists
    pub best_move: Option<Pos>,
    /// Strategy-specific score of the best move
    pub score: i32,
    /// Search depth in plies
    pub depth: i8,
    /// Nodes (positions or candidates) examined
    pub nodes: u64,
    /// Whether the time budget cut the search short
    pub timed_out: bool,
}

impl SearchResult {
    /// Result for a board with no legal move
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            timed_out: false,
        }
    }
}
