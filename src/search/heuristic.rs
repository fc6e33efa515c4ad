//! Rule-based single-ply search
//!
//! Scores every nearby empty cell with [`score_candidate`] and plays the
//! best one. Ties go to the first candidate in enumeration order, which is
//! row-major, so the choice is reproducible.

use crate::board::{Board, Stone};
use crate::eval::score_candidate;
use crate::rules::{nearby_moves, DEFAULT_RADIUS};

use super::{SearchResult, SearchStrategy};

/// Greedy one-ply searcher used for the medium tier and for hints
#[derive(Debug, Clone, Copy)]
pub struct HeuristicSearcher {
    radius: i32,
}

impl HeuristicSearcher {
    #[must_use]
    pub fn new(radius: i32) -> Self {
        Self { radius }
    }
}

impl Default for HeuristicSearcher {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}

impl SearchStrategy for HeuristicSearcher {
    fn search(&mut self, board: &mut Board, color: Stone) -> SearchResult {
        let candidates = nearby_moves(board, self.radius);

        let mut best = None;
        let mut best_score = i32::MIN;
        for &pos in &candidates {
            let score = score_candidate(board, pos, color);
            if score > best_score {
                best_score = score;
                best = Some(pos);
            }
        }

        match best {
            Some(pos) => SearchResult {
                best_move: Some(pos),
                score: best_score,
                depth: 1,
                nodes: candidates.len() as u64,
                timed_out: false,
            },
            None => SearchResult::no_move(),
        }
    }
}
