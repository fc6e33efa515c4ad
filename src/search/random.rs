//! Uniform random move choice

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Stone};
use crate::rules::valid_moves;

use super::{SearchResult, SearchStrategy};

/// Picks uniformly among all empty cells. No look-ahead.
#[derive(Debug, Clone)]
pub struct RandomSearcher {
    rng: StdRng,
}

impl RandomSearcher {
    /// Seeded searcher: the same seed replays the same choices
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Searcher seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl SearchStrategy for RandomSearcher {
    fn search(&mut self, board: &mut Board, _color: Stone) -> SearchResult {
        let moves = valid_moves(board);
        match moves.choose(&mut self.rng) {
            Some(&pos) => SearchResult {
                best_move: Some(pos),
                score: 0,
                depth: 0,
                nodes: moves.len() as u64,
                timed_out: false,
            },
            None => SearchResult::no_move(),
        }
    }
}
