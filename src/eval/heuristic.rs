//! Heuristic evaluation functions for Gomoku
//!
//! Two entry points:
//! - [`score_candidate`]: single-ply value of playing one cell, used by the
//!   rule-based strategy and by hints
//! - [`evaluate_board`]: static evaluation of a whole position, used at the
//!   leaves of the minimax search

use crate::board::{Board, Pos, Stone};
use crate::rules::{count_consecutive, DIRECTIONS};

use super::patterns::{attack_score, defense_score, line_score, PatternScore};

/// Run length cap passed to `count_consecutive`
const MAX_RUN: i32 = 5;

/// Score one empty cell for `color`.
///
/// The cell is scored twice: once with our stone on it (attack) and once
/// with the opponent's stone on it (defense, at reduced weight), plus a small
/// bonus for proximity to the center. Both placements are speculative and
/// the board is unchanged on return.
pub fn score_candidate(board: &mut Board, pos: Pos, color: Stone) -> i32 {
    let opponent = color.opponent();

    let mut attack = 0;
    {
        let spec = board.speculate(pos, color);
        for &(dr, dc) in &DIRECTIONS {
            attack += attack_score(count_consecutive(&spec, pos, dr, dc, color, MAX_RUN));
        }
    }

    let mut defense = 0;
    {
        let spec = board.speculate(pos, opponent);
        for &(dr, dc) in &DIRECTIONS {
            defense += defense_score(count_consecutive(&spec, pos, dr, dc, opponent, MAX_RUN));
        }
    }

    attack + defense + center_bonus(pos)
}

/// `(14 - manhattan distance to center) * 5`
#[inline]
pub fn center_bonus(pos: Pos) -> i32 {
    (PatternScore::MAX_CENTER_DIST - pos.center_distance()) * PatternScore::CENTER_WEIGHT
}

/// Evaluate the board from the perspective of the given color.
///
/// Sums the run score through every stone of `color` in all four directions
/// and subtracts the same sum for the opponent. Positive values favour
/// `color`. Runs are counted from each of their stones, so longer runs weigh
/// more than their length alone suggests.
#[must_use]
pub fn evaluate_board(board: &Board, color: Stone) -> i32 {
    let mut mine = 0;
    let mut theirs = 0;
    let opponent = color.opponent();

    for (pos, stone) in board.cells() {
        let total = if stone == color {
            &mut mine
        } else if stone == opponent {
            &mut theirs
        } else {
            continue;
        };
        for &(dr, dc) in &DIRECTIONS {
            *total += line_score(count_consecutive(board, pos, dr, dc, stone, MAX_RUN));
        }
    }

    mine - theirs
}
