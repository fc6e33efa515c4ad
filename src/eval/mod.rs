//! Evaluation module for Gomoku positions
//!
//! This module provides line-count scoring for board positions and candidate moves.
//! The evaluation considers:
//! - Consecutive runs through each stone (twos, threes, fours, fives)
//! - Defensive weighting when scoring a single candidate
//! - Positional bonuses (center control)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{center_bonus, evaluate_board, score_candidate};
pub use patterns::{attack_score, defense_score, line_score, PatternScore};
