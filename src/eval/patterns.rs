//! Pattern scores for Gomoku evaluation
//!
//! These constants map a run length (as counted by `count_consecutive`)
//! to a score. Defensive values sit at roughly 90% of their attacking
//! counterparts so that completing our own line beats blocking an equal one.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    // Attacking runs
    /// Five or more in a row - immediate win
    pub const FIVE: i32 = 100_000;
    pub const FOUR: i32 = 10_000;
    pub const THREE: i32 = 1_000;
    pub const TWO: i32 = 100;
    /// Isolated stone, only counted by the board evaluation
    pub const SINGLE: i32 = 10;

    // Blocking the opponent's runs
    pub const BLOCK_FIVE: i32 = 90_000;
    pub const BLOCK_FOUR: i32 = 9_000;
    pub const BLOCK_THREE: i32 = 800;
    pub const BLOCK_TWO: i32 = 80;

    /// Bonus per step closer to the center
    pub const CENTER_WEIGHT: i32 = 5;
    /// Largest Manhattan distance from the center on a 15x15 board
    pub const MAX_CENTER_DIST: i32 = 14;
}

/// Score for a run created by our own speculative stone
#[inline]
pub fn attack_score(count: i32) -> i32 {
    match count {
        5.. => PatternScore::FIVE,
        4 => PatternScore::FOUR,
        3 => PatternScore::THREE,
        2 => PatternScore::TWO,
        _ => 0,
    }
}

/// Score for an opponent run that a stone on this cell would have completed
#[inline]
pub fn defense_score(count: i32) -> i32 {
    match count {
        5.. => PatternScore::BLOCK_FIVE,
        4 => PatternScore::BLOCK_FOUR,
        3 => PatternScore::BLOCK_THREE,
        2 => PatternScore::BLOCK_TWO,
        _ => 0,
    }
}

/// Score for a run through an existing stone in whole-board evaluation
#[inline]
pub fn line_score(count: i32) -> i32 {
    match count {
        5.. => PatternScore::FIVE,
        4 => PatternScore::FOUR,
        3 => PatternScore::THREE,
        2 => PatternScore::TWO,
        _ => PatternScore::SINGLE,
    }
}
