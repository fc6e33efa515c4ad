//! Game rules for standard Gomoku on a 15x15 board
//!
//! This module implements the geometric queries the rest of the engine relies on:
//! - Win condition (five or more in a row through the last stone)
//! - Draw condition (board full)
//! - Move enumeration (all empty cells, or cells near existing stones)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{nearby_moves, valid_moves, DEFAULT_RADIUS};
pub use win::{check_winner, count_consecutive, is_board_full, WinningLine, DIRECTIONS};
