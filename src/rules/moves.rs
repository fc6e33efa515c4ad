//! Move enumeration
//!
//! Both generators return positions in row-major order so callers that break
//! ties by enumeration order stay reproducible.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, CENTER};

/// Default candidate radius around existing stones
pub const DEFAULT_RADIUS: i32 = 2;

/// Every empty cell, row-major.
pub fn valid_moves(board: &Board) -> Vec<Pos> {
    board
        .cells()
        .filter(|&(_, stone)| stone == Stone::Empty)
        .map(|(pos, _)| pos)
        .collect()
}

/// Empty cells within Chebyshev distance `radius` of any stone.
///
/// An empty board yields the single center cell. When no empty cell lies
/// within `radius` (a radius below 1, or a crowded board), falls back to
/// [`valid_moves`], so the result is empty only on a full board.
pub fn nearby_moves(board: &Board, radius: i32) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![CENTER];
    }

    let mut near = [[false; BOARD_SIZE]; BOARD_SIZE];
    for (pos, stone) in board.cells() {
        if stone == Stone::Empty {
            continue;
        }
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if let Some(p) = Pos::checked(i32::from(pos.row) + dr, i32::from(pos.col) + dc) {
                    near[p.row as usize][p.col as usize] = true;
                }
            }
        }
    }

    let moves: Vec<Pos> = board
        .cells()
        .filter(|&(pos, stone)| stone == Stone::Empty && near[pos.row as usize][pos.col as usize])
        .map(|(pos, _)| pos)
        .collect();

    if moves.is_empty() {
        valid_moves(board)
    } else {
        moves
    }
}
