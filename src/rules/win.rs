//! Win condition checking for standard Gomoku
//!
//! A player wins by placing five or more stones in an unbroken line
//! (horizontal, vertical or diagonal). Overlines count as wins.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Five winning stones, ordered from the negative end of the line to the positive end
pub type WinningLine = [Pos; 5];

/// Check whether the stone `player` just placed at `last` completes a five.
///
/// Scans the four line directions through `last`. When a run of five or more
/// exists, returns the five stones of that run nearest `last`; a run of exactly
/// five yields the same line whichever of its stones is passed in.
///
/// Must be called after every placement: it is the only authority on wins.
pub fn check_winner(board: &Board, last: Pos, player: Stone) -> Option<WinningLine> {
    if player == Stone::Empty || board.get(last) != player {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let mut line = Vec::with_capacity(9);

        // Extend in negative direction first
        for i in 1..5 {
            match last.offset(dr, dc, -i) {
                Some(prev) if board.get(prev) == player => line.insert(0, prev),
                _ => break,
            }
        }
        let origin = line.len();
        line.push(last);

        // Extend in positive direction
        for i in 1..5 {
            match last.offset(dr, dc, i) {
                Some(next) if board.get(next) == player => line.push(next),
                _ => break,
            }
        }

        if line.len() >= 5 {
            // Window of five containing the origin, centered on it where the run allows
            let start = origin.saturating_sub(2).min(line.len() - 5);
            return Some([
                line[start],
                line[start + 1],
                line[start + 2],
                line[start + 3],
                line[start + 4],
            ]);
        }
    }

    None
}

/// True iff no empty cell remains.
///
/// Only meaningful as a draw condition when the move that filled the board
/// did not also win.
#[inline]
pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

/// Count `player` stones through `pos` along `(dr, dc)`.
///
/// Counts up to `max_count` cells starting at `pos` itself in the given
/// direction, then up to `max_count - 1` further cells in the opposite
/// direction. The origin is counted once.
pub fn count_consecutive(
    board: &Board,
    pos: Pos,
    dr: i32,
    dc: i32,
    player: Stone,
    max_count: i32,
) -> i32 {
    let mut count = 0;

    for i in 0..max_count {
        match pos.offset(dr, dc, i) {
            Some(p) if board.get(p) == player => count += 1,
            _ => break,
        }
    }

    for i in 1..max_count {
        match pos.offset(dr, dc, -i) {
            Some(p) if board.get(p) == player => count += 1,
            _ => break,
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, stones: &[(u8, u8)], stone: Stone) {
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), stone);
        }
    }

    fn line_of(cells: &[(u8, u8)]) -> Vec<Pos> {
        cells.iter().map(|&(r, c)| Pos::new(r, c)).collect()
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        let cells = [(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)];
        place_all(&mut board, &cells, Stone::Black);

        let line = check_winner(&board, Pos::new(7, 7), Stone::Black).unwrap();
        assert_eq!(line.to_vec(), line_of(&cells));
        assert!(check_winner(&board, Pos::new(7, 7), Stone::White).is_none());
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        let cells = [(0, 9), (1, 9), (2, 9), (3, 9), (4, 9)];
        place_all(&mut board, &cells, Stone::White);

        let line = check_winner(&board, Pos::new(2, 9), Stone::White).unwrap();
        assert_eq!(line.to_vec(), line_of(&cells));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        let cells = [(10, 10), (11, 11), (12, 12), (13, 13), (14, 14)];
        place_all(&mut board, &cells, Stone::White);

        let line = check_winner(&board, Pos::new(14, 14), Stone::White).unwrap();
        assert_eq!(line.to_vec(), line_of(&cells));
    }

    #[test]
    fn test_diagonal_sw_five() {
        let mut board = Board::new();
        // Diagonal from (4, 8) to (8, 4)
        let cells = [(4, 8), (5, 7), (6, 6), (7, 5), (8, 4)];
        place_all(&mut board, &cells, Stone::Black);

        let line = check_winner(&board, Pos::new(6, 6), Stone::Black).unwrap();
        assert_eq!(line.to_vec(), line_of(&cells));
    }

    #[test]
    fn test_winning_line_symmetry() {
        // Every stone of a five reports the same line, in every direction
        let lines: [[(u8, u8); 5]; 4] = [
            [(2, 1), (2, 2), (2, 3), (2, 4), (2, 5)],
            [(5, 0), (6, 0), (7, 0), (8, 0), (9, 0)],
            [(3, 3), (4, 4), (5, 5), (6, 6), (7, 7)],
            [(10, 14), (11, 13), (12, 12), (13, 11), (14, 10)],
        ];

        for cells in &lines {
            let mut board = Board::new();
            place_all(&mut board, cells, Stone::Black);
            let expected = line_of(cells);
            for &(r, c) in cells {
                let line = check_winner(&board, Pos::new(r, c), Stone::Black)
                    .unwrap_or_else(|| panic!("no win reported from ({r}, {c})"));
                assert_eq!(line.to_vec(), expected, "origin ({r}, {c})");
            }
        }
    }

    #[test]
    fn test_overline_wins_near_origin() {
        let mut board = Board::new();
        for c in 0..7 {
            board.place_stone(Pos::new(4, c), Stone::Black);
        }

        let line = check_winner(&board, Pos::new(4, 0), Stone::Black).unwrap();
        assert_eq!(line[0], Pos::new(4, 0));
        assert_eq!(line[4], Pos::new(4, 4));

        let line = check_winner(&board, Pos::new(4, 6), Stone::Black).unwrap();
        assert_eq!(line[0], Pos::new(4, 2));
        assert_eq!(line[4], Pos::new(4, 6));

        let line = check_winner(&board, Pos::new(4, 3), Stone::Black).unwrap();
        assert_eq!(line[0], Pos::new(4, 1));
        assert!(line.contains(&Pos::new(4, 3)));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(9, 0), (9, 1), (9, 2), (9, 3)], Stone::Black);
        assert!(check_winner(&board, Pos::new(9, 3), Stone::Black).is_none());
    }

    #[test]
    fn test_broken_line_not_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(9, 0), (9, 1), (9, 3), (9, 4), (9, 5)], Stone::Black);
        board.place_stone(Pos::new(9, 2), Stone::White);
        assert!(check_winner(&board, Pos::new(9, 3), Stone::Black).is_none());
    }

    #[test]
    fn test_empty_origin_no_winner() {
        let board = Board::new();
        assert!(check_winner(&board, Pos::new(7, 7), Stone::Black).is_none());
        assert!(check_winner(&board, Pos::new(7, 7), Stone::Empty).is_none());
    }

    #[test]
    fn test_is_board_full() {
        let mut board = Board::new();
        assert!(!is_board_full(&board));
        for r in 0..15 {
            for c in 0..15 {
                board.place_stone(Pos::new(r, c), Stone::White);
            }
        }
        assert!(is_board_full(&board));
    }

    #[test]
    fn test_count_consecutive_both_ways() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 4), (7, 5), (7, 6), (7, 7)], Stone::Black);

        // From the middle, counting forward then back, origin once
        assert_eq!(count_consecutive(&board, Pos::new(7, 5), 0, 1, Stone::Black, 5), 4);
        assert_eq!(count_consecutive(&board, Pos::new(7, 4), 0, 1, Stone::Black, 5), 4);
        assert_eq!(count_consecutive(&board, Pos::new(7, 7), 0, -1, Stone::Black, 5), 4);
        // Perpendicular direction only sees the origin
        assert_eq!(count_consecutive(&board, Pos::new(7, 5), 1, 0, Stone::Black, 5), 1);
        // An empty origin stops the forward scan but not the backward one
        assert_eq!(count_consecutive(&board, Pos::new(7, 8), 0, 1, Stone::Black, 5), 4);
        assert_eq!(count_consecutive(&board, Pos::new(7, 3), 0, 1, Stone::Black, 5), 0);
    }

    #[test]
    fn test_count_consecutive_respects_max_count() {
        let mut board = Board::new();
        for c in 0..10 {
            board.place_stone(Pos::new(0, c), Stone::White);
        }
        // Forward capped at 5, backward at 4 further
        assert_eq!(count_consecutive(&board, Pos::new(0, 5), 0, 1, Stone::White, 5), 9);
        assert_eq!(count_consecutive(&board, Pos::new(0, 0), 0, 1, Stone::White, 5), 5);
        assert_eq!(count_consecutive(&board, Pos::new(0, 0), 0, 1, Stone::White, 3), 3);
    }

    #[test]
    fn test_count_consecutive_at_edge() {
        let mut board = Board::new();
        place_all(&mut board, &[(14, 14), (13, 13)], Stone::Black);
        assert_eq!(count_consecutive(&board, Pos::new(14, 14), 1, 1, Stone::Black, 5), 2);
        assert_eq!(count_consecutive(&board, Pos::new(14, 14), -1, -1, Stone::Black, 5), 2);
    }
}
