//! Board structure with speculative placement

use std::ops::{Deref, DerefMut};

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board: a fixed 15x15 grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Stone; BOARD_SIZE]; BOARD_SIZE],
    /// Occupied cell count, kept in sync by `place_stone`
    stones: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE],
            stones: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone. Placing `Stone::Empty` clears the cell.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let cell = &mut self.cells[pos.row as usize][pos.col as usize];
        match (*cell == Stone::Empty, stone == Stone::Empty) {
            (true, false) => self.stones += 1,
            (false, true) => self.stones -= 1,
            _ => {}
        }
        *cell = stone;
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Place `stone` on an empty cell for scoring purposes.
    ///
    /// The returned guard derefs to the board and clears the cell again when
    /// dropped, so the placement cannot outlive the scope that made it, even
    /// when that scope returns early or unwinds.
    #[inline]
    pub fn speculate(&mut self, pos: Pos, stone: Stone) -> Speculation<'_> {
        debug_assert!(self.is_empty(pos), "speculative placement on occupied cell {pos}");
        self.place_stone(pos, stone);
        Speculation { board: self, pos }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == TOTAL_CELLS
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        (0..TOTAL_CELLS).map(move |idx| {
            let pos = Pos::from_index(idx);
            (pos, self.get(pos))
        })
    }

    /// Iterate over the positions holding `stone`, row-major
    pub fn stones_of(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        self.cells()
            .filter(move |&(_, s)| s == stone)
            .map(|(pos, _)| pos)
    }

    /// Grid as wire codes (0 = empty, 1 = black, 2 = white), one row per entry
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|s| s.code()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{r:>3}")?;
            for stone in row {
                let ch = match stone {
                    Stone::Empty => '.',
                    Stone::Black => 'X',
                    Stone::White => 'O',
                };
                write!(f, "{ch:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A stone placed by [`Board::speculate`], removed again on drop.
pub struct Speculation<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Speculation<'_> {
    /// Position of the speculative stone
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}
