//! Board module - manages the game grid
//!
//! The board is a fixed-size grid where each cell is empty or filled with the kind
//! of piece that was locked there. Cells live in one flat row-major vector.
//! Coordinates: (x, y) with x in `0..width` (left to right) and y in `0..height`
//! (top to bottom).
//!
//! Board values are never mutated by the engine once they belong to a game:
//! locking and line clears build a new board.

use crate::piece::Piece;
use crate::types::config::check_board_size;
use crate::types::{Cell, ConfigError, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board - `width` columns x `height` rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

/// Result of removing full rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowClear {
    pub board: Board,
    /// Number of rows removed, `0..=height`
    pub cleared: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        check_board_size(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        })
    }

    /// Empty 10x20 board
    pub fn standard() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: vec![Cell::Empty; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
        }
    }

    /// Build a board from text rows: `.` is empty, `#` or a piece letter is filled.
    ///
    /// Panics on ragged rows or unknown characters; this is a fixture helper.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len() as u16;
        let width = rows.first().map_or(0, |r| r.chars().count()) as u16;
        let mut board = match Self::new(width, height) {
            Ok(board) => board,
            Err(err) => panic!("invalid fixture board: {}", err),
        };

        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width as usize, "ragged fixture row {}", y);
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    '#' | 'I' => Cell::Filled(PieceKind::I),
                    'O' => Cell::Filled(PieceKind::O),
                    'T' => Cell::Filled(PieceKind::T),
                    'S' => Cell::Filled(PieceKind::S),
                    'Z' => Cell::Filled(PieceKind::Z),
                    'J' => Cell::Filled(PieceKind::J),
                    'L' => Cell::Filled(PieceKind::L),
                    other => panic!("unknown fixture cell {:?}", other),
                };
                board.set(x as i32, y as i32, cell);
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether (x, y) lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether the cell at (x, y) holds a locked block.
    ///
    /// Positions outside the grid are reported as not filled. Whether they
    /// block a piece is decided by [`crate::collision::blocks`], which treats
    /// the side walls and floor as solid and the space above the top as open.
    pub fn is_filled(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(Cell::is_filled))
    }

    /// One row of cells, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        Some(&self.cells[y * width..(y + 1) * width])
    }

    /// Empty board with the same dimensions
    pub fn empty_like(&self) -> Board {
        Board {
            width: self.width,
            height: self.height,
            cells: vec![Cell::Empty; self.cells.len()],
        }
    }

    /// Number of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Return a new board with every cell of `piece` stamped as filled.
    ///
    /// Panics if any cell of the piece is outside the grid or already filled:
    /// callers must confirm placement with `can_place` first.
    pub fn merge_piece(&self, piece: &Piece) -> Board {
        let mut merged = self.clone();
        let cell = Cell::Filled(piece.shape.kind());
        for (x, y) in piece.cells() {
            let idx = match self.index(x, y) {
                Some(idx) => idx,
                None => panic!("merge_piece: cell ({}, {}) is outside the board", x, y),
            };
            assert!(
                !self.cells[idx].is_filled(),
                "merge_piece: cell ({}, {}) is already filled",
                x,
                y
            );
            merged.cells[idx] = cell;
        }
        merged
    }

    /// Remove every full row at once and return the compacted board.
    ///
    /// Rows that survive keep their relative order and drop by the number of
    /// removed rows beneath them; the same number of empty rows appear on top.
    pub fn clear_full_rows(&self) -> RowClear {
        let mut board = self.clone();
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut cleared = 0;

        // Scan from bottom to top, two-pointer style
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    board
                        .cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Clear the remaining rows at the top
        board.cells[..write_y * width].fill(Cell::Empty);

        RowClear { board, cleared }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
