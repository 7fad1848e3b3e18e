//! Shape module - one rotation's footprint as a small owned matrix
//!
//! Shapes are at most 4x4, so the cells live in a fixed array and the live
//! area is described by `width`/`height`. No heap allocation, `Copy`.

use crate::types::{Cell, PieceKind};

/// Largest side length of any tetromino matrix
pub const MAX_SHAPE_SIDE: usize = 4;

/// A rectangular matrix of cells, row-major, `height` rows by `width` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [Cell; MAX_SHAPE_SIDE * MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build a shape from rows of numeric cell codes (0 = empty, 1..=7 = kind).
    ///
    /// Rows must be non-empty, of equal length and at most 4x4.
    pub const fn from_codes<const W: usize, const H: usize>(rows: [[u8; W]; H]) -> Self {
        assert!(W > 0 && W <= MAX_SHAPE_SIDE && H > 0 && H <= MAX_SHAPE_SIDE);

        let mut cells = [None; MAX_SHAPE_SIDE * MAX_SHAPE_SIDE];
        let mut y = 0;
        while y < H {
            let mut x = 0;
            while x < W {
                cells[y * MAX_SHAPE_SIDE + x] = match rows[y][x] {
                    1 => Some(PieceKind::I),
                    2 => Some(PieceKind::J),
                    3 => Some(PieceKind::L),
                    4 => Some(PieceKind::O),
                    5 => Some(PieceKind::S),
                    6 => Some(PieceKind::T),
                    7 => Some(PieceKind::Z),
                    _ => None,
                };
                x += 1;
            }
            y += 1;
        }

        Self {
            width: W as u8,
            height: H as u8,
            cells,
        }
    }

    /// Create an empty shape with the given dimensions (clamped to 1..=4)
    pub fn empty(width: u8, height: u8) -> Self {
        Self {
            width: width.clamp(1, MAX_SHAPE_SIDE as u8),
            height: height.clamp(1, MAX_SHAPE_SIDE as u8),
            cells: [None; MAX_SHAPE_SIDE * MAX_SHAPE_SIDE],
        }
    }

    /// Number of columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline(always)]
    fn index(&self, col: u8, row: u8) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(row as usize * MAX_SHAPE_SIDE + col as usize)
    }

    /// Cell at (col, row); `None` both for empty cells and out-of-range lookups
    pub fn get(&self, col: u8, row: u8) -> Cell {
        self.index(col, row).and_then(|i| self.cells[i])
    }

    /// Set cell at (col, row). Out-of-range writes are ignored.
    pub fn set(&mut self, col: u8, row: u8, cell: Cell) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = cell;
        }
    }

    /// Iterate over occupied cells as `(col, row, kind)`
    pub fn blocks(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).filter_map(move |col| {
                self.get(col, row)
                    .map(|kind| (col as i8, row as i8, kind))
            })
        })
    }

    /// Index of the lowest row that holds at least one block
    pub fn bottom_row(&self) -> Option<u8> {
        (0..self.height)
            .rev()
            .find(|&row| (0..self.width).any(|col| self.get(col, row).is_some()))
    }
}
