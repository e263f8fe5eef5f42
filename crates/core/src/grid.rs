//! Grid module - the well of locked cells
//!
//! The grid is a 10x22 array where each cell holds a [`Shape`] (`Empty` when free).
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges 0..21
//! (bottom to top, row 0 is the floor). Storage is row-major from the floor up.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{EngineError, Shape, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Rows removed by one [`Grid::remove_full_rows`] call, in detection order
pub type ClearedRows = ArrayVec<i8, { BOARD_HEIGHT as usize }>;

/// Absolute grid position of a piece cell.
///
/// Piece offsets grow upward while the pivot row is counted from the floor, so
/// the vertical offset is subtracted. Collision checks and locking both go
/// through here. `None` when the position does not fit in an `i8`, which is
/// off the grid either way.
#[inline(always)]
pub fn cell_position(pivot_x: i8, pivot_y: i8, (dx, dy): (i8, i8)) -> Option<(i8, i8)> {
    Some((pivot_x.checked_add(dx)?, pivot_y.checked_sub(dy)?))
}

/// Absolute positions of all four cells of `piece` with its pivot at (x, y)
pub fn piece_positions(piece: &Piece, x: i8, y: i8) -> Option<[(i8, i8); 4]> {
    let mut positions = [(0, 0); 4];
    for (slot, &offset) in positions.iter_mut().zip(piece.cells()) {
        *slot = cell_position(x, y, offset)?;
    }
    Some(positions)
}

/// The grid of locked cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Shape; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Shape::Empty; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Shape stored at (x, y)
    pub fn shape_at(&self, x: i8, y: i8) -> Result<Shape, EngineError> {
        Self::index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(EngineError::CellOutOfBounds { x, y })
    }

    /// Store `shape` at (x, y)
    pub fn set(&mut self, x: i8, y: i8, shape: Shape) -> Result<(), EngineError> {
        let idx = Self::index(x, y).ok_or(EngineError::CellOutOfBounds { x, y })?;
        self.cells[idx] = shape;
        Ok(())
    }

    /// In bounds and unoccupied
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(Self::index(x, y), Some(idx) if self.cells[idx].is_empty())
    }

    /// Whether every cell of `piece` with its pivot at (x, y) is free
    pub fn fits(&self, piece: &Piece, x: i8, y: i8) -> bool {
        piece_positions(piece, x, y)
            .is_some_and(|positions| positions.iter().all(|&(px, py)| self.is_free(px, py)))
    }

    /// Write the piece's shape into its four cells.
    ///
    /// The caller guarantees the piece fits; an out-of-range cell is reported
    /// without writing anything.
    pub fn lock(&mut self, piece: &Piece, x: i8, y: i8) -> Result<(), EngineError> {
        let positions =
            piece_positions(piece, x, y).ok_or(EngineError::CellOutOfBounds { x, y })?;
        if let Some(&(bx, by)) = positions.iter().find(|&&(px, py)| !Self::in_bounds(px, py)) {
            return Err(EngineError::CellOutOfBounds { x: bx, y: by });
        }
        for (px, py) in positions {
            self.set(px, py, piece.shape())?;
        }
        Ok(())
    }

    fn row(&self, y: usize) -> &[Shape] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        if y < 0 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        self.row(y as usize).iter().all(|cell| !cell.is_empty())
    }

    /// Remove row `y`, pulling every row above it down by one.
    ///
    /// The top row is left empty.
    fn collapse_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;
        let height = BOARD_HEIGHT as usize;

        // copy_within handles the overlapping ranges
        let src_start = (y + 1) * width;
        self.cells
            .copy_within(src_start..height * width, y * width);

        let top_start = (height - 1) * width;
        self.cells[top_start..].fill(Shape::Empty);
    }

    /// Remove every full row, scanning from the top row down to the floor.
    ///
    /// A row is collapsed as soon as it is found full and the same index is
    /// examined again, so stacked full rows are all removed in one call.
    /// Each collapse vacates the top row instead of repeating its old contents.
    /// Returns the indices at which rows were removed, in detection order.
    pub fn remove_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = BOARD_HEIGHT as i8 - 1;
        while y >= 0 {
            if self.is_row_full(y) {
                self.collapse_row(y as usize);
                cleared.push(y);
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Shape] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(Shape::Empty);
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Build a grid from text rows, top row first.
    ///
    /// Each row is up to 10 characters; shape letters fill, anything else is
    /// empty. Rows missing at the top are empty. Intended for tests.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid = Self::new();
        let height = BOARD_HEIGHT as usize;
        for (i, row) in rows.iter().rev().enumerate().take(height) {
            for (x, ch) in row.chars().enumerate().take(BOARD_WIDTH as usize) {
                let shape = Shape::from_str(&ch.to_string()).unwrap_or(Shape::Empty);
                grid.cells[i * BOARD_WIDTH as usize + x] = shape;
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
