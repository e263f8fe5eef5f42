//! Piece module - tetromino geometry and rotation
//!
//! A piece is four cell offsets around a pivot at the origin. Offsets use
//! "up is positive y"; the board flips the sign when mapping onto grid rows.
//! Rotation is an exact 90° turn about the pivot with no wall kicks: if the
//! result does not fit, the board rejects the move.

use crate::rng::ShapeSource;
use crate::types::{EngineError, Shape};

/// Offset of a single cell relative to the piece pivot
pub type CellOffset = (i8, i8);

/// Number of cells in every piece
pub const PIECE_CELLS: usize = 4;

/// Canonical offsets for a shape
pub fn canonical_cells(shape: Shape) -> [CellOffset; PIECE_CELLS] {
    match shape {
        Shape::Empty => [(0, 0), (0, 0), (0, 0), (0, 0)],
        Shape::Z => [(0, -1), (0, 0), (-1, 0), (-1, 1)],
        Shape::S => [(0, -1), (0, 0), (1, 0), (1, 1)],
        Shape::I => [(0, -1), (0, 0), (0, 1), (0, 2)],
        Shape::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        Shape::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        Shape::L => [(-1, -1), (0, -1), (0, 0), (0, 1)],
        Shape::J => [(1, -1), (0, -1), (0, 0), (0, 1)],
    }
}

/// An oriented piece
///
/// Values are immutable: rotating yields a new `Piece` and leaves the original
/// untouched, so copies handed to renderers never change underneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    cells: [CellOffset; PIECE_CELLS],
}

impl Piece {
    /// Canonical piece for a shape
    pub fn for_shape(shape: Shape) -> Self {
        Self {
            shape,
            cells: canonical_cells(shape),
        }
    }

    /// The no-shape sentinel (all offsets at the origin)
    pub fn empty() -> Self {
        Self::for_shape(Shape::Empty)
    }

    /// Canonical piece for the next shape drawn from `source`
    pub fn random(source: &mut impl ShapeSource) -> Self {
        Self::for_shape(source.next_shape())
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    pub fn cells(&self) -> &[CellOffset; PIECE_CELLS] {
        &self.cells
    }

    /// Offset of the `index`-th cell
    pub fn cell_at(&self, index: usize) -> Result<CellOffset, EngineError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(EngineError::IndexOutOfRange {
                index,
                len: PIECE_CELLS,
            })
    }

    pub fn min_x(&self) -> i8 {
        self.cells.iter().map(|&(x, _)| x).min().unwrap_or(0)
    }

    pub fn min_y(&self) -> i8 {
        self.cells.iter().map(|&(_, y)| y).min().unwrap_or(0)
    }

    /// Rotate 90° counter-clockwise: (x, y) → (y, −x)
    pub fn rotate_left(&self) -> Self {
        self.map_cells(|(x, y)| (y, -x))
    }

    /// Rotate 90° clockwise: (x, y) → (−y, x)
    pub fn rotate_right(&self) -> Self {
        self.map_cells(|(x, y)| (-y, x))
    }

    // The square looks the same in every orientation, so it is left as is.
    fn map_cells(&self, f: impl Fn(CellOffset) -> CellOffset) -> Self {
        if self.shape == Shape::O {
            return *self;
        }
        Self {
            shape: self.shape,
            cells: self.cells.map(f),
        }
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_piece_has_four_distinct_cells() {
        for shape in Shape::PLAYABLE {
            let piece = Piece::for_shape(shape);
            let cells = piece.cells();
            for i in 0..PIECE_CELLS {
                for j in (i + 1)..PIECE_CELLS {
                    assert_ne!(cells[i], cells[j], "{:?} repeats a cell", shape);
                }
            }
        }
    }

    #[test]
    fn empty_piece_sits_at_origin() {
        let piece = Piece::empty();
        assert_eq!(piece.shape(), Shape::Empty);
        assert!(piece.cells().iter().all(|&c| c == (0, 0)));
        assert_eq!(Piece::default(), piece);
    }

    #[test]
    fn map_cells_keeps_shape_tag() {
        let t = Piece::for_shape(Shape::T);
        assert_eq!(t.rotate_left().shape(), Shape::T);
        assert_eq!(t.rotate_right().shape(), Shape::T);
    }
}
