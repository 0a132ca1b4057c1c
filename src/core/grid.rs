//! The N×N sticker grid of one face.
//!
//! Cells are stored row-major as seen when looking straight at the face from
//! outside the cube, with the orientation fixed by
//! [`geometry`](crate::moves::geometry). Storage is an `im::Vector`, so
//! snapshotting a grid before a move is O(1) and the copy stays independent
//! once either side is written.

use im::Vector;
use serde::Serialize;

use super::face::Color;

/// N×N matrix of colors, owned by exactly one [`CubeState`](super::CubeState).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FaceGrid {
    size: usize,
    cells: Vector<Color>,
}

impl FaceGrid {
    /// Create a grid uniformly filled with `color`.
    #[must_use]
    pub fn filled(size: usize, color: Color) -> Self {
        Self {
            size,
            cells: std::iter::repeat(color).take(size * size).collect(),
        }
    }

    /// Side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Color at (`row`, `col`), or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.offset(row, col).map(|i| self.cells[i])
    }

    /// Overwrite (`row`, `col`), returning the color it replaced.
    ///
    /// Returns `None` and leaves the grid untouched outside the grid.
    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Option<Color> {
        let i = self.offset(row, col)?;
        Some(self.cells.set(i, color))
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().copied()
    }

    /// One row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().skip(row * self.size).take(self.size).copied()
    }

    /// Number of cells showing `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// This grid turned a quarter clockwise, as seen from outside the face.
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        let n = self.size;
        let cells = (0..n)
            .flat_map(|row| (0..n).map(move |col| (row, col)))
            .map(|(row, col)| self.at(n - 1 - col, row))
            .collect();
        Self { size: n, cells }
    }

    /// Unchecked read for callers that already hold in-range indices.
    pub(crate) fn at(&self, row: usize, col: usize) -> Color {
        self.cells[row * self.size + col]
    }

    /// Unchecked write for callers that already hold in-range indices.
    pub(crate) fn put(&mut self, row: usize, col: usize, color: Color) {
        self.cells.set(row * self.size + col, color);
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}
