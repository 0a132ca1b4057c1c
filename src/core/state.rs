//! Cube state: six face grids and the size they share.
//!
//! ## Invariants
//!
//! - Every grid is `size × size`, with `size >= 2`.
//! - A state reached from solved only through moves shows each color on
//!   exactly `size²` stickers. Moves are permutations, so this holds by
//!   construction; [`CubeState::color_counts`] exists to check it.
//! - The solved state fills every face with its home color.
//!
//! ## Ownership
//!
//! A `CubeState` is exclusively owned by its caller. It is `Send + Sync`,
//! and every mutation takes `&mut self`, so the borrow checker already
//! serialises moves on one state. A caller that shares one state between
//! threads (say, a UI thread applying moves while a background solve is in
//! flight) must put it behind a lock of its choosing.
//!
//! Cloning is a deep copy as far as callers can tell: the grids are
//! persistent vectors, so the clone is O(1) and writes to either copy never
//! show through to the other.

use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

use super::error::{CubeError, Result};
use super::face::{Color, Face};
use super::grid::FaceGrid;
use crate::moves::geometry::{facelet_at, Position};

/// The visible coloring of an N×N×N cube.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CubeState {
    size: usize,
    /// Indexed by `Face::index()`.
    faces: [FaceGrid; 6],
}

impl CubeState {
    /// Create a solved cube of the given size.
    ///
    /// Fails with [`CubeError::InvalidSize`] if `size < 2`.
    pub fn new(size: usize) -> Result<Self> {
        if size < 2 {
            return Err(CubeError::InvalidSize(size));
        }
        Ok(Self {
            size,
            faces: Self::solved_faces(size),
        })
    }

    fn solved_faces(size: usize) -> [FaceGrid; 6] {
        Face::ALL.map(|face| FaceGrid::filled(size, face.home_color()))
    }

    /// Restore the solved coloring.
    pub fn reset(&mut self) {
        self.faces = Self::solved_faces(self.size);
    }

    /// Side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Color of the sticker at (`row`, `col`) on `face`.
    pub fn get(&self, face: Face, row: usize, col: usize) -> Result<Color> {
        self.faces[face.index()]
            .get(row, col)
            .ok_or_else(|| self.index_error(face, row, col))
    }

    /// Recolor the sticker at (`row`, `col`) on `face`.
    ///
    /// This bypasses the move engine, so it can produce states that no
    /// sequence of moves reaches.
    pub fn set(&mut self, face: Face, row: usize, col: usize, color: Color) -> Result<()> {
        match self.faces[face.index()].set(row, col, color) {
            Some(_) => Ok(()),
            None => Err(self.index_error(face, row, col)),
        }
    }

    /// The grid of one face.
    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face.index()]
    }

    pub(crate) fn faces(&self) -> &[FaceGrid; 6] {
        &self.faces
    }

    /// Replace all six grids at once.
    pub(crate) fn commit(&mut self, faces: [FaceGrid; 6]) {
        debug_assert!(faces.iter().all(|g| g.size() == self.size));
        self.faces = faces;
    }

    /// Number of stickers showing each color.
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for grid in &self.faces {
            for color in grid.iter() {
                *counts.entry(color).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Stickers carried by the cubie at `pos`, one per outer face it touches.
    ///
    /// Interior positions and positions off the cube yield nothing. Meant for
    /// renderers that draw per-cubie; derived on every call, never stored.
    #[must_use]
    pub fn stickers_at(&self, pos: Position) -> SmallVec<[(Face, Color); 3]> {
        Face::ALL
            .iter()
            .filter_map(|&face| {
                let (row, col) = facelet_at(face, pos, self.size)?;
                Some((face, self.faces[face.index()].at(row, col)))
            })
            .collect()
    }

    fn write_row(&self, f: &mut std::fmt::Formatter<'_>, face: Face, row: usize) -> std::fmt::Result {
        self.face(face).row(row).try_for_each(|c| write!(f, "{c}"))
    }

    fn index_error(&self, face: Face, row: usize, col: usize) -> CubeError {
        CubeError::Index {
            face,
            row,
            col,
            size: self.size,
        }
    }
}

/// Unfolded net: Up on top, then Left Front Right Back, then Down.
impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let indent = " ".repeat(self.size + 1);

        for row in 0..self.size {
            write!(f, "{indent}")?;
            self.write_row(f, Face::Up, row)?;
            writeln!(f)?;
        }
        for row in 0..self.size {
            for (i, face) in [Face::Left, Face::Front, Face::Right, Face::Back].into_iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                self.write_row(f, face, row)?;
            }
            writeln!(f)?;
        }
        for row in 0..self.size {
            write!(f, "{indent}")?;
            self.write_row(f, Face::Down, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
