//! Face-local coordinates ↔ 3-D cubie coordinates.
//!
//! Cubie positions use `x` from Left to Right, `y` from Down to Up and `z`
//! from Back to Front, each in `0..N`.
//!
//! Each face is viewed from outside the cube, with rows running top to bottom
//! and columns left to right:
//!
//! | Face  | Seen with … at the top | Column 0 borders |
//! |-------|------------------------|------------------|
//! | Up    | Back                   | Left             |
//! | Down  | Front                  | Left             |
//! | Front | Up                     | Left             |
//! | Back  | Up                     | Right            |
//! | Right | Up                     | Front            |
//! | Left  | Up                     | Back             |
//!
//! This is the same orientation an external two-phase solver expects when it
//! reads a facelet string, so the solver encoding and the move tables agree
//! on where every sticker sits.

use serde::{Deserialize, Serialize};

use crate::core::Face;

/// A cubie position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

/// Outward unit normal of a face, in (x, y, z).
#[must_use]
pub const fn normal(face: Face) -> [i64; 3] {
    match face {
        Face::Up => [0, 1, 0],
        Face::Down => [0, -1, 0],
        Face::Left => [-1, 0, 0],
        Face::Right => [1, 0, 0],
        Face::Front => [0, 0, 1],
        Face::Back => [0, 0, -1],
    }
}

/// Face whose outward normal is `n`.
#[must_use]
pub fn face_with_normal(n: [i64; 3]) -> Option<Face> {
    Face::ALL.into_iter().find(|&f| normal(f) == n)
}

/// Cubie carrying the sticker at (`row`, `col`) of `face` on a size-`n` cube.
///
/// Requires `n >= 1` and indices in `0..n`; every `CubeState` has `n >= 2`.
/// Use [`facelet_at`] for unchecked input.
#[must_use]
pub fn facelet_position(face: Face, row: usize, col: usize, n: usize) -> Position {
    let m = n - 1;
    match face {
        Face::Up => Position::new(col, m, row),
        Face::Down => Position::new(col, 0, m - row),
        Face::Front => Position::new(col, m - row, m),
        Face::Back => Position::new(m - col, m - row, 0),
        Face::Right => Position::new(m, m - row, m - col),
        Face::Left => Position::new(0, m - row, col),
    }
}

/// Inverse of [`facelet_position`]: the (row, col) on `face` of the sticker
/// carried by the cubie at `pos`, or `None` if that cubie shows no sticker
/// on `face`.
#[must_use]
pub fn facelet_at(face: Face, pos: Position, n: usize) -> Option<(usize, usize)> {
    let m = n.checked_sub(1)?;
    if pos.x > m || pos.y > m || pos.z > m {
        return None;
    }
    let Position { x, y, z } = pos;
    match face {
        Face::Up => (y == m).then_some((z, x)),
        Face::Down => (y == 0).then_some((m - z, x)),
        Face::Front => (z == m).then_some((m - y, x)),
        Face::Back => (z == 0).then_some((m - y, m - x)),
        Face::Right => (x == m).then_some((m - y, m - z)),
        Face::Left => (x == 0).then_some((m - y, z)),
    }
}
