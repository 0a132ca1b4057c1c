//! Facelet strings: the text form of a cube handed to an external solver.
//!
//! A facelet string has `6·N²` letters, one per sticker, each the letter of
//! the sticker color's home face. Faces appear in [`FACELET_ORDER`]
//! (U R F D L B); within a face, stickers run row by row as seen from outside
//! that face.
//!
//! ```text
//!              U1 U2 U3
//!              U4 U5 U6
//!              U7 U8 U9
//!    L1 L2 L3  F1 F2 F3  R1 R2 R3  B1 B2 B3
//!    L4 L5 L6  F4 F5 F6  R4 R5 R6  B4 B5 B6
//!    L7 L8 L9  F7 F8 F9  R7 R8 R9  B7 B8 B9
//!              D1 D2 D3
//!              D4 D5 D6
//!              D7 D8 D9
//! ```
//!
//! The mapping is defined for every N. Only N = 3 is accepted by the
//! solvers this crate talks to; see [`SolverAdapter`](super::SolverAdapter).

use crate::core::{Color, CubeError, CubeState, Face, Result};

/// Face order of a facelet string.
pub const FACELET_ORDER: [Face; 6] = [
    Face::Up,
    Face::Right,
    Face::Front,
    Face::Down,
    Face::Left,
    Face::Back,
];

/// Number of letters in the facelet string of a size-`n` cube.
#[must_use]
pub const fn facelet_count(n: usize) -> usize {
    6 * n * n
}

/// The sticker named by position `index` of a size-`n` facelet string.
#[must_use]
pub fn facelet_cell(index: usize, n: usize) -> Option<(Face, usize, usize)> {
    if index >= facelet_count(n) {
        return None;
    }
    let per_face = n * n;
    let face = FACELET_ORDER[index / per_face];
    let within = index % per_face;
    Some((face, within / n, within % n))
}

/// Encode `state` as a facelet string, for any size.
pub fn to_facelets(state: &CubeState) -> Result<String> {
    let n = state.size();
    (0..facelet_count(n))
        .map(|i| -> Result<char> {
            let (face, row, col) = facelet_cell(i, n)
                .ok_or_else(|| CubeError::Encoding(format!("no sticker for facelet {i}")))?;
            Ok(state.get(face, row, col)?.letter())
        })
        .collect()
}

/// Decode a facelet string of any valid length (`6·N²`, N ≥ 2).
pub fn from_facelets(facelets: &str) -> Result<CubeState> {
    let letters: Vec<char> = facelets.chars().collect();
    let n = size_for_count(letters.len()).ok_or_else(|| {
        CubeError::Encoding(format!(
            "length {} is not 6·N² for any N >= 2",
            letters.len()
        ))
    })?;

    let mut state = CubeState::new(n)?;
    for (i, &letter) in letters.iter().enumerate() {
        let color = Color::from_letter(letter).ok_or_else(|| {
            CubeError::Encoding(format!("unexpected letter {letter:?} at position {i}"))
        })?;
        let (face, row, col) = facelet_cell(i, n)
            .ok_or_else(|| CubeError::Encoding(format!("no sticker for facelet {i}")))?;
        state.set(face, row, col, color)?;
    }
    Ok(state)
}

fn size_for_count(count: usize) -> Option<usize> {
    if count % 6 != 0 {
        return None;
    }
    let per_face = count / 6;
    (2..)
        .take_while(|n| n * n <= per_face)
        .find(|n| n * n == per_face)
}
