//! Faces, colors, and the one table that ties them to notation letters.
//!
//! ## Face
//!
//! One of the six outer planes of the cube. A label, never a mutable entity.
//!
//! ## Color
//!
//! One sticker color per face. In the solved state every sticker on a face
//! carries that face's home color.
//!
//! ## Letters
//!
//! Move notation and the facelet string handed to an external solver both
//! name colors by the letter of their home face (`U`, `D`, `L`, `R`, `F`,
//! `B`). [`FACE_TABLE`] is the single source of that mapping; every other
//! conversion in the crate goes through it.

use serde::{Deserialize, Serialize};

use super::error::{CubeError, Result};

/// One of the six outer faces.
///
/// Discriminants are stable and used to index per-face storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    Front = 4,
    Back = 5,
}

/// Sticker color. Each color belongs to exactly one home face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White = 0,
    Yellow = 1,
    Orange = 2,
    Red = 3,
    Green = 4,
    Blue = 5,
}

/// A row of [`FACE_TABLE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceEntry {
    pub face: Face,
    pub color: Color,
    pub letter: char,
}

/// Face ↔ Color ↔ letter, indexed by `Face as usize` and `Color as usize`.
pub const FACE_TABLE: [FaceEntry; 6] = [
    FaceEntry { face: Face::Up, color: Color::White, letter: 'U' },
    FaceEntry { face: Face::Down, color: Color::Yellow, letter: 'D' },
    FaceEntry { face: Face::Left, color: Color::Orange, letter: 'L' },
    FaceEntry { face: Face::Right, color: Color::Red, letter: 'R' },
    FaceEntry { face: Face::Front, color: Color::Green, letter: 'F' },
    FaceEntry { face: Face::Back, color: Color::Blue, letter: 'B' },
];

impl Face {
    /// All faces in index order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// Index into per-face storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face for a storage index.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| CubeError::InvalidArgument(format!("face index {index} is not in 0..6")))
    }

    /// Notation letter (`U`, `D`, `L`, `R`, `F`, `B`).
    #[must_use]
    pub const fn letter(self) -> char {
        FACE_TABLE[self as usize].letter
    }

    /// Face named by a notation letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        FACE_TABLE.iter().find(|e| e.letter == letter).map(|e| e.face)
    }

    /// Color this face shows when solved.
    #[must_use]
    pub const fn home_color(self) -> Color {
        FACE_TABLE[self as usize].color
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Color {
    /// All colors in index order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Orange,
        Color::Red,
        Color::Green,
        Color::Blue,
    ];

    /// Color for an index.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| CubeError::InvalidArgument(format!("color index {index} is not in 0..6")))
    }

    /// The face this color belongs to.
    #[must_use]
    pub const fn home_face(self) -> Face {
        FACE_TABLE[self as usize].face
    }

    /// Letter of the home face, as used in facelet strings.
    #[must_use]
    pub const fn letter(self) -> char {
        FACE_TABLE[self as usize].letter
    }

    /// Color whose home face has the given letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        FACE_TABLE.iter().find(|e| e.letter == letter).map(|e| e.color)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
