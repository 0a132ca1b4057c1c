//! Move notation, the move engine, and the geometry convention it relies on.
//!
//! - `notation`: `Move`, `Amount`, `MoveSequence` and their parsers
//! - `engine`: applies moves to a `CubeState` as sticker permutations
//! - `geometry`: face-local (row, col) ↔ 3-D cubie coordinates

pub mod engine;
pub mod geometry;
pub mod notation;

pub use engine::{apply, apply_sequence, ring, Edge, Strip};
pub use geometry::Position;
pub use notation::{Amount, Move, MoveSequence};
