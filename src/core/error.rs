//! Error kinds reported by the engine.
//!
//! Every failure is local and recoverable. None of them leave a
//! [`CubeState`](super::CubeState) partially mutated.

use thiserror::Error;

use super::face::Face;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Cube size must be at least 2, got {0}")]
    InvalidSize(usize),
    #[error("Facelet ({row}, {col}) on face {face} is outside a {size}x{size} grid")]
    Index {
        face: Face,
        row: usize,
        col: usize,
        size: usize,
    },
    #[error("Invalid move token {0:?}")]
    InvalidMoveToken(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("The solver only supports 3x3x3 cubes, got {0}x{0}x{0}")]
    UnsupportedSize(usize),
    #[error("Malformed facelet string: {0}")]
    Encoding(String),
    #[error("Solver is unavailable: {0}")]
    SolverUnavailable(String),
    #[error("Solver failed: {0}")]
    SolveFailed(String),
}

pub type Result<T> = std::result::Result<T, CubeError>;
