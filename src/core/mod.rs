//! Core engine types: faces, colors, grids, state, errors, RNG, configuration.
//!
//! Everything here is plain data. Moves live in `moves`, scrambling in
//! `scramble`, and the solver hand-off in `solver`.

pub mod config;
pub mod error;
pub mod face;
pub mod grid;
pub mod rng;
pub mod state;

pub use config::CubeConfig;
pub use error::{CubeError, Result};
pub use face::{Color, Face, FaceEntry, FACE_TABLE};
pub use grid::FaceGrid;
pub use rng::{CubeRng, CubeRngState};
pub use state::CubeState;
