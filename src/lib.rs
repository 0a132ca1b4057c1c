//! # cube-engine
//!
//! A state engine for N×N×N Rubik's cubes (N ≥ 2).
//!
//! ## Design Principles
//!
//! 1. **One representation**: A cube is six `FaceGrid`s of colors, one per
//!    face. Solver strings, the text net and per-cubie sticker lists are all
//!    computed from it, never stored alongside it.
//!
//! 2. **Moves are permutations**: Turning an outer layer rotates that face's
//!    own grid and cycles four edge strips on its neighbours. The strip table
//!    is checked against a 3-D rotation model for every size tested.
//!
//! 3. **Injected randomness**: Scrambles draw from a seeded `CubeRng`, so a
//!    seed reproduces the exact scramble.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so a solver
//!   reply can be verified on a throwaway copy.
//!
//! - **Atomic Moves**: A move computes the new faces, then commits them in
//!   one step. Fallible operations fail before any state changes.
//!
//! - **Threading**: `CubeState` is `Send + Sync`. Mutation takes `&mut`, so
//!   moves on one state are serialized by the borrow checker; callers that
//!   share a state across threads wrap it in a lock of their choice.
//!
//! ## Modules
//!
//! - `core`: Faces, colors, grids, state, errors, RNG, configuration
//! - `moves`: Move notation and the move engine
//! - `scramble`: Random scrambles
//! - `rules`: Solved-state detection
//! - `solver`: Facelet encoding and the external solver hand-off
//!
//! ```
//! use cube_engine::CubeConfig;
//!
//! let config = CubeConfig::new(3).with_seed(7);
//! let mut cube = config.build()?;
//! let scramble = cube_engine::scramble::scramble(
//!     &mut cube,
//!     config.scramble_length(),
//!     &mut config.rng(),
//! );
//!
//! cube.apply_sequence(&scramble.inverse());
//! assert!(cube.is_solved());
//! # Ok::<(), cube_engine::CubeError>(())
//! ```

pub mod core;
pub mod moves;
pub mod rules;
pub mod scramble;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{
    Color, CubeConfig, CubeError, CubeRng, CubeRngState, CubeState, Face, FaceGrid, Result,
    FACE_TABLE,
};

pub use crate::moves::{Amount, Move, MoveSequence, Position};

pub use crate::rules::is_solved;

pub use crate::scramble::{default_length, scramble, scramble_default};

pub use crate::solver::{
    CommandOracle, OracleConfig, OracleError, SolverAdapter, SolverOracle,
};
