//! The bridge between a `CubeState` and an external solver.

use log::{debug, warn};

use super::facelets::{facelet_cell, facelet_count, from_facelets, to_facelets};
use super::oracle::{CommandOracle, OracleConfig, SolverOracle};
use crate::core::{CubeError, CubeState, Result};
use crate::moves::{Move, MoveSequence};

/// The only cube size the two-phase solvers accept.
pub const SOLVER_SIZE: usize = 3;

/// Encode a 3x3x3 state as the solver's 54-letter facelet string.
pub fn encode(state: &CubeState) -> Result<String> {
    if state.size() != SOLVER_SIZE {
        return Err(CubeError::UnsupportedSize(state.size()));
    }
    to_facelets(state)
}

/// Inverse of [`encode`]. The size is inferred from the length.
pub fn decode(facelets: &str) -> Result<CubeState> {
    from_facelets(facelets)
}

/// The facelet string of a solved 3x3x3: every face in its home color.
#[must_use]
pub fn solved_facelets() -> String {
    (0..facelet_count(SOLVER_SIZE))
        .filter_map(|i| facelet_cell(i, SOLVER_SIZE))
        .map(|(face, _, _)| face.letter())
        .collect()
}

/// Parse a solver reply into moves, skipping a `(17)`-style move count.
pub fn parse_reply(reply: &str) -> Result<MoveSequence> {
    reply
        .split_whitespace()
        .filter(|token| !(token.starts_with('(') && token.ends_with(')')))
        .map(|token| {
            Move::parse(token).map_err(|_| {
                CubeError::SolveFailed(format!("solver replied with bad move {token:?}"))
            })
        })
        .collect()
}

/// Asks a [`SolverOracle`] for solutions to cube states.
///
/// `solve` never touches the state it is given; the caller applies the
/// returned moves itself. The oracle call is synchronous and has no timeout.
///
/// ```no_run
/// use cube_engine::core::{CubeRng, CubeState};
/// use cube_engine::scramble::scramble;
/// use cube_engine::solver::{OracleConfig, SolverAdapter};
///
/// let mut cube = CubeState::new(3)?;
/// scramble(&mut cube, 20, &mut CubeRng::new(1));
///
/// let solver = SolverAdapter::command(OracleConfig::default());
/// let solution = solver.solve(&cube)?;
/// cube.apply_sequence(&solution);
/// assert!(cube.is_solved());
/// # Ok::<(), cube_engine::core::CubeError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct SolverAdapter<O = CommandOracle> {
    oracle: O,
}

impl SolverAdapter<CommandOracle> {
    /// Adapter backed by an external solver program.
    #[must_use]
    pub fn command(config: OracleConfig) -> Self {
        Self::new(CommandOracle::new(config))
    }
}

impl<O: SolverOracle> SolverAdapter<O> {
    #[must_use]
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    #[must_use]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// See [`encode`].
    pub fn encode(&self, state: &CubeState) -> Result<String> {
        encode(state)
    }

    /// See [`decode`].
    pub fn decode(&self, facelets: &str) -> Result<CubeState> {
        decode(facelets)
    }

    /// Ask the oracle for a move sequence that solves `state`.
    ///
    /// Only the home-colored solved cube skips the oracle. A cube whose faces
    /// are uniform but recolored (say U and D swapped) cannot be reached by
    /// moves and goes to the oracle like any other state.
    ///
    /// # Errors
    ///
    /// - `UnsupportedSize` if the cube is not 3x3x3
    /// - `SolverUnavailable` if the oracle cannot be reached
    /// - `SolveFailed` if the oracle rejects the state, replies with
    ///   something that is not notation, or replies with moves that do
    ///   not solve the cube
    pub fn solve(&self, state: &CubeState) -> Result<MoveSequence> {
        let facelets = self.encode(state)?;
        let solved = solved_facelets();
        if facelets == solved {
            return Ok(MoveSequence::new());
        }

        debug!("Sending {facelets} to solver");
        let reply = self.oracle.solve(&facelets).map_err(|err| {
            warn!("Solver gave no solution for {facelets}: {err}");
            CubeError::from(err)
        })?;
        debug!("Solver replied {reply:?}");

        let solution = parse_reply(&reply)?;

        let mut check = state.clone();
        check.apply_sequence(&solution);
        if encode(&check)? != solved {
            warn!("Solver reply {solution} does not solve {facelets}");
            return Err(CubeError::SolveFailed(format!(
                "reply {solution} leaves the cube unsolved"
            )));
        }

        Ok(solution)
    }
}
