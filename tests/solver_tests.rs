//! Solver adapter integration tests.
//!
//! Oracles here are stand-ins: closures that know the scramble, or shell
//! commands with predictable output. No real two-phase solver is needed.

use cube_engine::core::{CubeError, CubeRng, CubeState};
use cube_engine::moves::MoveSequence;
use cube_engine::scramble::scramble;
use cube_engine::solver::{
    decode, encode, CommandOracle, OracleConfig, OracleError, SolverAdapter, SolverOracle,
};

fn scrambled(seed: u64) -> (CubeState, MoveSequence) {
    let mut state = CubeState::new(3).unwrap();
    let seq = scramble(&mut state, 25, &mut CubeRng::new(seed));
    (state, seq)
}

/// An oracle that answers with the inverse of a known scramble.
fn undo(seq: &MoveSequence) -> impl SolverOracle {
    let reply = format!("{} ({})", seq.inverse(), seq.len());
    move |_: &str| -> Result<String, OracleError> { Ok(reply.clone()) }
}

// =============================================================================
// Solve Tests
// =============================================================================

/// A correct reply solves the cube once the caller applies it.
#[test_log::test]
fn test_solve_and_apply() {
    let (mut state, seq) = scrambled(7);
    let before = state.clone();
    let adapter = SolverAdapter::new(undo(&seq));

    let solution = adapter.solve(&state).unwrap();
    assert_eq!(state, before, "solve must not mutate the state");

    state.apply_sequence(&solution);
    assert!(state.is_solved());
}

/// The oracle receives exactly the encoded facelet string.
#[test_log::test]
fn test_oracle_receives_encoding() {
    let (state, seq) = scrambled(8);
    let expected = encode(&state).unwrap();
    let reply = seq.inverse().to_string();

    let adapter = SolverAdapter::new(move |facelets: &str| -> Result<String, OracleError> {
        assert_eq!(facelets, expected);
        Ok(reply.clone())
    });
    adapter.solve(&state).unwrap();
}

/// Oracle failures surface as typed errors.
#[test_log::test]
fn test_oracle_failures() {
    let (state, _) = scrambled(9);

    let missing = SolverAdapter::new(|_: &str| -> Result<String, OracleError> {
        Err(OracleError::Unavailable("not installed".into()))
    });
    assert!(matches!(
        missing.solve(&state),
        Err(CubeError::SolverUnavailable(_))
    ));

    let parity = SolverAdapter::new(|_: &str| -> Result<String, OracleError> {
        Err(OracleError::Rejected("Error 8: Probably parity error".into()))
    });
    assert!(matches!(parity.solve(&state), Err(CubeError::SolveFailed(_))));
}

/// A reply that does not solve the cube is rejected.
#[test_log::test]
fn test_wrong_solution_rejected() {
    let (state, seq) = scrambled(10);
    let mut wrong = seq.inverse();
    wrong.push("R".parse().unwrap());

    let reply = wrong.to_string();
    let adapter = SolverAdapter::new(move |_: &str| -> Result<String, OracleError> {
        Ok(reply.clone())
    });

    assert!(matches!(adapter.solve(&state), Err(CubeError::SolveFailed(_))));
}

/// A recolored cube with uniform faces is not treated as solved.
#[test_log::test]
fn test_recolored_cube_is_not_skipped() {
    let facelets = ["D", "R", "F", "U", "L", "B"].map(|l| l.repeat(9)).concat();
    let mirrored = decode(&facelets).unwrap();

    let adapter = SolverAdapter::new(|_: &str| -> Result<String, OracleError> {
        Err(OracleError::Rejected("Error 3: Not all 12 edges exist exactly once".into()))
    });
    assert!(matches!(
        adapter.solve(&mirrored),
        Err(CubeError::SolveFailed(_))
    ));
}

/// Only 3x3x3 cubes go to the solver.
#[test]
fn test_unsupported_size() {
    let adapter = SolverAdapter::new(|_: &str| -> Result<String, OracleError> {
        panic!("oracle must not be called")
    });

    for size in [2, 4, 6] {
        let mut state = CubeState::new(size).unwrap();
        state.apply_notation("R U").unwrap();
        assert_eq!(adapter.solve(&state), Err(CubeError::UnsupportedSize(size)));
    }
}

// =============================================================================
// Encoding Tests
// =============================================================================

/// Decoding an encoding gives back the same state.
#[test]
fn test_encode_decode_round_trip() {
    for seed in 0..10 {
        let (state, _) = scrambled(seed);
        let facelets = encode(&state).unwrap();

        assert_eq!(facelets.len(), 54);
        assert_eq!(decode(&facelets).unwrap(), state);
    }
}

/// Malformed strings do not decode.
#[test]
fn test_decode_malformed() {
    let adapter = SolverAdapter::new(|_: &str| -> Result<String, OracleError> { Ok(String::new()) });
    assert!(matches!(adapter.decode("UUUU"), Err(CubeError::Encoding(_))));
    assert!(matches!(
        adapter.decode(&"X".repeat(54)),
        Err(CubeError::Encoding(_))
    ));
}

// =============================================================================
// Command Oracle Tests
// =============================================================================

/// A program that is not installed makes the solver unavailable.
#[test_log::test]
fn test_command_missing_program() {
    let (state, _) = scrambled(11);
    let adapter = SolverAdapter::command(
        OracleConfig::default().with_program("cube-engine-test-no-such-solver"),
    );

    assert!(matches!(
        adapter.solve(&state),
        Err(CubeError::SolverUnavailable(_))
    ));
}

/// A program's stdout is parsed as the solution.
#[cfg(unix)]
#[test_log::test]
fn test_command_reply() {
    let mut state = CubeState::new(3).unwrap();
    state.apply_notation("R U").unwrap();

    // The facelet string lands in $0 and is ignored.
    let oracle = CommandOracle::new(
        OracleConfig::default()
            .with_program("sh")
            .with_arg("-c")
            .with_arg("echo \"U' R' (2)\""),
    );
    let solution = SolverAdapter::new(oracle).solve(&state).unwrap();

    assert_eq!(solution, MoveSequence::parse("U' R'").unwrap());
}

/// Non-zero exits and `Error` replies are solve failures.
#[cfg(unix)]
#[test_log::test]
fn test_command_failures() {
    let (state, _) = scrambled(12);

    let exits = SolverAdapter::command(
        OracleConfig::default()
            .with_program("sh")
            .with_arg("-c")
            .with_arg("exit 3"),
    );
    assert!(matches!(exits.solve(&state), Err(CubeError::SolveFailed(_))));

    let complains = SolverAdapter::command(
        OracleConfig::default()
            .with_program("sh")
            .with_arg("-c")
            .with_arg("echo 'Error 1: There is not exactly one facelet of each colour'"),
    );
    assert!(matches!(
        complains.solve(&state),
        Err(CubeError::SolveFailed(_))
    ));

    // Echoing the facelet string back is not notation.
    let echoes = SolverAdapter::command(OracleConfig::default().with_program("echo"));
    assert!(matches!(echoes.solve(&state), Err(CubeError::SolveFailed(_))));
}
