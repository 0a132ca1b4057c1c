//! Hand-off to an external two-phase solver.
//!
//! - `facelets`: the facelet-string encoding, defined for any size
//! - `oracle`: the solver contract and a process-backed implementation
//! - `adapter`: size checks, reply parsing and verification

pub mod adapter;
pub mod facelets;
pub mod oracle;

pub use adapter::{decode, encode, parse_reply, solved_facelets, SolverAdapter, SOLVER_SIZE};
pub use facelets::{facelet_cell, facelet_count, from_facelets, to_facelets, FACELET_ORDER};
pub use oracle::{CommandOracle, OracleConfig, OracleError, SolverOracle};
