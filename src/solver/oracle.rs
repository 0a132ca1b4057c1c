//! Solver oracles: whatever turns a facelet string into a move list.
//!
//! The adapter never solves anything itself. It hands a 54-letter facelet
//! string to a [`SolverOracle`] and gets back whitespace-separated notation.
//! [`CommandOracle`] runs an external two-phase solver program; tests plug in
//! their own implementations.

use std::io;
use std::process::Command;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::CubeError;

/// Why an oracle produced no solution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// The backend could not be reached at all.
    #[error("{0}")]
    Unavailable(String),
    /// The backend ran but refused the input or reported an error.
    #[error("{0}")]
    Rejected(String),
}

impl From<OracleError> for CubeError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::Unavailable(msg) => CubeError::SolverUnavailable(msg),
            OracleError::Rejected(msg) => CubeError::SolveFailed(msg),
        }
    }
}

/// A source of solutions for 3x3x3 facelet strings.
///
/// Implementations must be safe to call from several threads at once.
pub trait SolverOracle: Send + Sync {
    /// Solve `facelets` (URFDLB order) and return the raw reply.
    fn solve(&self, facelets: &str) -> Result<String, OracleError>;
}

impl<F> SolverOracle for F
where
    F: Fn(&str) -> Result<String, OracleError> + Send + Sync,
{
    fn solve(&self, facelets: &str) -> Result<String, OracleError> {
        self(facelets)
    }
}

/// Which program [`CommandOracle`] runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Program name or path, looked up on `PATH` if bare.
    pub program: String,

    /// Arguments placed before the facelet string.
    pub args: Vec<String>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            program: "kociemba".to_string(),
            args: Vec::new(),
        }
    }
}

impl OracleConfig {
    /// Run `program` instead of the default.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Append an argument passed ahead of the facelet string.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// Oracle backed by an external solver program.
///
/// Runs `program args... FACELETS` once per call and reads the solution from
/// stdout. A missing program maps to [`OracleError::Unavailable`]; a non-zero
/// exit or a reply starting with `Error` maps to [`OracleError::Rejected`].
#[derive(Clone, Debug, Default)]
pub struct CommandOracle {
    config: OracleConfig,
}

impl CommandOracle {
    #[must_use]
    pub fn new(config: OracleConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }
}

impl SolverOracle for CommandOracle {
    fn solve(&self, facelets: &str) -> Result<String, OracleError> {
        let program = &self.config.program;
        debug!("Running {program} on {facelets}");

        let output = Command::new(program)
            .args(&self.config.args)
            .arg(facelets)
            .output()
            .map_err(|err| {
                warn!("Failed to run solver {program}: {err}");
                match err.kind() {
                    io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                        OracleError::Unavailable(format!("cannot run {program}: {err}"))
                    }
                    _ => OracleError::Rejected(format!("{program} failed to run: {err}")),
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("Solver {program} exited with {}: {}", output.status, stderr.trim());
            return Err(OracleError::Rejected(format!(
                "{program} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        if stdout.to_ascii_lowercase().starts_with("error") {
            warn!("Solver {program} rejected {facelets}: {stdout}");
            return Err(OracleError::Rejected(stdout));
        }

        Ok(stdout)
    }
}
