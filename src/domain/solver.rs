use std::future::Future;
use std::process::ExitStatus;
use std::time::Duration;

use latency_core::{Engine, NonFiniteError, OptimizationRequest, SolverOutput};
use thiserror::Error;

/// Why a solver tier did not produce a result.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The executable could not be located or started.
    #[error("native solver unavailable: {0}")]
    Unavailable(#[source] std::io::Error),

    /// The executable exited non-zero.
    #[error("native solver exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    /// The executable did not finish within its time budget and was killed.
    #[error("native solver timed out after {0:?}")]
    TimedOut(Duration),

    /// The executable exited cleanly but its stdout is not a solver result.
    #[error("native solver output invalid: {0}")]
    OutputInvalid(String),

    /// The in-process solver failed; never expected for validated input.
    #[error("in-process solver failed: {0}")]
    Unexpected(String),

    /// Valid but extreme inputs overflowed the result.
    #[error("solver result overflowed: {0}")]
    NonFinite(#[from] NonFiniteError),
}

/// Common interface of the solver tiers.
pub trait Solver: Send + Sync {
    /// Solve one validated request.
    fn solve(
        &self,
        request: &OptimizationRequest,
    ) -> impl Future<Output = Result<SolverOutput, SolverError>> + Send;

    /// Tag attached to results from this solver.
    fn engine(&self) -> Engine;
}
