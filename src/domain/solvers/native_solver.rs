use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use latency_core::{Engine, OptimizationRequest, SolverOutput};
use log::debug;
use tokio::process::Command;

use crate::convert::parse_native_output;
use crate::domain::solver::{Solver, SolverError};

/// Runs an external executable that takes the six parameters as positional
/// arguments and prints a JSON result on stdout.
#[derive(Debug, Clone)]
pub struct NativeSolver {
    bin: PathBuf,
    timeout: Duration,
}

impl NativeSolver {
    pub fn new(bin: impl Into<PathBuf>, timeout: Duration) -> Self {
        NativeSolver {
            bin: bin.into(),
            timeout,
        }
    }
}

impl Solver for NativeSolver {
    async fn solve(&self, request: &OptimizationRequest) -> Result<SolverOutput, SolverError> {
        debug!("spawning {} {:?}", self.bin.display(), request.to_args());

        // Dropping the child (timeout included) kills it; tokio reaps it.
        let child = Command::new(&self.bin)
            .args(request.to_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(SolverError::Unavailable)?;

        // wait_with_output drains both pipes before reaping.
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| SolverError::TimedOut(self.timeout))?
            .map_err(SolverError::Unavailable)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(SolverError::Failed {
                status: output.status,
                stderr,
            });
        }

        parse_native_output(&output.stdout)
    }

    fn engine(&self) -> Engine {
        Engine::NativeSolver
    }
}
