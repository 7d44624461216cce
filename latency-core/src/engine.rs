use serde::{Deserialize, Serialize};
use std::fmt;

/// Solver implementation that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    /// External executable speaking the six-argument / JSON-stdout contract.
    NativeSolver,
    /// The solver in this crate, run inside the service.
    InProcessSolver,
    /// The solver in this crate, run by the caller because the service was unreachable.
    ClientMirror,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::NativeSolver => "native-solver",
            Engine::InProcessSolver => "in-process-solver",
            Engine::ClientMirror => "client-mirror",
        }
    }

    /// Human readable description used in response messages.
    pub fn description(&self) -> &'static str {
        match self {
            Engine::NativeSolver => "native Lagrange solver",
            Engine::InProcessSolver => "Lagrange Multiplier method",
            Engine::ClientMirror => "client-side solver",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
