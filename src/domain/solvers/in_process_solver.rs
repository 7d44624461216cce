use actix_web::web;
use latency_core::{Engine, OptimizationRequest, SolverOutput};

use crate::domain::solver::{Solver, SolverError};

/// Runs the Lagrange solver on the blocking thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct InProcessSolver;

impl InProcessSolver {
    pub fn new() -> Self {
        InProcessSolver
    }
}

impl Solver for InProcessSolver {
    async fn solve(&self, request: &OptimizationRequest) -> Result<SolverOutput, SolverError> {
        let request = *request;
        let output = web::block(move || latency_core::solve(&request))
            .await
            .map_err(|err| SolverError::Unexpected(err.to_string()))?;

        output.check_finite()?;
        Ok(output)
    }

    fn engine(&self) -> Engine {
        Engine::InProcessSolver
    }
}
