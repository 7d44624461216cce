use latency_core::{enrich, Engine, OptimizationRequest, OptimizationResult, SolverOutput};
use log::{info, warn};

use crate::config::Settings;
use crate::domain::solver::{Solver, SolverError};
use crate::domain::solvers::{InProcessSolver, NativeSolver};

/// Where a request currently is in the fallback chain.
#[derive(Debug)]
enum Stage {
    TryNative,
    TryInProcess,
    Done(SolverOutput, Engine),
}

/// Tries the native solver once, then the in-process solver once.
///
/// A native failure of any kind is logged and routed to the in-process tier;
/// it never reaches the caller. Only an in-process failure is returned.
#[derive(Debug, Clone)]
pub struct FallbackOrchestrator<N = NativeSolver> {
    native: Option<N>,
    in_process: InProcessSolver,
}

impl FallbackOrchestrator<NativeSolver> {
    pub fn from_settings(settings: &Settings) -> Self {
        let native = settings
            .native_enabled
            .then(|| NativeSolver::new(settings.lagrange_bin.clone(), settings.native_timeout));
        FallbackOrchestrator::new(native)
    }
}

impl<N: Solver> FallbackOrchestrator<N> {
    /// `None` skips the native tier entirely.
    pub fn new(native: Option<N>) -> Self {
        FallbackOrchestrator {
            native,
            in_process: InProcessSolver::new(),
        }
    }

    pub async fn run(&self, request: &OptimizationRequest) -> Result<OptimizationResult, SolverError> {
        let mut stage = Stage::TryNative;
        loop {
            stage = match stage {
                Stage::TryNative => self.try_native(request).await,
                Stage::TryInProcess => {
                    let output = self.in_process.solve(request).await?;
                    Stage::Done(output, self.in_process.engine())
                }
                Stage::Done(output, engine) => {
                    info!(
                        "optimization done by {engine} in {} iterations",
                        output.iterations.map_or_else(|| "?".to_string(), |n| n.to_string())
                    );
                    return Ok(enrich(&output, request, engine)?);
                }
            };
        }
    }

    async fn try_native(&self, request: &OptimizationRequest) -> Stage {
        let Some(native) = &self.native else {
            return Stage::TryInProcess;
        };
        match native.solve(request).await {
            Ok(output) => Stage::Done(output, native.engine()),
            Err(err) => {
                warn!("{} failed, falling back to {}: {err}", native.engine(), self.in_process.engine());
                Stage::TryInProcess
            }
        }
    }
}
