use latency_core::{enrich, solve, Engine, OptimizationRequest};

use crate::error::Result;

use crate::types::OptimizeResponse;

const METHOD: &str = "Lagrange Multiplier";

/// Local copy of the service pipeline: validate, solve, enrich.
///
/// Used only when the service is unreachable. Results match the service's
/// in-process solver to the rounding precision, tagged `client-mirror`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientMirror;

impl ClientMirror {
    pub fn new() -> Self {
        ClientMirror
    }

    pub fn optimize(&self, request: &OptimizationRequest) -> Result<OptimizeResponse> {
        let request = request.validate()?;
        let result = enrich(&solve(&request), &request, Engine::ClientMirror)?;

        Ok(OptimizeResponse {
            inputs: request,
            message: result.message(),
            result,
            method: METHOD.to_string(),
        })
    }
}
