use log::error;
use serde_json::Value;

use crate::domain::fallback::FallbackOrchestrator;
use crate::domain::solver::Solver;
use crate::domain::validate::validate_payload;
use crate::error::ApiError;
use crate::models::OptimizeResponse;

pub const METHOD: &str = "Lagrange Multiplier";

/// Validates the payload, runs the fallback chain and builds the response.
pub async fn optimize<N: Solver>(
    payload: &Value,
    orchestrator: &FallbackOrchestrator<N>,
) -> Result<OptimizeResponse, ApiError> {
    let request = validate_payload(payload)?;

    let result = orchestrator.run(&request).await.map_err(|err| {
        error!("optimization failed for {request:?}: {err}");
        ApiError::OptimizationFailed
    })?;

    Ok(OptimizeResponse {
        inputs: request,
        message: result.message(),
        result,
        method: METHOD.to_string(),
    })
}
