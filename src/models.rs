use serde::{Deserialize, Serialize};

use latency_core::{OptimizationRequest, OptimizationResult};

// ---------- API (wire) types ----------

/// Body of a successful `POST /optimize`.
#[derive(Debug, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub inputs: OptimizationRequest,
    pub result: OptimizationResult,
    pub message: String,
    pub method: String,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// RFC 3339 time the check was answered.
    pub timestamp: String,
}

// ---------- Native solver stdout ----------

/// The JSON object a native solver prints on success.
#[derive(Debug, Clone, Deserialize)]
pub struct NativeSolverOutput {
    pub rate: f64,
    pub power: f64,
    pub bandwidth: f64,
    pub latency: f64,
    #[serde(default)]
    pub iterations: Option<u32>,
}
