use serde::{Deserialize, Serialize};

pub use latency_core::{Engine, OptimizationRequest, OptimizationResult};

/// Response of the optimize endpoint, or of the local mirror
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeResponse {
    /// Parameters the result was computed for
    pub inputs: OptimizationRequest,
    /// Rounded result, tagged with the engine that produced it
    pub result: OptimizationResult,
    /// Human readable completion message
    pub message: String,
    /// Optimization method name
    pub method: String,
}

/// Response of the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// RFC 3339 server time
    pub timestamp: String,
}

/// Error body returned by the service
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
