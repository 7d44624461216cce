use latency_core::{validate, OptimizationRequest, ValidationError};
use serde_json::{Map, Value};

/// Validates a raw request body. Anything other than a JSON object is
/// treated as an empty mapping, so the first field is reported missing.
pub fn validate_payload(payload: &Value) -> Result<OptimizationRequest, ValidationError> {
    match payload {
        Value::Object(fields) => validate(fields),
        _ => validate(&Map::new()),
    }
}
