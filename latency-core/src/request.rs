use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validate::validate;

/// Wire names of the six parameters, in native solver argument order.
pub const FIELDS: [&str; 6] = [
    "minRate",
    "maxPower",
    "maxBandwidth",
    "coeffA",
    "coeffB",
    "coeffC",
];

/// Parameters of one latency minimization problem.
///
/// Only values that went through [`validate`] are guaranteed to be finite,
/// strictly positive and to satisfy `min_rate < max_bandwidth * 10`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    /// Lower bound on the transmission rate `x1`.
    pub min_rate: f64,
    /// Upper bound on the power `x2`.
    pub max_power: f64,
    /// Upper bound on the bandwidth `x3`.
    pub max_bandwidth: f64,
    pub coeff_a: f64,
    pub coeff_b: f64,
    pub coeff_c: f64,
}

impl OptimizationRequest {
    pub fn new(
        min_rate: f64,
        max_power: f64,
        max_bandwidth: f64,
        coeff_a: f64,
        coeff_b: f64,
        coeff_c: f64,
    ) -> Self {
        Self {
            min_rate,
            max_power,
            max_bandwidth,
            coeff_a,
            coeff_b,
            coeff_c,
        }
    }

    /// Runs the same rules as [`validate`] on an already typed request.
    pub fn validate(&self) -> Result<Self, ValidationError> {
        let fields: serde_json::Map<String, serde_json::Value> = FIELDS
            .iter()
            .zip(self.values())
            .map(|(name, value)| {
                // Non-finite floats have no JSON representation and become null,
                // which the validator rejects like any other non-positive value.
                let value = serde_json::Number::from_f64(value)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null);
                (name.to_string(), value)
            })
            .collect();
        validate(&fields)
    }

    /// Positional arguments for the native solver, in [`FIELDS`] order.
    pub fn to_args(&self) -> Vec<String> {
        self.values().iter().map(f64::to_string).collect()
    }

    fn values(&self) -> [f64; 6] {
        [
            self.min_rate,
            self.max_power,
            self.max_bandwidth,
            self.coeff_a,
            self.coeff_b,
            self.coeff_c,
        ]
    }
}
