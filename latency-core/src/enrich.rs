use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::error::{check_finite, NonFiniteError};
use crate::request::OptimizationRequest;
use crate::solver::{objective, SolverOutput};

const POINT_DECIMALS: i32 = 4;
const BASELINE_DECIMALS: i32 = 6;
const PERCENT_DECIMALS: i32 = 2;

/// Presentation form of a solver run, identical across entry points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub rate: f64,
    pub power: f64,
    pub bandwidth: f64,
    pub latency: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
    pub baseline_latency: f64,
    pub improvement_percent: f64,
    pub engine: Engine,
}

impl OptimizationResult {
    /// One-line completion message shown alongside the result.
    pub fn message(&self) -> String {
        match self.iterations {
            Some(n) => format!(
                "Optimization complete using {} ({n} iterations)",
                self.engine.description()
            ),
            None => format!("Optimization complete using {}", self.engine.description()),
        }
    }
}

/// Objective at the naive reference point: rate at its floor, power and
/// bandwidth at half their caps.
pub fn baseline_latency(request: &OptimizationRequest) -> f64 {
    objective(
        request,
        request.min_rate,
        request.max_power * 0.5,
        request.max_bandwidth * 0.5,
    )
}

/// Adds the baseline comparison and rounds everything for presentation.
///
/// Fails when the solver output or the baseline is not finite, so no entry
/// point ever presents an overflowed result.
pub fn enrich(
    output: &SolverOutput,
    request: &OptimizationRequest,
    engine: Engine,
) -> Result<OptimizationResult, NonFiniteError> {
    output.check_finite()?;
    let baseline = baseline_latency(request);
    let improvement = (baseline - output.latency) / baseline * 100.0;
    check_finite(&[("baselineLatency", baseline), ("improvementPercent", improvement)])?;

    Ok(OptimizationResult {
        rate: round_to(output.rate, POINT_DECIMALS),
        power: round_to(output.power, POINT_DECIMALS),
        bandwidth: round_to(output.bandwidth, POINT_DECIMALS),
        latency: round_to(output.latency, POINT_DECIMALS),
        iterations: output.iterations,
        baseline_latency: round_to(baseline, BASELINE_DECIMALS),
        improvement_percent: round_to(improvement, PERCENT_DECIMALS),
        engine,
    })
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_to_precision() {
        assert_eq!(round_to(6.005_552_985, 4), 6.0056);
        assert_eq!(round_to(23.185_416, 2), 23.19);
        assert_eq!(round_to(-1.005_1, 2), -1.01);
        assert_eq!(round_to(2.9, 6), 2.9);
    }

    #[test]
    fn test_baseline_uses_half_caps() {
        let request = OptimizationRequest::new(5.0, 40.0, 50.0, 10.0, 10.0, 10.0);
        assert_relative_eq!(baseline_latency(&request), 10.0 / 5.0 + 10.0 / 20.0 + 10.0 / 25.0);
    }

    #[test]
    fn test_enrich_reference_problem() {
        let request = OptimizationRequest::new(5.0, 40.0, 50.0, 10.0, 10.0, 10.0);
        let result = enrich(&solve(&request), &request, Engine::InProcessSolver).unwrap();

        assert_eq!(result.rate, 6.0056);
        assert_eq!(result.power, 32.0002);
        assert_eq!(result.bandwidth, 40.0001);
        assert_eq!(result.latency, 2.2276);
        assert_eq!(result.iterations, Some(2));
        assert_eq!(result.baseline_latency, 2.9);
        assert_eq!(result.improvement_percent, 23.19);
        assert_eq!(result.engine, Engine::InProcessSolver);
    }

    #[test]
    fn test_improvement_is_computed_from_unrounded_latency() {
        let request = OptimizationRequest::new(1.0, 0.5, 0.5, 1.0, 50.0, 50.0);
        let output = SolverOutput {
            rate: 2.0,
            power: 0.5,
            bandwidth: 0.5,
            latency: 200.5,
            iterations: None,
        };
        let result = enrich(&output, &request, Engine::NativeSolver).unwrap();
        assert_eq!(result.baseline_latency, 401.0);
        assert_eq!(result.improvement_percent, 50.0);
        assert_eq!(result.iterations, None);
    }

    #[test]
    fn test_message_names_engine_and_iterations() {
        let request = OptimizationRequest::new(5.0, 40.0, 50.0, 10.0, 10.0, 10.0);
        let mut result = enrich(&solve(&request), &request, Engine::InProcessSolver).unwrap();
        assert_eq!(
            result.message(),
            "Optimization complete using Lagrange Multiplier method (2 iterations)"
        );
        result.iterations = None;
        result.engine = Engine::NativeSolver;
        assert_eq!(result.message(), "Optimization complete using native Lagrange solver");
    }

    #[test]
    fn test_enrich_rejects_overflowed_output() {
        let request = OptimizationRequest::new(1.0, 1.0, 1.0, 1.0, 1e308, 1e308);
        let err = enrich(&solve(&request), &request, Engine::ClientMirror).unwrap_err();
        assert_eq!(err.field, "latency");
    }

    #[test]
    fn test_enrich_rejects_overflowed_baseline() {
        // The optimum stays finite but the half-cap baseline doubles past f64::MAX.
        let request = OptimizationRequest::new(1.0, 1.0, 1.0, 1.0, 1e308, 1.0);
        let output = SolverOutput {
            rate: 2.0,
            power: 1.0,
            bandwidth: 1.0,
            latency: 0.5 + 1e308 + 1.0,
            iterations: Some(3),
        };
        let err = enrich(&output, &request, Engine::InProcessSolver).unwrap_err();
        assert_eq!(err.field, "baselineLatency");
        assert!(err.value.is_infinite());
    }

    #[test]
    fn test_result_wire_shape() {
        let request = OptimizationRequest::new(5.0, 40.0, 50.0, 10.0, 10.0, 10.0);
        let result = enrich(&solve(&request), &request, Engine::ClientMirror).unwrap();
        let value = serde_json::to_value(result).unwrap();
        for key in [
            "rate",
            "power",
            "bandwidth",
            "latency",
            "iterations",
            "baselineLatency",
            "improvementPercent",
            "engine",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["engine"], "client-mirror");
    }
}
