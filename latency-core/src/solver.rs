//! Primal-dual projected-gradient solver.
//!
//! Each iteration raises a dual variable only while its bound is violated
//! (and zeroes it otherwise), takes a gradient step on the Lagrangian, then
//! projects the iterate back onto the bounds. The run stops once the
//! objective changes by less than [`CONVERGENCE_THRESHOLD`] between two
//! iterations, or after [`MAX_ITERATIONS`].

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, NonFiniteError};
use crate::request::OptimizationRequest;

pub const MAX_ITERATIONS: u32 = 1000;
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;
pub const STEP_SIZE: f64 = 0.01;

/// Unrounded solver output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverOutput {
    pub rate: f64,
    pub power: f64,
    pub bandwidth: f64,
    pub latency: f64,
    /// Iterations performed; `None` when an external solver did not report it.
    pub iterations: Option<u32>,
}

impl SolverOutput {
    /// Large but valid coefficients can overflow the objective to infinity.
    pub fn check_finite(&self) -> Result<(), NonFiniteError> {
        check_finite(&[
            ("rate", self.rate),
            ("power", self.power),
            ("bandwidth", self.bandwidth),
            ("latency", self.latency),
        ])
    }
}

/// Snapshot handed to the observer of [`solve_with`] after each iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    /// 1-based iteration number.
    pub number: u32,
    /// Projected iterate `(x1, x2, x3)`.
    pub point: [f64; 3],
    /// Dual variables `(lambda1, lambda2, lambda3)` used for this step.
    pub duals: [f64; 3],
    /// Objective at the projected iterate.
    pub objective: f64,
}

/// `L(x1, x2, x3) = a/x1 + b/x2 + c/x3`
pub fn objective(request: &OptimizationRequest, x1: f64, x2: f64, x3: f64) -> f64 {
    request.coeff_a / x1 + request.coeff_b / x2 + request.coeff_c / x3
}

/// Minimizes the latency objective for a validated request.
pub fn solve(request: &OptimizationRequest) -> SolverOutput {
    solve_with(request, |_| {})
}

/// Same as [`solve`], reporting every iteration to `observer`.
pub fn solve_with<F>(request: &OptimizationRequest, mut observer: F) -> SolverOutput
where
    F: FnMut(&Iteration),
{
    let mut state = SolverState::new(request);

    while state.iterations < MAX_ITERATIONS {
        let converged = state.step(request);
        observer(&Iteration {
            number: state.iterations,
            point: state.x,
            duals: state.lambda,
            objective: state.prev_objective,
        });
        if converged {
            break;
        }
    }

    let [rate, power, bandwidth] = state.x;
    SolverOutput {
        rate,
        power,
        bandwidth,
        latency: objective(request, rate, power, bandwidth),
        iterations: Some(state.iterations),
    }
}

/// Per-run state, owned by a single call to [`solve_with`].
#[derive(Debug, Clone)]
struct SolverState {
    x: [f64; 3],
    lambda: [f64; 3],
    prev_objective: f64,
    iterations: u32,
}

impl SolverState {
    /// Starts from a point strictly inside the bounds with inactive duals.
    fn new(request: &OptimizationRequest) -> Self {
        Self {
            x: [
                request.min_rate + 1.0,
                request.max_power * 0.8,
                request.max_bandwidth * 0.8,
            ],
            lambda: [0.0; 3],
            prev_objective: f64::INFINITY,
            iterations: 0,
        }
    }

    /// Performs one iteration and reports whether it converged.
    fn step(&mut self, request: &OptimizationRequest) -> bool {
        self.iterations += 1;
        let [x1, x2, x3] = self.x;

        let margins = [
            x1 - request.min_rate,
            request.max_power - x2,
            request.max_bandwidth - x3,
        ];
        for (lambda, margin) in self.lambda.iter_mut().zip(margins) {
            *lambda = if margin < 0.0 {
                (*lambda - STEP_SIZE * margin).max(0.0)
            } else {
                0.0
            };
        }

        let grad = [
            -request.coeff_a / (x1 * x1),
            -request.coeff_b / (x2 * x2),
            -request.coeff_c / (x3 * x3),
        ];
        let [l1, l2, l3] = self.lambda;

        // x1 is bounded below, x2 and x3 above: opposite dual signs.
        let next = [
            (x1 - STEP_SIZE * (grad[0] + l1)).max(request.min_rate),
            (x2 - STEP_SIZE * (grad[1] - l2)).min(request.max_power),
            (x3 - STEP_SIZE * (grad[2] - l3)).min(request.max_bandwidth),
        ];

        let current = objective(request, next[0], next[1], next[2]);
        let converged = (self.prev_objective - current).abs() < CONVERGENCE_THRESHOLD;
        self.x = next;
        self.prev_objective = current;
        converged
    }
}
