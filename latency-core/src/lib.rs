//! Constrained latency minimization.
//!
//! Minimizes `L(x1, x2, x3) = a/x1 + b/x2 + c/x3` subject to
//! `x1 >= minRate`, `x2 <= maxPower` and `x3 <= maxBandwidth` with a
//! primal-dual projected-gradient iteration. Every entry point (the HTTP
//! service, the native executable, the client-side mirror) goes through
//! [`validate`], [`solve`] and [`enrich`] from this crate.

pub mod engine;
pub mod enrich;
pub mod error;
pub mod request;
pub mod solver;
pub mod validate;

pub use engine::Engine;
pub use enrich::{baseline_latency, enrich, round_to, OptimizationResult};
pub use error::{NonFiniteError, ValidationError};
pub use request::{OptimizationRequest, FIELDS};
pub use solver::{
    objective, solve, solve_with, Iteration, SolverOutput, CONVERGENCE_THRESHOLD, MAX_ITERATIONS,
    STEP_SIZE,
};
pub use validate::validate;
