//! # Lagrange Latency API Client
//!
//! A Rust client SDK for the latency optimization service. When the service
//! cannot be reached at all, [`OptimizerClient::optimize`] solves the problem
//! locally with [`ClientMirror`], which runs the same validator and solver
//! as the service.
//!
//! ## Example
//!
//! ```no_run
//! use latency_opt_sdk::{OptimizerClient, OptimizationRequestBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OptimizerClient::new("http://localhost:5050")?;
//!
//!     let request = OptimizationRequestBuilder::new()
//!         .min_rate(5.0)
//!         .max_power(40.0)
//!         .max_bandwidth(50.0)
//!         .coefficients(10.0, 10.0, 10.0)
//!         .build()?;
//!
//!     let response = client.optimize(&request).await?;
//!     println!("{} via {}", response.result.latency, response.result.engine);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod client;
pub mod error;
pub mod mirror;
pub mod types;

pub use builder::OptimizationRequestBuilder;
pub use client::OptimizerClient;
pub use error::{OptimizerError, Result};
pub use mirror::ClientMirror;
pub use types::{
    Engine, HealthResponse, OptimizationRequest, OptimizationResult, OptimizeResponse,
};
