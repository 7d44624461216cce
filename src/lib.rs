//! HTTP service in front of the Lagrange latency solver.
//!
//! `POST /optimize` validates the six parameters, tries the native solver
//! executable, falls back to the in-process solver, and answers with the
//! enriched result tagged by the engine that produced it.

pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Settings;
pub use domain::fallback::FallbackOrchestrator;
