//! Native solver executable.
//!
//! `lagrange-solver <minRate> <maxPower> <maxBandwidth> <coeffA> <coeffB> <coeffC>`
//! prints `{rate, power, bandwidth, latency, iterations}` as JSON and exits 0,
//! or prints the reason to stderr and exits 1.

use std::env;
use std::process::ExitCode;

use latency_core::{round_to, solve, OptimizationRequest};
use serde_json::json;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("lagrange-solver");

    if args.len() != 7 {
        eprintln!("Usage: {program} <minRate> <maxPower> <maxBandwidth> <coeffA> <coeffB> <coeffC>");
        eprintln!("Example: {program} 5.0 2.5 20.0 1.2 0.8 0.5");
        return ExitCode::FAILURE;
    }

    // Unparsable arguments become 0 and are rejected by validation.
    let values: Vec<f64> = args[1..]
        .iter()
        .map(|arg| arg.trim().parse::<f64>().unwrap_or(0.0))
        .collect();
    let request = OptimizationRequest::new(
        values[0], values[1], values[2], values[3], values[4], values[5],
    );

    let request = match request.validate() {
        Ok(request) => request,
        Err(err) => {
            eprintln!("ERROR: Invalid input constraints: {err}");
            return ExitCode::FAILURE;
        }
    };

    let output = solve(&request);
    if let Err(err) = output.check_finite() {
        eprintln!("ERROR: Optimization diverged: {err}");
        return ExitCode::FAILURE;
    }
    let body = json!({
        "rate": round_to(output.rate, 4),
        "power": round_to(output.power, 4),
        "bandwidth": round_to(output.bandwidth, 4),
        "latency": round_to(output.latency, 6),
        "iterations": output.iterations,
    });

    match serde_json::to_string_pretty(&body) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
