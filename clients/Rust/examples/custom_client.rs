use latency_opt_sdk::{OptimizationRequest, OptimizerClient};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_url = env::var("LATENCY_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5050".to_string());

    // A short timeout makes a hung service count as unreachable, so the
    // local mirror answers instead.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(500))
        .build()?;
    let client = OptimizerClient::with_client(&api_url, http)?;

    let request = OptimizationRequest::new(0.5, 1.0, 1.0, 5.0, 5.0, 5.0);
    let response = client.optimize(&request).await?;

    println!("engine:     {}", response.result.engine);
    println!("iterations: {:?}", response.result.iterations);
    println!("latency:    {}", response.result.latency);
    Ok(())
}
