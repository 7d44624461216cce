use latency_opt_sdk::{Engine, OptimizationRequestBuilder, OptimizerClient};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_url = env::var("LATENCY_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5050".to_string());
    let client = OptimizerClient::new(&api_url)?;

    match client.health_check().await {
        Ok(health) => println!(
            "Server healthy (version {}, at {})",
            health.version, health.timestamp
        ),
        Err(e) => println!("Health check failed: {}", e),
    }

    // Minimize L = 1.2/x1 + 0.8/x2 + 0.5/x3
    // subject to x1 >= 5, x2 <= 2.5, x3 <= 20
    let request = OptimizationRequestBuilder::new()
        .min_rate(5.0)
        .max_power(2.5)
        .max_bandwidth(20.0)
        .coefficients(1.2, 0.8, 0.5)
        .build()?;

    let response = client.optimize(&request).await?;
    let result = &response.result;

    if result.engine == Engine::ClientMirror {
        println!("Service unreachable, solved locally");
    }
    println!("{}", response.message);
    println!("  rate:        {}", result.rate);
    println!("  power:       {}", result.power);
    println!("  bandwidth:   {}", result.bandwidth);
    println!("  latency:     {} (baseline {})", result.latency, result.baseline_latency);
    println!("  improvement: {}%", result.improvement_percent);

    Ok(())
}
